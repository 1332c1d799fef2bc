//! Shared test utilities for the book-glossary test suite.
//!
//! Provides an in-memory [`MockFs`] and two [`Book`] implementations so the
//! resolver can be exercised without a real content tree.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let fs = MockFs::new();
//! fs.add_file("GLOSSARY.md", 10);
//! fs.set_delay("GLOSSARY.md", Duration::from_millis(50));
//! let book = MockBook::new(fs).ignore("GLOSSARY.md");
//!
//! let found = find_parsable_file(&book, &registry, "GLOSSARY", &config).await?;
//! assert_eq!(book.fs().probes(), vec!["GLOSSARY.md", "GLOSSARY.adoc"]);
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};
use std::time::{Duration, SystemTime};

use crate::book::{Book, BookError};
use crate::fs::{ContentFs, FileStat, LocalFs};

// =========================================================================
// In-memory filesystem
// =========================================================================

#[derive(Debug, Clone)]
struct MockEntry {
    len: u64,
    delay: Duration,
}

/// In-memory [`ContentFs`] with per-path latency, failure injection and a
/// record of every call.
#[derive(Debug, Default)]
pub struct MockFs {
    entries: RwLock<HashMap<PathBuf, MockEntry>>,
    failing_probes: RwLock<HashSet<PathBuf>>,
    failing_stats: RwLock<HashSet<PathBuf>>,
    case_insensitive: bool,
    probes: Mutex<Vec<String>>,
    stats: Mutex<Vec<String>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// A filesystem that matches names ignoring ASCII case, like the default
    /// macOS and Windows volumes.
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
            ..Self::default()
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, len: u64) {
        let mut entries = self.entries.write().expect("MockFs lock poisoned");
        entries.insert(
            path.as_ref().to_path_buf(),
            MockEntry {
                len,
                delay: Duration::ZERO,
            },
        );
    }

    /// Make probes for `path` take `delay` before answering.
    pub fn set_delay(&self, path: impl AsRef<Path>, delay: Duration) {
        let mut entries = self.entries.write().expect("MockFs lock poisoned");
        let entry = entries
            .get_mut(path.as_ref())
            .unwrap_or_else(|| panic!("no mock file {}", path.as_ref().display()));
        entry.delay = delay;
    }

    /// Make `find_file` fail for `path` with a permission error.
    pub fn fail_probe(&self, path: impl AsRef<Path>) {
        let mut failing = self.failing_probes.write().expect("MockFs lock poisoned");
        failing.insert(path.as_ref().to_path_buf());
    }

    /// Make `stat_file` fail for `path` with a permission error.
    pub fn fail_stat(&self, path: impl AsRef<Path>) {
        let mut failing = self.failing_stats.write().expect("MockFs lock poisoned");
        failing.insert(path.as_ref().to_path_buf());
    }

    /// Paths passed to `find_file`, in call order.
    pub fn probes(&self) -> Vec<String> {
        self.probes.lock().expect("MockFs lock poisoned").clone()
    }

    /// Paths passed to `stat_file`, in call order.
    pub fn stats(&self) -> Vec<String> {
        self.stats.lock().expect("MockFs lock poisoned").clone()
    }

    fn lookup(&self, path: &Path) -> Option<(PathBuf, MockEntry)> {
        let entries = self.entries.read().expect("MockFs lock poisoned");
        if self.case_insensitive {
            let wanted = path.to_string_lossy().to_ascii_lowercase();
            entries
                .iter()
                .find(|(p, _)| p.to_string_lossy().to_ascii_lowercase() == wanted)
                .map(|(p, e)| (p.clone(), e.clone()))
        } else {
            entries.get(path).map(|e| (path.to_path_buf(), e.clone()))
        }
    }
}

fn permission_denied(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("permission denied: {}", path.display()),
    )
}

#[async_trait]
impl ContentFs for MockFs {
    async fn find_file(&self, dir: &Path, relative: &str) -> io::Result<Option<PathBuf>> {
        let path = dir.join(relative);
        self.probes
            .lock()
            .expect("MockFs lock poisoned")
            .push(path.to_string_lossy().into_owned());

        if self
            .failing_probes
            .read()
            .expect("MockFs lock poisoned")
            .contains(&path)
        {
            return Err(permission_denied(&path));
        }

        match self.lookup(&path) {
            Some((found, entry)) => {
                tokio::time::sleep(entry.delay).await;
                Ok(Some(found))
            }
            None => Ok(None),
        }
    }

    async fn stat_file(&self, path: &Path) -> io::Result<FileStat> {
        self.stats
            .lock()
            .expect("MockFs lock poisoned")
            .push(path.to_string_lossy().into_owned());

        if self
            .failing_stats
            .read()
            .expect("MockFs lock poisoned")
            .contains(path)
        {
            return Err(permission_denied(path));
        }

        let (_, entry) = self.lookup(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{}", path.display()))
        })?;
        Ok(FileStat {
            len: entry.len,
            is_file: true,
            mtime: Some(SystemTime::UNIX_EPOCH),
        })
    }
}

// =========================================================================
// Books
// =========================================================================

/// Book over a [`MockFs`] with an explicit ignore list.
#[derive(Debug)]
pub struct MockBook {
    fs: MockFs,
    ignored: HashSet<PathBuf>,
    failing_ignores: HashSet<PathBuf>,
}

impl MockBook {
    pub fn new(fs: MockFs) -> Self {
        Self {
            fs,
            ignored: HashSet::new(),
            failing_ignores: HashSet::new(),
        }
    }

    pub fn ignore(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignored.insert(path.into());
        self
    }

    /// Make the ignore predicate fail for `path`.
    pub fn fail_ignore(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_ignores.insert(path.into());
        self
    }

    pub fn fs(&self) -> &MockFs {
        &self.fs
    }
}

#[async_trait]
impl Book for MockBook {
    fn content_fs(&self) -> &dyn ContentFs {
        &self.fs
    }

    async fn is_content_file_ignored(&self, path: &Path) -> Result<bool, BookError> {
        if self.failing_ignores.contains(path) {
            return Err(BookError::IgnoreRule {
                path: path.display().to_string(),
                message: "unreadable ignore file".into(),
            });
        }
        Ok(self.ignored.contains(path))
    }
}

/// Book over a real directory that ignores nothing.
#[derive(Debug)]
pub struct DiskBook {
    fs: LocalFs,
}

impl DiskBook {
    pub fn new(fs: LocalFs) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl Book for DiskBook {
    fn content_fs(&self) -> &dyn ContentFs {
        &self.fs
    }

    async fn is_content_file_ignored(&self, _path: &Path) -> Result<bool, BookError> {
        Ok(false)
    }
}
