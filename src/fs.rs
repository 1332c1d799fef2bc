//! Content filesystem abstraction.
//!
//! The resolver never touches the disk directly. It talks to a
//! [`ContentFs`], which decides what "this file exists" means: a book may sit
//! on a plain directory, on an overlay of several roots, or in memory during
//! tests. Matching rules such as case sensitivity belong to the
//! implementation, not to the caller.
//!
//! [`LocalFs`] is the thin adapter over a single directory on disk.

use async_trait::async_trait;
use std::fs::Metadata;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// File status as reported by a [`ContentFs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    /// File size in bytes
    pub len: u64,
    /// Whether this is a regular file
    pub is_file: bool,
    /// Last modification time, when the backend knows it
    pub mtime: Option<SystemTime>,
}

impl From<&Metadata> for FileStat {
    fn from(meta: &Metadata) -> Self {
        Self {
            len: meta.len(),
            is_file: meta.is_file(),
            mtime: meta.modified().ok(),
        }
    }
}

/// Asynchronous, read-only view of a book's content.
///
/// Paths handed out by [`find_file`](ContentFs::find_file) are relative to
/// the content root and are what [`stat_file`](ContentFs::stat_file) and the
/// book's ignore predicate expect back.
#[async_trait]
pub trait ContentFs: Send + Sync + std::fmt::Debug {
    /// Look for `relative` inside `dir`.
    ///
    /// Returns the path of the file actually found, which may differ from the
    /// requested one (for example in case on a case-insensitive backend), or
    /// `None` when nothing matches.
    async fn find_file(&self, dir: &Path, relative: &str) -> io::Result<Option<PathBuf>>;

    /// Fetch status for a path previously returned by `find_file`.
    async fn stat_file(&self, path: &Path) -> io::Result<FileStat>;
}

/// [`ContentFs`] over a directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Whether `path` stays inside the content root once joined onto it: no
/// root or drive prefix, no `..`.
fn stays_in_root(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[async_trait]
impl ContentFs for LocalFs {
    async fn find_file(&self, dir: &Path, relative: &str) -> io::Result<Option<PathBuf>> {
        let rel_path = dir.join(relative);
        if !stays_in_root(&rel_path) {
            tracing::debug!(path = %rel_path.display(), "path escapes content root");
            return Ok(None);
        }
        match tokio::fs::metadata(self.root.join(&rel_path)).await {
            Ok(meta) if meta.is_file() => Ok(Some(rel_path)),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn stat_file(&self, path: &Path) -> io::Result<FileStat> {
        if !stays_in_root(path) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path escapes content root: {}", path.display()),
            ));
        }
        let meta = tokio::fs::metadata(self.root.join(path)).await?;
        Ok(FileStat::from(&meta))
    }
}
