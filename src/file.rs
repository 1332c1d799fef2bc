//! File references shared between the resolver and the glossary.

use crate::fs::FileStat;
use crate::parsers::{Parser, ParserRegistry};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A content file: its path relative to the book root, and when it was last
/// modified if that is known.
///
/// The default value is the empty file, used by a glossary that was not read
/// from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct File {
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    mtime: Option<SystemTime>,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mtime: None,
        }
    }

    /// Build a file reference from a path and the status the filesystem
    /// reported for it.
    pub fn from_stat(path: impl Into<PathBuf>, stat: &FileStat) -> Self {
        Self {
            path: path.into(),
            mtime: stat.mtime,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mtime(&self) -> Option<SystemTime> {
        self.mtime
    }

    pub fn is_empty(&self) -> bool {
        self.path.as_os_str().is_empty()
    }

    /// Extension with its leading dot (`".md"`), or `None` when the path
    /// has none.
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
    }

    /// The markup parser that applies to this file, if any.
    pub fn parser<'r>(&self, registry: &'r ParserRegistry) -> Option<&'r Parser> {
        self.extension().and_then(|ext| registry.by_ext(&ext))
    }

    pub fn is_parsable(&self, registry: &ParserRegistry) -> bool {
        self.parser(registry).is_some()
    }
}
