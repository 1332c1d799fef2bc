//! The book collaborator: owner of the content filesystem and the ignore
//! rules that apply to it.

use crate::fs::ContentFs;
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Ignore rule error for {path}: {message}")]
    IgnoreRule { path: String, message: String },
}

/// A book as seen by the parsable-file resolver.
///
/// What "ignored" means (`.ignore` files, output directories, glob rules) is
/// decided by the implementation.
#[async_trait]
pub trait Book: Send + Sync {
    fn content_fs(&self) -> &dyn ContentFs;

    /// Whether `path` (relative to the content root) must be skipped.
    async fn is_content_file_ignored(&self, path: &Path) -> Result<bool, BookError>;
}
