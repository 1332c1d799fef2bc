//! Parsable-file resolution.
//!
//! A book refers to its special documents by logical name ("README",
//! "SUMMARY", "GLOSSARY") without committing to a markup format. The
//! resolver turns such a name into the one concrete file backing it by
//! trying each supported extension in priority order:
//!
//! ```text
//! GLOSSARY  →  GLOSSARY.md?  →  GLOSSARY.markdown?  →  …  →  GLOSSARY.adoc?
//!                  ↑ first found and not ignored wins
//! ```
//!
//! Any extension on the requested name is dropped; the real one comes from
//! whatever is found. Candidates are probed one at a time and the search
//! stops at the first hit, so a slow `.md` probe can never lose to a fast
//! `.adoc` one, and no probes are issued past the winner.
//!
//! ## Errors
//!
//! Missing files are not errors. Failures reported by the collaborators (a
//! probe that fails, an ignore rule that cannot be evaluated, a stat that
//! fails after a successful probe) are logged and the candidate is skipped.
//! With [`ResolveConfig::strict`] set, the first such failure is returned
//! instead.

use crate::book::{Book, BookError};
use crate::config::ResolveConfig;
use crate::file::File;
use crate::fs::FileStat;
use crate::parsers::ParserRegistry;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Failed to probe {path}: {source}")]
    Probe { path: PathBuf, source: io::Error },
    #[error("Failed to evaluate ignore rules for {path}: {source}")]
    Ignore { path: PathBuf, source: BookError },
    #[error("Failed to stat {path}: {source}")]
    Stat { path: PathBuf, source: io::Error },
}

/// The file a logical name resolved to, with the status fetched for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsableFile {
    pub file: File,
    pub stat: FileStat,
}

/// Find the file backing the logical document `filename` in `book`.
///
/// Returns `Ok(None)` when no candidate extension yields an existing,
/// non-ignored file.
pub async fn find_parsable_file(
    book: &dyn Book,
    registry: &ParserRegistry,
    filename: &str,
    config: &ResolveConfig,
) -> Result<Option<ParsableFile>, ResolveError> {
    let Some((basedir, basename)) = split_logical_name(filename) else {
        tracing::debug!(filename, "nothing to resolve");
        return Ok(None);
    };
    let fs = book.content_fs();

    for ext in config.candidate_extensions(registry) {
        let candidate = format!("{basename}{ext}");

        let found = match fs.find_file(&basedir, &candidate).await {
            Ok(Some(found)) => found,
            Ok(None) => {
                tracing::debug!(
                    dir = %basedir.display(),
                    candidate = %candidate,
                    "no such file"
                );
                continue;
            }
            Err(source) => {
                let path = basedir.join(&candidate);
                tolerate(config, ResolveError::Probe { path, source })?;
                continue;
            }
        };

        match book.is_content_file_ignored(&found).await {
            Ok(false) => {}
            Ok(true) => {
                tracing::debug!(path = %found.display(), "candidate ignored");
                continue;
            }
            Err(source) => {
                tolerate(config, ResolveError::Ignore { path: found, source })?;
                continue;
            }
        }

        match fs.stat_file(&found).await {
            Ok(stat) => {
                tracing::debug!(filename, path = %found.display(), "resolved parsable file");
                let file = File::from_stat(&found, &stat);
                return Ok(Some(ParsableFile { file, stat }));
            }
            Err(source) => {
                tolerate(config, ResolveError::Stat { path: found, source })?;
            }
        }
    }

    tracing::debug!(filename, "no parsable file found");
    Ok(None)
}

/// Split a logical name into the directory to search and the base name
/// without extension. `None` when there is no base name at all.
fn split_logical_name(filename: &str) -> Option<(PathBuf, String)> {
    let path = Path::new(filename);
    let basename = path.file_stem()?.to_string_lossy().into_owned();
    let basedir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Some((basedir, basename))
}

/// Downgrade a collaborator failure to "candidate not accepted", unless
/// strict mode asks for it to be surfaced.
fn tolerate(config: &ResolveConfig, err: ResolveError) -> Result<(), ResolveError> {
    if config.strict {
        return Err(err);
    }
    tracing::warn!(error = %err, "skipping candidate");
    Ok(())
}
