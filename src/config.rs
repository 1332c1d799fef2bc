//! Book configuration module.
//!
//! Handles loading, validating, and merging `book.toml`. User values are
//! layered over stock defaults, so a config file only needs the keys it
//! changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [resolve]
//! strict = false                 # Surface filesystem/ignore errors instead of skipping
//! # extensions = [".adoc", ".md"] # Candidate order (omit to use the parser registry)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::parsers::ParserRegistry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "book.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Book configuration loaded from `book.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookConfig {
    /// Parsable-file resolution settings.
    pub resolve: ResolveConfig,
}

impl BookConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve.validate()
    }
}

/// How logical document names are resolved to files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolveConfig {
    /// Return filesystem and ignore-rule errors to the caller instead of
    /// treating the failing candidate as absent.
    pub strict: bool,
    /// Candidate extensions in priority order. When absent, the parser
    /// registry order is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

impl ResolveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(extensions) = &self.extensions {
            if extensions.is_empty() {
                return Err(ConfigError::Validation(
                    "resolve.extensions must not be empty".into(),
                ));
            }
            if let Some(bad) = extensions
                .iter()
                .find(|e| !e.starts_with('.') || e.len() < 2)
            {
                return Err(ConfigError::Validation(format!(
                    "resolve.extensions entry {bad:?} must be a dot followed by a suffix"
                )));
            }
        }
        Ok(())
    }

    /// The effective candidate list: the configured override, or every
    /// extension the registry knows, in priority order.
    pub fn candidate_extensions<'a>(&'a self, registry: &'a ParserRegistry) -> Vec<&'a str> {
        match &self.extensions {
            Some(extensions) => extensions.iter().map(String::as_str).collect(),
            None => registry.file_extensions(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// The built-in `book.toml`, as the TOML table user files are layered on.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(BookConfig::default())?)
}

/// Layer a user table over the defaults.
///
/// Nested tables such as `[resolve]` are combined key by key, so a file that
/// only sets `strict` keeps the default `extensions`. Anything that is not a
/// table, arrays included, is taken from the user side as a whole.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut merged), toml::Value::Table(user)) => {
            for (key, value) in user {
                let value = match merged.remove(&key) {
                    Some(default) => merge_toml(default, value),
                    None => value,
                };
                merged.insert(key, value);
            }
            toml::Value::Table(merged)
        }
        (_, user) => user,
    }
}

/// Read the book's own `book.toml` without interpreting it.
///
/// A book without one yields `Ok(None)`; a file that is not valid TOML is an
/// error.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Turn the layered tables into a checked [`BookConfig`]. Unknown keys and
/// invalid values are reported here.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<BookConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: BookConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `book.toml` in the given directory, falling back to
/// defaults when there is none.
pub fn load_config(root: &Path) -> Result<BookConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(root = %root.display(), strict = config.resolve.strict, "loaded book config");
    Ok(config)
}
