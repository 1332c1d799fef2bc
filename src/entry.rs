//! Glossary entries and the plain records they can be built from.

use crate::identity::entry_id;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlossaryError {
    #[error("Glossary entry has no name (description: {0:?})")]
    MissingName(Option<String>),
    #[error("Glossary JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single glossary term.
///
/// The id is derived from the name when the entry is built and cannot be set
/// independently, so `id == entry_id(name)` holds for every entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    id: String,
    name: String,
    description: String,
}

impl GlossaryEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: entry_id(&name),
            name,
            description: description.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, original casing preserved.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// In-page anchor for the term, e.g. `#hello-world`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Untyped entry as produced by a markup parser or read from JSON.
///
/// Both fields are optional on the wire; a record without a usable name is
/// rejected when it is turned into a [`GlossaryEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntryRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EntryRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}

impl TryFrom<EntryRecord> for GlossaryEntry {
    type Error = GlossaryError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        match record.name {
            Some(name) if !name.trim().is_empty() => Ok(GlossaryEntry::new(
                name,
                record.description.unwrap_or_default(),
            )),
            _ => Err(GlossaryError::MissingName(record.description)),
        }
    }
}

/// Input accepted by bulk glossary construction: either a ready entry or a
/// plain record still to be validated.
#[derive(Debug, Clone)]
pub enum EntryInput {
    Entry(GlossaryEntry),
    Record(EntryRecord),
}

impl From<GlossaryEntry> for EntryInput {
    fn from(entry: GlossaryEntry) -> Self {
        EntryInput::Entry(entry)
    }
}

impl From<EntryRecord> for EntryInput {
    fn from(record: EntryRecord) -> Self {
        EntryInput::Record(record)
    }
}

impl TryFrom<EntryInput> for GlossaryEntry {
    type Error = GlossaryError;

    fn try_from(input: EntryInput) -> Result<Self, Self::Error> {
        match input {
            EntryInput::Entry(entry) => Ok(entry),
            EntryInput::Record(record) => record.try_into(),
        }
    }
}
