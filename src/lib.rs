//! # Book Glossary
//!
//! The glossary model and parsable-file resolution used by a documentation
//! build. A book names its special documents logically ("GLOSSARY",
//! "README"); this crate finds the concrete markup file behind such a name
//! and holds the glossary terms read from it.
//!
//! # Pipeline
//!
//! ```text
//! "GLOSSARY"  →  find_parsable_file  →  GLOSSARY.md + stat
//!                                              │
//!                   markup parser (external)   ▼
//!                        entries  →  Glossary::create_from_entries / set_file
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`identity`] | Term name → stable entry id (slug) |
//! | [`entry`] | `GlossaryEntry`, plain `EntryRecord` input, `GlossaryError` |
//! | [`glossary`] | Immutable, insertion-ordered `Glossary` with copy-on-write updates |
//! | [`file`] | `File` reference shared by the resolver and the glossary |
//! | [`parsers`] | Registry of markup formats and their candidate extensions |
//! | [`fs`] | `ContentFs` collaborator trait, `FileStat`, and the on-disk `LocalFs` |
//! | [`book`] | `Book` collaborator trait: content filesystem plus ignore rules |
//! | [`resolve`] | `find_parsable_file`: first existing, non-ignored candidate in priority order |
//! | [`config`] | `book.toml` loading, merging, and validation |
//!
//! # Design Decisions
//!
//! ## Values, Not Objects
//!
//! A [`Glossary`] never changes after it is built. `add_entry` and `set_file`
//! return new glossaries, and the entry map is shared between them until one
//! of them writes. Holders on different tasks never need a lock.
//!
//! ## Priority Beats Latency
//!
//! Candidate extensions are probed one after another and the search returns
//! at the first accepted file. Racing the probes would let a fast `.adoc`
//! beat a slow `.md`, and would keep probing after the answer is known.
//!
//! ## Collaborators Are Injected
//!
//! The parser registry, the content filesystem, and the ignore rules are all
//! passed in. Nothing reads global state, so every part can be tested with an
//! in-memory filesystem and a two-entry registry.
//!
//! ## Lenient By Default
//!
//! A candidate whose probe, ignore check, or stat fails is skipped and
//! logged through `tracing`; the build carries on as if the file were absent.
//! Setting `[resolve] strict = true` in `book.toml` turns those failures into
//! errors.

pub mod book;
pub mod config;
pub mod entry;
pub mod file;
pub mod fs;
pub mod glossary;
pub mod identity;
pub mod parsers;
pub mod resolve;

pub use book::{Book, BookError};
pub use config::{BookConfig, ConfigError, ResolveConfig};
pub use entry::{EntryInput, EntryRecord, GlossaryEntry, GlossaryError};
pub use file::File;
pub use fs::{ContentFs, FileStat, LocalFs};
pub use glossary::Glossary;
pub use identity::entry_id;
pub use parsers::{Parser, ParserRegistry};
pub use resolve::{ParsableFile, ResolveError, find_parsable_file};

#[cfg(test)]
pub(crate) mod test_helpers;
