//! Markup parser registry.
//!
//! The registry only knows which markup formats exist and which file
//! extensions map to them. Parsing and rendering live elsewhere in the build
//! pipeline; this crate needs the registry for two things:
//!
//! - the ordered list of candidate extensions tried by
//!   [`find_parsable_file`](crate::resolve::find_parsable_file), and
//! - looking up the format of a resolved [`File`](crate::file::File).
//!
//! Order matters. Parsers are consulted in registration order, and within a
//! parser its extensions are consulted in declaration order, so the default
//! registry prefers `.md` over `.markdown` over `.adoc`.

/// A markup format and the file extensions it claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parser {
    /// Short name used to identify the format (`"markdown"`, `"asciidoc"`).
    pub name: String,
    /// Extensions including the leading dot, in priority order.
    pub extensions: Vec<String>,
}

impl Parser {
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Whether this parser claims `ext`. Comparison ignores ASCII case.
    pub fn handles(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Ordered set of known markup parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserRegistry {
    parsers: Vec<Parser>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new(vec![
            Parser::new("markdown", &[".md", ".markdown", ".mdown"]),
            Parser::new("asciidoc", &[".adoc", ".asciidoc"]),
        ])
    }
}

impl ParserRegistry {
    pub fn new(parsers: Vec<Parser>) -> Self {
        Self { parsers }
    }

    /// Every supported extension, in priority order.
    pub fn file_extensions(&self) -> Vec<&str> {
        self.parsers
            .iter()
            .flat_map(|p| p.extensions.iter().map(String::as_str))
            .collect()
    }

    /// Find the parser for an extension (with leading dot, any ASCII case).
    pub fn by_ext(&self, ext: &str) -> Option<&Parser> {
        self.parsers.iter().find(|p| p.handles(ext))
    }

    pub fn by_name(&self, name: &str) -> Option<&Parser> {
        self.parsers.iter().find(|p| p.name == name)
    }
}
