//! Glossary entry identity.
//!
//! Every glossary entry is keyed by an id derived from its display name. Two
//! names that are meant to be the same term ("API", "api", "Api!") must land
//! on the same id, so the id is a GitHub-style slug of the name:
//!
//! - `"API"` → `"api"`
//! - `"Hello World"` → `"hello-world"`
//! - `"  C++ / Rust  "` → `"c-rust"`
//! - `"Café au lait"` → `"café-au-lait"`
//!
//! The rule is total: every string has an id, possibly empty when the name
//! has no alphanumeric characters at all.

/// Derive the stable entry id for a glossary term name.
///
/// Lowercases, replaces every run of non-alphanumeric characters with a
/// single dash, and strips leading and trailing dashes. Alphanumeric is
/// Unicode-aware so accented and non-Latin terms keep their letters.
///
/// Names are not Unicode-normalized first. A precomposed `"café"` (NFC)
/// keeps its `é`, but a decomposed one (NFD: `e` + U+0301) loses the
/// combining accent and maps to `"cafe"`, so the two forms get different ids.
pub fn entry_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !id.is_empty() {
                id.push('-');
            }
            pending_dash = false;
            id.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    id
}
