//! Reconstructed dictionary entries.

use serde::{Deserialize, Serialize};

/// One bilingual dictionary record.
///
/// Equality and hashing cover both fields, which is what corpus
/// deduplication keys on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Head phrase in the primary script
    pub primary: String,
    /// Translation in the secondary script
    pub secondary: String,
}

impl Entry {
    /// Create an entry from its two fields.
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Both fields are non-empty.
    ///
    /// Only complete entries are ever emitted or exported.
    pub fn is_complete(&self) -> bool {
        !self.primary.is_empty() && !self.secondary.is_empty()
    }

    /// Append a continuation line's sides to this entry.
    ///
    /// Each side is joined with a single space and the result trimmed, so an
    /// empty side on either end leaves no stray whitespace.
    pub fn extend(&mut self, primary: &str, secondary: &str) {
        append_field(&mut self.primary, primary);
        append_field(&mut self.secondary, secondary);
    }
}

fn append_field(field: &mut String, addition: &str) {
    let joined = format!("{} {}", field, addition);
    *field = joined.trim().to_string();
}
