//! Running-header filter.
//!
//! Printed dictionaries repeat a short header on every page (the letter range
//! covered, the page number in Arabic-Indic numerals). Those lines sit at the
//! column margin and would otherwise open bogus entries.

use crate::layout::lines::Line;

/// Lines with at least this many tokens are never headers
const MAX_HEADER_TOKENS: usize = 3;

/// Lines with at least this many characters are never headers
const MAX_HEADER_CHARS: usize = 15;

/// Header patterns observed in the Arabic-Indonesian dictionary this crate was
/// calibrated on: letter-range headers and Arabic-Indic numerals.
const DICTIONARY_HEADER_PATTERNS: &[&str] = &[
    "ا ب", "آ ب", "ب", "ا ", "ا د", "آ د", "١", "٢", "٣", "٤", "٥", "٦", "٧", "٨", "٩", "٠",
];

/// Recognizes short header lines by prefix or suffix pattern.
#[derive(Debug, Clone, Default)]
pub struct HeaderFilter {
    patterns: Vec<String>,
}

impl HeaderFilter {
    /// Create a filter from patterns. Empty patterns are ignored.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    /// Filter preloaded with the Arabic-Indonesian dictionary headers.
    pub fn dictionary_defaults() -> Self {
        Self::new(DICTIONARY_HEADER_PATTERNS.iter().copied())
    }

    /// Patterns in the Arabic-Indonesian dictionary header set.
    pub fn dictionary_patterns() -> Vec<String> {
        DICTIONARY_HEADER_PATTERNS.iter().map(|p| p.to_string()).collect()
    }

    /// True if no pattern is configured.
    pub fn is_disabled(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check whether `line` is a running header.
    ///
    /// A header is short (fewer than 3 tokens and 15 characters) and starts
    /// or ends with one of the patterns.
    pub fn is_header(&self, line: &Line) -> bool {
        if self.is_disabled() || line.len() >= MAX_HEADER_TOKENS {
            return false;
        }

        let text = line.text();
        let text = text.trim();
        if text.chars().count() >= MAX_HEADER_CHARS {
            return false;
        }

        self.patterns
            .iter()
            .any(|p| text.starts_with(p.as_str()) || text.ends_with(p.as_str()))
    }
}
