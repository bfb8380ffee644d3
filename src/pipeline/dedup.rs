//! Corpus-level deduplication.
//!
//! The same entry is often reconstructed more than once: running headers
//! repeat, and entries split across a page break can come out identical on
//! both pages. Entries are keyed by both fields.

use indexmap::IndexSet;

use crate::layout::Entry;

/// Accumulates unique complete entries across pages.
///
/// Not synchronized: parallel page passes join their results and feed them
/// through a single deduplicator.
#[derive(Debug, Clone, Default)]
pub struct CorpusDeduplicator {
    entries: IndexSet<Entry>,
    duplicates: usize,
    rejected: usize,
}

impl CorpusDeduplicator {
    /// Create an empty deduplicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Returns true if it was new.
    ///
    /// Incomplete entries are not eligible and are rejected.
    pub fn insert(&mut self, entry: Entry) -> bool {
        if !entry.is_complete() {
            self.rejected += 1;
            return false;
        }

        let inserted = self.entries.insert(entry);
        if !inserted {
            self.duplicates += 1;
        }
        inserted
    }

    /// Number of unique entries so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entry has been accepted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries dropped because an equal entry was already present.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Entries dropped because a field was empty.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Iterate over unique entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Consume the deduplicator, returning unique entries in first-seen order.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries.into_iter().collect()
    }
}

impl Extend<Entry> for CorpusDeduplicator {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<Entry> for CorpusDeduplicator {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut dedup = Self::new();
        dedup.extend(iter);
        dedup
    }
}

/// Remove exact duplicates and incomplete entries.
///
/// Output order is the first-seen order of the input.
///
/// # Examples
///
/// ```
/// use pdf_lexicon::layout::Entry;
/// use pdf_lexicon::pipeline::deduplicate;
///
/// let unique = deduplicate(vec![
///     Entry::new("Batuk", "لعس"),
///     Entry::new("Demam", "حمى"),
///     Entry::new("Batuk", "لعس"),
/// ]);
/// assert_eq!(unique.len(), 2);
/// ```
pub fn deduplicate<I: IntoIterator<Item = Entry>>(entries: I) -> Vec<Entry> {
    entries.into_iter().collect::<CorpusDeduplicator>().into_entries()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_exact_duplicates() {
        let mut dedup = CorpusDeduplicator::new();
        assert!(dedup.insert(Entry::new("Batuk", "لعس")));
        assert!(!dedup.insert(Entry::new("Batuk", "لعس")));
        assert_eq!(dedup.len(), 1);
        assert_eq!(dedup.duplicates(), 1);
    }

    #[test]
    fn test_same_primary_different_secondary_kept() {
        let unique = deduplicate(vec![Entry::new("Batuk", "لعس"), Entry::new("Batuk", "سعال")]);
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn test_incomplete_entries_rejected() {
        let mut dedup = CorpusDeduplicator::new();
        assert!(!dedup.insert(Entry::new("Batuk", "")));
        assert!(!dedup.insert(Entry::new("", "لعس")));
        assert!(dedup.is_empty());
        assert_eq!(dedup.rejected(), 2);
        assert_eq!(dedup.duplicates(), 0);
    }

    #[test]
    fn test_first_seen_order() {
        let unique = deduplicate(vec![
            Entry::new("b", "ب"),
            Entry::new("a", "ا"),
            Entry::new("b", "ب"),
            Entry::new("c", "ت"),
        ]);
        let primaries: Vec<_> = unique.iter().map(|e| e.primary.as_str()).collect();
        assert_eq!(primaries, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(deduplicate(Vec::new()).is_empty());
    }
}
