//! Extraction statistics.

use serde::Serialize;

use crate::layout::ColumnStats;
use crate::pipeline::page::PageOutcome;

/// Counters for a document run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Pages reconstructed
    pub pages_processed: usize,
    /// Pages that yielded no token at all
    pub pages_empty: usize,
    /// Pages the provider failed on and that were skipped
    pub failed_pages: Vec<usize>,
    /// Tokens read across all pages
    pub tokens: usize,
    /// Lines fed to the reconstructor
    pub lines: usize,
    /// Lines skipped as running headers
    pub header_lines: usize,
    /// Complete entries emitted by the reconstructor
    pub entries_emitted: usize,
    /// Entries discarded for an empty field
    pub partial_discarded: usize,
    /// Continuation lines with no entry to attach to
    pub orphan_lines: usize,
    /// Entries dropped as exact duplicates
    pub duplicates_removed: usize,
    /// Entries in the final result
    pub unique_entries: usize,
}

impl ExtractionStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for a reconstructed page.
    pub fn record_page(&mut self, outcome: &PageOutcome) {
        self.pages_processed += 1;
        if outcome.tokens == 0 {
            self.pages_empty += 1;
        }
        self.tokens += outcome.tokens;
        self.record_columns(&outcome.stats);
    }

    /// Account for a page skipped after a provider failure.
    pub fn record_failure(&mut self, page: usize) {
        self.failed_pages.push(page);
    }

    fn record_columns(&mut self, stats: &ColumnStats) {
        self.lines += stats.lines;
        self.header_lines += stats.header_lines;
        self.entries_emitted += stats.entries_emitted;
        self.partial_discarded += stats.partial_discarded;
        self.orphan_lines += stats.orphan_lines;
    }

    /// Number of pages skipped after a provider failure.
    pub fn pages_failed(&self) -> usize {
        self.failed_pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Entry;

    fn outcome(tokens: usize, emitted: usize) -> PageOutcome {
        PageOutcome {
            entries: vec![Entry::new("a", "ب"); emitted],
            tokens,
            stats: ColumnStats {
                lines: emitted + 1,
                entries_emitted: emitted,
                partial_discarded: 1,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_record_page() {
        let mut stats = ExtractionStats::new();
        stats.record_page(&outcome(10, 2));
        stats.record_page(&outcome(0, 0));

        assert_eq!(stats.pages_processed, 2);
        assert_eq!(stats.pages_empty, 1);
        assert_eq!(stats.tokens, 10);
        assert_eq!(stats.lines, 4);
        assert_eq!(stats.entries_emitted, 2);
        assert_eq!(stats.partial_discarded, 2);
    }

    #[test]
    fn test_record_failure() {
        let mut stats = ExtractionStats::new();
        stats.record_failure(4);
        assert_eq!(stats.pages_failed(), 1);
        assert_eq!(stats.failed_pages, vec![4]);
        assert_eq!(stats.pages_processed, 0);
    }
}
