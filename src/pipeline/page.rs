//! Per-page aggregation: split, group, reconstruct.

use crate::config::LexiconConfig;
use crate::layout::{
    group_lines, split_columns, ColumnOutcome, ColumnStats, Entry, EntryReconstructor, Token,
};

/// Entries and counters produced from one page.
#[derive(Debug, Clone, Default)]
pub struct PageOutcome {
    /// Left-column entries followed by right-column entries
    pub entries: Vec<Entry>,
    /// Tokens on the page
    pub tokens: usize,
    /// Counters of both column passes
    pub stats: ColumnStats,
}

/// Runs the column pipeline on both halves of a page.
#[derive(Debug, Clone)]
pub struct PageAggregator {
    reconstructor: EntryReconstructor,
    vertical_tolerance: f32,
}

impl PageAggregator {
    /// Create an aggregator from the crate configuration.
    pub fn new(config: &LexiconConfig) -> Self {
        Self {
            reconstructor: EntryReconstructor::from_config(config),
            vertical_tolerance: config.vertical_tolerance,
        }
    }

    /// Reconstruct the entries of one page.
    ///
    /// Columns are processed independently, each with its own left margin.
    /// A page without tokens yields no entries.
    pub fn reconstruct(&self, tokens: Vec<Token>, page_width: f32) -> PageOutcome {
        let token_count = tokens.len();
        let (left, right) = split_columns(tokens, page_width);

        let mut outcome = PageOutcome {
            tokens: token_count,
            ..Default::default()
        };

        for column in [left, right] {
            let ColumnOutcome { entries, stats } = self.column(column);
            outcome.entries.extend(entries);
            outcome.stats.merge(&stats);
        }

        outcome
    }

    fn column(&self, tokens: Vec<Token>) -> ColumnOutcome {
        if tokens.is_empty() {
            return ColumnOutcome::default();
        }
        let lines = group_lines(tokens, self.vertical_tolerance);
        self.reconstructor.reconstruct(&lines)
    }
}

/// Reconstruct the entries of one page with the given configuration.
///
/// # Examples
///
/// ```
/// use pdf_lexicon::config::LexiconConfig;
/// use pdf_lexicon::layout::{Entry, Token};
/// use pdf_lexicon::pipeline::reconstruct_page;
///
/// let tokens = vec![
///     Token::new("Batuk", 40.0, 70.0, 100.0, 110.0),
///     Token::new("لعس", 120.0, 140.0, 100.0, 110.0),
/// ];
/// let entries = reconstruct_page(tokens, 600.0, &LexiconConfig::default());
/// assert_eq!(entries, vec![Entry::new("Batuk", "لعس")]);
/// ```
pub fn reconstruct_page(tokens: Vec<Token>, page_width: f32, config: &LexiconConfig) -> Vec<Entry> {
    PageAggregator::new(config).reconstruct(tokens, page_width).entries
}
