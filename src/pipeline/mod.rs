//! Dictionary reconstruction pipeline.
//!
//! ```text
//! PageTokenProvider (page width + word tokens)
//!     ↓
//! [split_columns] (left / right at the midpoint)
//!     ↓
//! [group_lines] per column
//!     ↓
//! [EntryReconstructor] per column
//!     ↓
//! Vec<Entry> per page (left first)
//!     ↓
//! [CorpusDeduplicator] across pages
//!     ↓
//! DocumentResult
//! ```
//!
//! Pages are independent, so [`DictionaryPipeline::process_document_parallel`]
//! reconstructs them on the rayon pool and merges the results in page order
//! through a single deduplicator.

pub mod dedup;
pub mod metrics;
pub mod page;

// Re-export main types
pub use dedup::{deduplicate, CorpusDeduplicator};
pub use metrics::ExtractionStats;
pub use page::{reconstruct_page, PageAggregator, PageOutcome};

use rayon::prelude::*;

use crate::config::{LexiconConfig, PageErrorPolicy};
use crate::error::Result;
use crate::layout::Entry;
use crate::provider::PageTokenProvider;

/// Unique entries of a document and the counters of the run.
#[derive(Debug, Clone, Default)]
pub struct DocumentResult {
    /// Unique complete entries, first-seen order
    pub entries: Vec<Entry>,
    /// Run counters
    pub stats: ExtractionStats,
}

/// Orchestrates page reconstruction over a whole document.
#[derive(Debug, Clone)]
pub struct DictionaryPipeline {
    config: LexiconConfig,
    aggregator: PageAggregator,
}

impl DictionaryPipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        let config = LexiconConfig::default();
        Self {
            aggregator: PageAggregator::new(&config),
            config,
        }
    }

    /// Create a pipeline with custom configuration.
    ///
    /// Fails with [`Error::InvalidConfig`](crate::error::Error::InvalidConfig)
    /// if a value is out of range.
    pub fn with_config(config: LexiconConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            aggregator: PageAggregator::new(&config),
            config,
        })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    /// Reconstruct one page from the provider.
    ///
    /// Provider failures are returned as-is; no retry is attempted.
    pub fn process_page<P: PageTokenProvider + ?Sized>(
        &self,
        provider: &P,
        page: usize,
    ) -> Result<PageOutcome> {
        let width = provider.page_width(page)?;
        let tokens =
            provider.word_tokens(page, self.config.word_x_tolerance, self.config.word_y_tolerance)?;

        let outcome = self.aggregator.reconstruct(tokens, width);
        log::debug!(
            "Page {}: {} tokens, {} lines, {} entries ({} partial, {} orphan lines)",
            page,
            outcome.tokens,
            outcome.stats.lines,
            outcome.entries.len(),
            outcome.stats.partial_discarded,
            outcome.stats.orphan_lines
        );
        Ok(outcome)
    }

    /// Number of pages this pipeline will read from `provider`.
    pub fn page_limit<P: PageTokenProvider + ?Sized>(&self, provider: &P) -> Result<usize> {
        let page_count = provider.page_count()?;
        Ok(match self.config.max_pages {
            Some(max) => page_count.min(max),
            None => page_count,
        })
    }

    /// Reconstruct and deduplicate every page, one after another.
    pub fn process_document<P: PageTokenProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<DocumentResult> {
        self.process_document_with_progress(provider, |_| {})
    }

    /// Like [`process_document`](Self::process_document), calling `on_page`
    /// with the page index once each page has been read, failed or not.
    ///
    /// After an aborting failure no further page is reported.
    pub fn process_document_with_progress<P, F>(
        &self,
        provider: &P,
        on_page: F,
    ) -> Result<DocumentResult>
    where
        P: PageTokenProvider + ?Sized,
        F: Fn(usize),
    {
        let pages = self.page_limit(provider)?;
        let mut merge = DocumentMerge::new(self.config.page_error_policy);

        for page in 0..pages {
            let outcome = self.process_page(provider, page);
            on_page(page);
            merge.absorb(page, outcome)?;
        }

        Ok(merge.finish())
    }

    /// Reconstruct pages in parallel, then deduplicate in page order.
    ///
    /// Produces the same result as [`process_document`](Self::process_document).
    /// With [`PageErrorPolicy::Abort`] every page is still attempted, and the
    /// failure of the lowest page index is returned.
    pub fn process_document_parallel<P: PageTokenProvider + Sync + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<DocumentResult> {
        self.process_document_parallel_with_progress(provider, |_| {})
    }

    /// Like [`process_document_parallel`](Self::process_document_parallel),
    /// calling `on_page` from the worker threads as pages finish, in
    /// completion order.
    pub fn process_document_parallel_with_progress<P, F>(
        &self,
        provider: &P,
        on_page: F,
    ) -> Result<DocumentResult>
    where
        P: PageTokenProvider + Sync + ?Sized,
        F: Fn(usize) + Sync,
    {
        let pages = self.page_limit(provider)?;

        let outcomes: Vec<_> = (0..pages)
            .into_par_iter()
            .map(|page| {
                let outcome = self.process_page(provider, page);
                on_page(page);
                (page, outcome)
            })
            .collect();

        let mut merge = DocumentMerge::new(self.config.page_error_policy);
        for (page, outcome) in outcomes {
            merge.absorb(page, outcome)?;
        }

        Ok(merge.finish())
    }
}

impl Default for DictionaryPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-writer accumulation of page outcomes.
struct DocumentMerge {
    policy: PageErrorPolicy,
    dedup: CorpusDeduplicator,
    stats: ExtractionStats,
}

impl DocumentMerge {
    fn new(policy: PageErrorPolicy) -> Self {
        Self {
            policy,
            dedup: CorpusDeduplicator::new(),
            stats: ExtractionStats::new(),
        }
    }

    fn absorb(&mut self, page: usize, outcome: Result<PageOutcome>) -> Result<()> {
        match outcome {
            Ok(outcome) => {
                self.stats.record_page(&outcome);
                self.dedup.extend(outcome.entries);
                Ok(())
            },
            Err(err) if err.is_provider_failure() && self.policy == PageErrorPolicy::Skip => {
                log::warn!("Skipping page {}: {}", page, err);
                self.stats.record_failure(page);
                Ok(())
            },
            Err(err) => Err(err),
        }
    }

    fn finish(self) -> DocumentResult {
        let mut stats = self.stats;
        stats.duplicates_removed = self.dedup.duplicates();
        stats.unique_entries = self.dedup.len();

        log::info!(
            "Reconstructed {} unique entries from {} pages ({} duplicates removed, {} pages failed)",
            stats.unique_entries,
            stats.pages_processed,
            stats.duplicates_removed,
            stats.pages_failed()
        );

        DocumentResult {
            entries: self.dedup.into_entries(),
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::layout::Token;
    use crate::provider::{DumpPage, TokenDump};

    fn word(text: &str, x0: f32, top: f32) -> Token {
        Token::new(text, x0, x0 + 30.0, top, top + 10.0)
    }

    fn page(words: Vec<Token>) -> DumpPage {
        DumpPage::new(600.0, words)
    }

    fn sample_dump() -> TokenDump {
        TokenDump::from_pages(vec![
            page(vec![word("Batuk", 40.0, 100.0), word("لعس", 140.0, 100.0)]),
            page(vec![]),
            page(vec![
                word("Batuk", 40.0, 100.0),
                word("لعس", 140.0, 100.0),
                word("Demam", 320.0, 100.0),
                word("حمى", 420.0, 100.0),
            ]),
        ])
        .unwrap()
    }

    #[test]
    fn test_process_document_deduplicates() {
        let result = DictionaryPipeline::new().process_document(&sample_dump()).unwrap();
        assert_eq!(
            result.entries,
            vec![Entry::new("Batuk", "لعس"), Entry::new("Demam", "حمى")]
        );
        assert_eq!(result.stats.pages_processed, 3);
        assert_eq!(result.stats.pages_empty, 1);
        assert_eq!(result.stats.entries_emitted, 3);
        assert_eq!(result.stats.duplicates_removed, 1);
        assert_eq!(result.stats.unique_entries, 2);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dump = sample_dump();
        let pipeline = DictionaryPipeline::new();
        let sequential = pipeline.process_document(&dump).unwrap();
        let parallel = pipeline.process_document_parallel(&dump).unwrap();
        assert_eq!(sequential.entries, parallel.entries);
        assert_eq!(sequential.stats, parallel.stats);
    }

    #[test]
    fn test_max_pages() {
        let config = LexiconConfig::default().with_max_pages(Some(1));
        let pipeline = DictionaryPipeline::with_config(config).unwrap();
        let result = pipeline.process_document(&sample_dump()).unwrap();
        assert_eq!(result.stats.pages_processed, 1);
        assert_eq!(result.entries, vec![Entry::new("Batuk", "لعس")]);
    }

    #[test]
    fn test_provider_failure_aborts_by_default() {
        let dump = TokenDump::from_pages(vec![
            page(vec![word("Batuk", 40.0, 100.0), word("لعس", 140.0, 100.0)]),
            DumpPage::failed("bad xref"),
        ])
        .unwrap();

        let err = DictionaryPipeline::new().process_document(&dump).unwrap_err();
        assert!(matches!(err, Error::Provider { page: 1, .. }));

        let err = DictionaryPipeline::new()
            .process_document_parallel(&dump)
            .unwrap_err();
        assert!(matches!(err, Error::Provider { page: 1, .. }));
    }

    #[test]
    fn test_provider_failure_skipped_on_request() {
        let dump = TokenDump::from_pages(vec![
            DumpPage::failed("bad xref"),
            page(vec![word("Batuk", 40.0, 100.0), word("لعس", 140.0, 100.0)]),
        ])
        .unwrap();

        let config = LexiconConfig::default().with_page_error_policy(PageErrorPolicy::Skip);
        let result = DictionaryPipeline::with_config(config)
            .unwrap()
            .process_document(&dump)
            .unwrap();
        assert_eq!(result.entries, vec![Entry::new("Batuk", "لعس")]);
        assert_eq!(result.stats.failed_pages, vec![0]);
        assert_eq!(result.stats.pages_processed, 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = LexiconConfig::default().with_indentation_tolerance(-3.0);
        assert!(matches!(
            DictionaryPipeline::with_config(config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_progress_reports_every_page() {
        use std::sync::Mutex;

        let dump = sample_dump();
        let pipeline = DictionaryPipeline::new();

        let seen = Mutex::new(Vec::new());
        pipeline
            .process_document_with_progress(&dump, |page| seen.lock().unwrap().push(page))
            .unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);

        let seen = Mutex::new(Vec::new());
        pipeline
            .process_document_parallel_with_progress(&dump, |page| seen.lock().unwrap().push(page))
            .unwrap();
        let mut pages = seen.into_inner().unwrap();
        pages.sort_unstable();
        assert_eq!(pages, vec![0, 1, 2]);
    }

    #[test]
    fn test_progress_stops_at_aborting_page() {
        use std::cell::RefCell;

        let dump = TokenDump::from_pages(vec![
            DumpPage::failed("bad xref"),
            page(vec![word("Batuk", 40.0, 100.0), word("لعس", 140.0, 100.0)]),
        ])
        .unwrap();

        let seen = RefCell::new(Vec::new());
        let result = DictionaryPipeline::new()
            .process_document_with_progress(&dump, |page| seen.borrow_mut().push(page));
        assert!(result.is_err());
        assert_eq!(*seen.borrow(), vec![0]);
    }

    #[test]
    fn test_zero_indentation_tolerance_rejected() {
        let config = LexiconConfig::default().with_indentation_tolerance(0.0);
        assert!(matches!(
            DictionaryPipeline::with_config(config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_document() {
        let dump = TokenDump::from_pages(vec![]).unwrap();
        let result = DictionaryPipeline::new().process_document(&dump).unwrap();
        assert!(result.entries.is_empty());
        assert_eq!(result.stats, ExtractionStats::default());
    }
}
