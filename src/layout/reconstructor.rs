//! Entry reconstruction state machine.
//!
//! Walks one column's lines top to bottom. A line starting at the column's
//! left margin opens a new entry; an indented line continues the entry in
//! progress. Each line is split by script into the head-phrase side and the
//! translation side, and continuation lines are appended side by side.
//!
//! ```text
//!   NoCurrentEntry --boundary--> BuildingEntry --boundary--> BuildingEntry
//!         |                           |        (emit previous if complete)
//!   continuation: drop          continuation: append
//! ```
//!
//! Ambiguous geometry is settled by the strict `<` of the boundary test; there
//! is no backtracking. Partial entries and orphan lines are dropped, never
//! reported as errors.

use crate::config::LexiconConfig;
use crate::layout::entry::Entry;
use crate::layout::header::HeaderFilter;
use crate::layout::lines::Line;
use crate::layout::token::Token;
use crate::text::normalize::normalize;
use crate::text::script::ScriptClassifier;

/// Counters for one reconstruction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnStats {
    /// Lines fed to the state machine, headers included
    pub lines: usize,
    /// Lines skipped by the header filter
    pub header_lines: usize,
    /// Complete entries emitted
    pub entries_emitted: usize,
    /// Entries discarded because a field was empty
    pub partial_discarded: usize,
    /// Continuation lines with no entry to attach to
    pub orphan_lines: usize,
}

impl ColumnStats {
    /// Add another pass's counters to this one.
    pub fn merge(&mut self, other: &ColumnStats) {
        self.lines += other.lines;
        self.header_lines += other.header_lines;
        self.entries_emitted += other.entries_emitted;
        self.partial_discarded += other.partial_discarded;
        self.orphan_lines += other.orphan_lines;
    }
}

/// Entries and counters produced from one column.
#[derive(Debug, Clone, Default)]
pub struct ColumnOutcome {
    /// Complete entries in column order
    pub entries: Vec<Entry>,
    /// Pass counters
    pub stats: ColumnStats,
}

/// A line split into its normalized primary and secondary sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedLine {
    /// Normalized head-phrase text
    pub primary: String,
    /// Normalized translation text
    pub secondary: String,
}

/// Index of the first secondary-script token, or `tokens.len()` if none.
///
/// Segmentation latches: every token from this index on is secondary, even a
/// later primary-script word, because translations follow the head phrase and
/// never interleave back.
pub fn script_latch(tokens: &[Token], classifier: &ScriptClassifier) -> usize {
    tokens
        .iter()
        .position(|t| classifier.classify(&t.text).is_secondary())
        .unwrap_or(tokens.len())
}

/// Split a line at its script latch and normalize both sides.
pub fn segment_line(line: &Line, classifier: &ScriptClassifier) -> SegmentedLine {
    let (primary, secondary) = line.tokens.split_at(script_latch(&line.tokens, classifier));
    SegmentedLine {
        primary: normalize(&join_texts(primary), false),
        secondary: normalize(&join_texts(secondary), true),
    }
}

fn join_texts(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reconstruction state.
#[derive(Debug)]
enum State {
    NoCurrentEntry,
    BuildingEntry(Entry),
}

/// Rebuilds dictionary entries from the lines of one column.
#[derive(Debug, Clone)]
pub struct EntryReconstructor {
    classifier: ScriptClassifier,
    indentation_tolerance: f32,
    header_filter: HeaderFilter,
}

impl Default for EntryReconstructor {
    fn default() -> Self {
        Self::from_config(&LexiconConfig::default())
    }
}

impl EntryReconstructor {
    /// Create a reconstructor.
    pub fn new(
        classifier: ScriptClassifier,
        indentation_tolerance: f32,
        header_filter: HeaderFilter,
    ) -> Self {
        Self {
            classifier,
            indentation_tolerance,
            header_filter,
        }
    }

    /// Create a reconstructor from the crate configuration.
    pub fn from_config(config: &LexiconConfig) -> Self {
        Self::new(
            ScriptClassifier::new(config.secondary_script),
            config.indentation_tolerance,
            HeaderFilter::new(config.header_patterns.iter().cloned()),
        )
    }

    /// Minimum `x0` over every token of the column.
    pub fn left_margin(lines: &[Line]) -> Option<f32> {
        lines
            .iter()
            .flat_map(|line| line.tokens.iter())
            .map(|t| t.x0)
            .reduce(f32::min)
    }

    /// Whether a line whose first token starts at `x0` opens a new entry.
    pub fn starts_entry(&self, x0: f32, left_margin: f32) -> bool {
        x0 < left_margin + self.indentation_tolerance
    }

    /// Run the state machine over a column's lines, in order.
    pub fn reconstruct(&self, lines: &[Line]) -> ColumnOutcome {
        let mut outcome = ColumnOutcome::default();
        let Some(left_margin) = Self::left_margin(lines) else {
            return outcome;
        };

        let mut state = State::NoCurrentEntry;

        for line in lines {
            outcome.stats.lines += 1;

            let Some(x0) = line.first_x0() else {
                continue;
            };

            if self.header_filter.is_header(line) {
                log::trace!("Skipping header line {:?}", line.text());
                outcome.stats.header_lines += 1;
                continue;
            }

            let segmented = segment_line(line, &self.classifier);

            state = if self.starts_entry(x0, left_margin) {
                if let State::BuildingEntry(entry) = state {
                    self.finalize(entry, &mut outcome);
                }
                State::BuildingEntry(Entry::new(segmented.primary, segmented.secondary))
            } else {
                match state {
                    State::BuildingEntry(mut entry) => {
                        entry.extend(&segmented.primary, &segmented.secondary);
                        State::BuildingEntry(entry)
                    },
                    State::NoCurrentEntry => {
                        log::trace!("Dropping orphan continuation line {:?}", line.text());
                        outcome.stats.orphan_lines += 1;
                        State::NoCurrentEntry
                    },
                }
            };
        }

        if let State::BuildingEntry(entry) = state {
            self.finalize(entry, &mut outcome);
        }

        log::debug!(
            "Column at x={:.1}: {} lines, {} entries, {} partial, {} orphan",
            left_margin,
            outcome.stats.lines,
            outcome.stats.entries_emitted,
            outcome.stats.partial_discarded,
            outcome.stats.orphan_lines
        );
        outcome
    }

    fn finalize(&self, entry: Entry, outcome: &mut ColumnOutcome) {
        if entry.is_complete() {
            outcome.stats.entries_emitted += 1;
            outcome.entries.push(entry);
        } else {
            log::trace!("Discarding partial entry {:?}", entry);
            outcome.stats.partial_discarded += 1;
        }
    }
}
