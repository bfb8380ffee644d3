//! Layout reconstruction for two-column dictionary pages.
//!
//! This module turns positioned word tokens into dictionary entries:
//! - Column split at the page midpoint
//! - Line grouping by vertical proximity
//! - Entry reconstruction by indentation and script latch
//! - Optional running-header filtering

pub mod columns;
pub mod entry;
pub mod header;
pub mod lines;
pub mod reconstructor;
pub mod token;

// Re-export main types
pub use columns::{split_columns, Column};
pub use entry::Entry;
pub use header::HeaderFilter;
pub use lines::{group_lines, Line};
pub use reconstructor::{
    script_latch, segment_line, ColumnOutcome, ColumnStats, EntryReconstructor, SegmentedLine,
};
pub use token::Token;
