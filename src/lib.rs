//! # PDF Lexicon
//!
//! Reconstructs bilingual dictionary entries from the word tokens of
//! two-column dictionary PDFs: a head phrase in one script paired with its
//! translation in another (Indonesian and Arabic by default).
//!
//! ## Core Features
//!
//! - **Column Split**: tokens partitioned at the page midpoint
//! - **Line Grouping**: vertical-proximity clustering, left-to-right order
//! - **Entry Reconstruction**: indentation-driven state machine with a
//!   one-way script latch per line
//! - **Normalization**: punctuation, digits, decorative markers, script noise
//! - **Deduplication**: corpus-wide, keyed by both fields
//! - **Parallel Pages**: independent page passes on the rayon pool
//! - **JSON Export**: UTF-8, unescaped, 2-space indentation
//!
//! ## Architecture
//!
//! PDF decoding stays outside the crate. Tokens come in through the
//! [`provider::PageTokenProvider`] trait; [`provider::TokenDump`] reads
//! tokens an extractor has already written to JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_lexicon::config::{ExportConfig, LexiconConfig};
//! use pdf_lexicon::converters::JsonExporter;
//! use pdf_lexicon::pipeline::DictionaryPipeline;
//! use pdf_lexicon::provider::TokenDump;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dump = TokenDump::open("arabic-dictionary.tokens.json")?;
//! let config = LexiconConfig::default().with_max_pages(Some(20));
//! let pipeline = DictionaryPipeline::with_config(config)?;
//!
//! let result = pipeline.process_document(&dump)?;
//! JsonExporter::new(ExportConfig::default())?
//!     .export(&result.entries, "dictionary_data_clean.json")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 (<http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license (<http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Script detection and cleanup
pub mod text;

// Layout analysis
pub mod layout;

// Token sources
pub mod provider;

// Page and document orchestration
pub mod pipeline;

// Output formats
pub mod converters;

pub use config::{ExportConfig, LexiconConfig, PageErrorPolicy};
pub use error::{Error, Result};
pub use layout::{Entry, Token};
pub use pipeline::{deduplicate, reconstruct_page, DictionaryPipeline, DocumentResult};
