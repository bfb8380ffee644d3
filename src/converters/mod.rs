//! Output converters for reconstructed dictionaries.
//!
//! - **JSON**: array of `{primary_field: ..., secondary_field: ...}` objects
//!
//! # Examples
//!
//! ```
//! use pdf_lexicon::config::ExportConfig;
//! use pdf_lexicon::converters::JsonExporter;
//! use pdf_lexicon::layout::Entry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let exporter = JsonExporter::new(ExportConfig::default())?;
//! let json = exporter.to_json_string(&[Entry::new("Batuk", "لعس")])?;
//! assert!(json.contains("\"indonesian\": \"Batuk\""));
//! # Ok(())
//! # }
//! ```

pub mod json;

// Re-export main types
pub use json::JsonExporter;
