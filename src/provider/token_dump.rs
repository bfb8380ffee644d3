//! JSON token dumps.
//!
//! A dump holds the words of every page as produced by an external extractor
//! such as pdfplumber's `extract_words`. Two shapes are accepted:
//!
//! ```text
//! {"x_tolerance": 1, "y_tolerance": 1, "pages": [{"width": 595.0, "words": [...]}, ...]}
//! [{"width": 595.0, "words": [...]}, ...]
//! ```
//!
//! A page the extractor failed on may carry `"error": "<reason>"` instead of
//! words; reading it reports a provider failure.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::Token;
use crate::provider::PageTokenProvider;

/// One page of a token dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpPage {
    /// Page width
    #[serde(default)]
    pub width: f32,
    /// Page height, informational
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Extracted words
    #[serde(default)]
    pub words: Vec<Token>,
    /// Extraction failure reported by the extractor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DumpPage {
    /// A successfully extracted page.
    pub fn new(width: f32, words: Vec<Token>) -> Self {
        Self {
            width,
            height: None,
            words,
            error: None,
        }
    }

    /// A page the extractor could not decode.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            width: 0.0,
            height: None,
            words: Vec::new(),
            error: Some(reason.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DumpShape {
    Document {
        pages: Vec<DumpPage>,
        #[serde(default)]
        x_tolerance: Option<f32>,
        #[serde(default)]
        y_tolerance: Option<f32>,
    },
    Pages(Vec<DumpPage>),
}

/// In-memory token dump implementing [`PageTokenProvider`].
#[derive(Debug, Clone, Default)]
pub struct TokenDump {
    pages: Vec<DumpPage>,
    x_tolerance: Option<f32>,
    y_tolerance: Option<f32>,
}

impl TokenDump {
    /// Build a dump from pages.
    pub fn from_pages(pages: Vec<DumpPage>) -> Result<Self> {
        let dump = Self {
            pages,
            x_tolerance: None,
            y_tolerance: None,
        };
        dump.validate()?;
        Ok(dump)
    }

    /// Parse a dump from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_shape(serde_json::from_str(json)?)
    }

    /// Parse a dump from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_shape(serde_json::from_reader(reader)?)
    }

    /// Load a dump from a JSON file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading token dump {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_shape(shape: DumpShape) -> Result<Self> {
        let dump = match shape {
            DumpShape::Document {
                pages,
                x_tolerance,
                y_tolerance,
            } => Self {
                pages,
                x_tolerance,
                y_tolerance,
            },
            DumpShape::Pages(pages) => Self {
                pages,
                x_tolerance: None,
                y_tolerance: None,
            },
        };
        dump.validate()?;
        Ok(dump)
    }

    fn validate(&self) -> Result<()> {
        for (index, page) in self.pages.iter().enumerate() {
            if page.error.is_none() && !(page.width.is_finite() && page.width > 0.0) {
                return Err(Error::InvalidTokenDump(format!(
                    "page {} has invalid width {}",
                    index, page.width
                )));
            }
        }
        Ok(())
    }

    /// All pages of the dump.
    pub fn pages(&self) -> &[DumpPage] {
        &self.pages
    }

    fn page(&self, page: usize) -> Result<&DumpPage> {
        let dump_page = self.pages.get(page).ok_or(Error::PageOutOfRange {
            page,
            page_count: self.pages.len(),
        })?;

        match &dump_page.error {
            Some(reason) => Err(Error::provider(page, reason.clone())),
            None => Ok(dump_page),
        }
    }
}

impl PageTokenProvider for TokenDump {
    fn page_count(&self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn page_width(&self, page: usize) -> Result<f32> {
        Ok(self.page(page)?.width)
    }

    fn word_tokens(&self, page: usize, x_tolerance: f32, y_tolerance: f32) -> Result<Vec<Token>> {
        let dump_page = self.page(page)?;

        // Words are already built; tolerances only matter if they disagree
        // with the ones the dump was extracted with.
        let mismatch = |recorded: Option<f32>, requested: f32| {
            recorded.is_some_and(|r| (r - requested).abs() > f32::EPSILON)
        };
        if mismatch(self.x_tolerance, x_tolerance) || mismatch(self.y_tolerance, y_tolerance) {
            log::warn!(
                "Token dump was extracted with tolerances ({:?}, {:?}), requested ({}, {})",
                self.x_tolerance,
                self.y_tolerance,
                x_tolerance,
                y_tolerance
            );
        }

        Ok(dump_page.words.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT_JSON: &str = r#"{
        "x_tolerance": 1,
        "y_tolerance": 1,
        "pages": [
            {
                "page_number": 1,
                "width": 600.0,
                "height": 840.0,
                "words": [
                    {"text": "Batuk", "x0": 40.0, "x1": 70.0, "top": 100.0, "bottom": 110.0},
                    {"text": "لعس", "x0": 120.0, "x1": 140.0, "top": 100.0, "bottom": 110.0}
                ]
            },
            {"width": 600.0, "words": []},
            {"error": "content stream truncated"}
        ]
    }"#;

    #[test]
    fn test_parse_document_shape() {
        let dump = TokenDump::from_json_str(DOCUMENT_JSON).unwrap();
        assert_eq!(dump.page_count().unwrap(), 3);
        assert_eq!(dump.page_width(0).unwrap(), 600.0);

        let tokens = dump.word_tokens(0, 1.0, 1.0).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "لعس");
        assert_eq!(dump.pages()[0].height, Some(840.0));
    }

    #[test]
    fn test_parse_bare_page_array() {
        let json = r#"[{"width": 500.0, "words": [{"text": "a", "x0": 1.0, "x1": 2.0, "top": 3.0, "bottom": 4.0}]}]"#;
        let dump = TokenDump::from_json_str(json).unwrap();
        assert_eq!(dump.page_count().unwrap(), 1);
        assert_eq!(dump.word_tokens(0, 1.0, 1.0).unwrap()[0].text, "a");
    }

    #[test]
    fn test_empty_page_is_not_an_error() {
        let dump = TokenDump::from_json_str(DOCUMENT_JSON).unwrap();
        assert!(dump.word_tokens(1, 1.0, 1.0).unwrap().is_empty());
    }

    #[test]
    fn test_failed_page_reports_provider_error() {
        let dump = TokenDump::from_json_str(DOCUMENT_JSON).unwrap();
        match dump.word_tokens(2, 1.0, 1.0) {
            Err(Error::Provider { page, reason }) => {
                assert_eq!(page, 2);
                assert!(reason.contains("truncated"));
            },
            other => panic!("expected provider error, got {:?}", other),
        }
        assert!(dump.page_width(2).is_err());
    }

    #[test]
    fn test_out_of_range_page() {
        let dump = TokenDump::from_json_str(DOCUMENT_JSON).unwrap();
        assert!(matches!(
            dump.word_tokens(9, 1.0, 1.0),
            Err(Error::PageOutOfRange {
                page: 9,
                page_count: 3
            })
        ));
    }

    #[test]
    fn test_invalid_width_rejected() {
        let json = r#"[{"width": 0.0, "words": []}]"#;
        assert!(matches!(
            TokenDump::from_json_str(json),
            Err(Error::InvalidTokenDump(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(TokenDump::from_json_str("{\"pages\": 3}"), Err(Error::Json(_))));
    }

    #[test]
    fn test_from_pages() {
        let dump = TokenDump::from_pages(vec![
            DumpPage::new(600.0, vec![Token::new("Batuk", 40.0, 70.0, 100.0, 110.0)]),
            DumpPage::failed("encrypted"),
        ])
        .unwrap();
        assert_eq!(dump.page_count().unwrap(), 2);
        assert!(dump.word_tokens(1, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, DOCUMENT_JSON.as_bytes()).unwrap();

        let dump = TokenDump::open(file.path()).unwrap();
        assert_eq!(dump.page_count().unwrap(), 3);
    }
}
