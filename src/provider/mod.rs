//! Page token providers.
//!
//! Decoding a PDF and measuring its words is not this crate's job. The layout
//! engine consumes tokens through [`PageTokenProvider`], implemented by
//! whatever extraction layer sits in front of it. [`TokenDump`] reads tokens
//! that an extractor has already written to JSON.

pub mod token_dump;

pub use token_dump::{DumpPage, TokenDump};

use crate::error::Result;
use crate::layout::Token;

/// Source of positioned word tokens, one page at a time.
///
/// Pages are zero-based. A provider that cannot produce a page reports
/// [`Error::Provider`](crate::error::Error::Provider); it must not return an
/// empty page in its place, since an empty page is a valid outcome.
pub trait PageTokenProvider {
    /// Number of pages in the document.
    fn page_count(&self) -> Result<usize>;

    /// Width of `page` in the same units as token coordinates.
    fn page_width(&self, page: usize) -> Result<f32>;

    /// Word tokens of `page`.
    ///
    /// The tolerances are the extractor's own word-building parameters and are
    /// passed through untouched.
    fn word_tokens(&self, page: usize, x_tolerance: f32, y_tolerance: f32) -> Result<Vec<Token>>;
}

impl<P: PageTokenProvider + ?Sized> PageTokenProvider for &P {
    fn page_count(&self) -> Result<usize> {
        (**self).page_count()
    }

    fn page_width(&self, page: usize) -> Result<f32> {
        (**self).page_width(page)
    }

    fn word_tokens(&self, page: usize, x_tolerance: f32, y_tolerance: f32) -> Result<Vec<Token>> {
        (**self).word_tokens(page, x_tolerance, y_tolerance)
    }
}
