//! Positioned word tokens.
//!
//! A [`Token`] is one word as the page token provider reports it: its text and
//! page-relative bounding box, with `top` growing downwards. The field names
//! follow pdfplumber's `extract_words` output, so its JSON deserializes
//! directly (extra keys are ignored).

use serde::{Deserialize, Serialize};

/// A single extracted word with its bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Word text as extracted
    pub text: String,
    /// Left edge
    pub x0: f32,
    /// Right edge
    pub x1: f32,
    /// Top edge (distance from the top of the page)
    pub top: f32,
    /// Bottom edge (distance from the top of the page)
    pub bottom: f32,
}

impl Token {
    /// Create a new token.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_lexicon::layout::Token;
    ///
    /// let token = Token::new("Batuk", 40.0, 70.0, 100.0, 110.0);
    /// assert_eq!(token.x0, 40.0);
    /// ```
    pub fn new(text: impl Into<String>, x0: f32, x1: f32, top: f32, bottom: f32) -> Self {
        Self {
            text: text.into(),
            x0,
            x1,
            top,
            bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_pdfplumber_word() {
        let json = r#"{
            "text": "Batuk",
            "x0": 56.5,
            "x1": 84.25,
            "top": 120.5,
            "doctop": 962.5,
            "bottom": 131.0,
            "upright": true,
            "height": 10.5,
            "width": 27.5,
            "direction": "ltr"
        }"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.text, "Batuk");
        assert_eq!(token.x0, 56.5);
        assert_eq!(token.bottom, 131.0);
    }
}
