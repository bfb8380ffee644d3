//! Script classification.
//!
//! A dictionary page mixes two scripts: the primary (document) script of the
//! head phrases and the secondary script of the translations, for example
//! Latin-script Indonesian followed by Arabic. Only the secondary script needs
//! recognizing; everything else is primary.

use serde::{Deserialize, Serialize};

/// Inclusive Unicode code-point range identifying the secondary script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRange {
    /// First code point of the range
    pub start: u32,
    /// Last code point of the range (inclusive)
    pub end: u32,
}

impl ScriptRange {
    /// Arabic block (U+0600..=U+06FF).
    pub const ARABIC: ScriptRange = ScriptRange::new(0x0600, 0x06FF);

    /// Hebrew block (U+0590..=U+05FF).
    pub const HEBREW: ScriptRange = ScriptRange::new(0x0590, 0x05FF);

    /// Create a range from its first and last code points.
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Check whether `ch` falls inside the range.
    pub fn contains(&self, ch: char) -> bool {
        (self.start..=self.end).contains(&(ch as u32))
    }
}

impl Default for ScriptRange {
    fn default() -> Self {
        Self::ARABIC
    }
}

/// Script class of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Head-word (document) script
    Primary,
    /// Translation script
    Secondary,
}

impl Script {
    /// True for [`Script::Secondary`].
    pub fn is_secondary(self) -> bool {
        self == Script::Secondary
    }
}

/// Classifies text by membership in the secondary script range.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptClassifier {
    range: ScriptRange,
}

impl ScriptClassifier {
    /// Create a classifier for the given secondary script range.
    pub fn new(range: ScriptRange) -> Self {
        Self { range }
    }

    /// The secondary script range this classifier recognizes.
    pub fn range(&self) -> ScriptRange {
        self.range
    }

    /// Classify `text`.
    ///
    /// Secondary iff any character lies in the range. Empty and
    /// whitespace-only text is always primary.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_lexicon::text::{Script, ScriptClassifier};
    ///
    /// let classifier = ScriptClassifier::default();
    /// assert_eq!(classifier.classify("لعس"), Script::Secondary);
    /// assert_eq!(classifier.classify("Batuk"), Script::Primary);
    /// assert_eq!(classifier.classify("   "), Script::Primary);
    /// ```
    pub fn classify(&self, text: &str) -> Script {
        if text.chars().any(|ch| self.range.contains(ch)) {
            Script::Secondary
        } else {
            Script::Primary
        }
    }
}
