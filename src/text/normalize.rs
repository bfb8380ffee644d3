//! Token and field cleanup.
//!
//! Scanned dictionaries carry sense numbers, bullet glyphs and stray
//! punctuation around the words. The translation script additionally picks up
//! colons used as separators in the source typography.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading or trailing run of anything that is not a letter
    static ref RE_EDGE_NON_LETTER: Regex = Regex::new(r"^[^\p{L}]+|[^\p{L}]+$").unwrap();

    /// Decimal digits (any script) and decorative markers, anywhere
    static ref RE_NOISE: Regex = Regex::new(r"[\*■\p{Nd}]").unwrap();
}

/// Colon used as a separator in the secondary script
const SECONDARY_NOISE: char = ':';

/// Normalize a token or an assembled field.
///
/// 1. strip the leading and trailing non-letter runs
/// 2. drop digits and decorative markers anywhere
/// 3. for secondary-script text, drop colons anywhere
/// 4. trim surrounding whitespace
///
/// After step 1 the text begins and ends with a letter and the later steps
/// only delete non-letters, so `normalize(normalize(s)) == normalize(s)`.
///
/// # Examples
///
/// ```
/// use pdf_lexicon::text::normalize;
///
/// assert_eq!(normalize("■ Batuk,", false), "Batuk");
/// assert_eq!(normalize("2. batuk kering", false), "batuk kering");
/// assert_eq!(normalize("سعل: لعس", true), "سعل لعس");
/// ```
pub fn normalize(text: &str, is_secondary: bool) -> String {
    let trimmed = RE_EDGE_NON_LETTER.replace_all(text, "");
    let mut cleaned = RE_NOISE.replace_all(&trimmed, "").into_owned();

    if is_secondary {
        cleaned.retain(|c| c != SECONDARY_NOISE);
    }

    cleaned.trim().to_string()
}
