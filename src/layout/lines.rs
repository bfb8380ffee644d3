//! Visual line grouping.
//!
//! Tokens of one column are clustered into lines by their `top` coordinate.
//! Extraction order is not trusted: tokens are sorted before clustering and
//! every finished line is re-sorted left to right.

use std::cmp::Ordering;

use crate::layout::token::Token;

/// Tokens sharing approximately the same vertical position, left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Tokens ordered by `x0`
    pub tokens: Vec<Token>,
}

impl Line {
    fn from_tokens(mut tokens: Vec<Token>) -> Self {
        tokens.sort_by(|a, b| cmp_f32(a.x0, b.x0));
        Self { tokens }
    }

    /// Left edge of the first token, `None` for an empty line.
    pub fn first_x0(&self) -> Option<f32> {
        self.tokens.first().map(|t| t.x0)
    }

    /// Token texts joined with single spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of tokens on the line.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if the line has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn cmp_f32(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Cluster a column's tokens into ordered visual lines.
///
/// Tokens are stably sorted by `(top, x0)`. A new line starts whenever the
/// current token's `top` differs from the `top` of the token most recently
/// added to the line by more than `vertical_tolerance`. Comparing against the
/// last token rather than the first lets a slowly drifting baseline stay on
/// one line.
///
/// Every input token appears in exactly one output line.
///
/// # Examples
///
/// ```
/// use pdf_lexicon::layout::{group_lines, Token};
///
/// let tokens = vec![
///     Token::new("لعس", 90.0, 110.0, 101.0, 111.0),
///     Token::new("Batuk", 40.0, 70.0, 100.0, 110.0),
///     Token::new("Demam", 40.0, 75.0, 120.0, 130.0),
/// ];
/// let lines = group_lines(tokens, 5.0);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].text(), "Batuk لعس");
/// ```
pub fn group_lines(mut tokens: Vec<Token>, vertical_tolerance: f32) -> Vec<Line> {
    // sort_by is stable
    tokens.sort_by(|a, b| match cmp_f32(a.top, b.top) {
        Ordering::Equal => cmp_f32(a.x0, b.x0),
        other => other,
    });

    let mut lines = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for token in tokens {
        let starts_new_line = current
            .last()
            .is_some_and(|last| (token.top - last.top).abs() > vertical_tolerance);

        if starts_new_line {
            lines.push(Line::from_tokens(std::mem::take(&mut current)));
        }
        current.push(token);
    }

    if !current.is_empty() {
        lines.push(Line::from_tokens(current));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, x0: f32, top: f32) -> Token {
        Token::new(text, x0, x0 + 25.0, top, top + 10.0)
    }

    fn texts(line: &Line) -> Vec<&str> {
        line.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(group_lines(vec![], 5.0).is_empty());
    }

    #[test]
    fn test_single_line_sorted_left_to_right() {
        let tokens = vec![token("c", 90.0, 100.0), token("a", 10.0, 101.0), token("b", 50.0, 99.0)];
        let lines = group_lines(tokens, 5.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(texts(&lines[0]), vec!["a", "b", "c"]);
        assert_eq!(lines[0].first_x0(), Some(10.0));
    }

    #[test]
    fn test_separate_lines() {
        let tokens = vec![
            token("second", 10.0, 120.0),
            token("first", 10.0, 100.0),
            token("third", 10.0, 140.0),
        ];
        let lines = group_lines(tokens, 5.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(), "first");
        assert_eq!(lines[1].text(), "second");
        assert_eq!(lines[2].text(), "third");
    }

    #[test]
    fn test_difference_equal_to_tolerance_stays_on_line() {
        let lines = group_lines(vec![token("a", 10.0, 100.0), token("b", 50.0, 105.0)], 5.0);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_difference_above_tolerance_breaks_line() {
        let lines = group_lines(vec![token("a", 10.0, 100.0), token("b", 50.0, 105.5)], 5.0);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_drift_compares_against_last_token() {
        // 100 -> 104 -> 108: each step within tolerance, total drift beyond it
        let tokens = vec![token("a", 10.0, 100.0), token("b", 50.0, 104.0), token("c", 90.0, 108.0)];
        let lines = group_lines(tokens, 5.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(texts(&lines[0]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_line_helpers() {
        let line = Line::from_tokens(vec![token("b", 50.0, 100.0), token("a", 10.0, 100.0)]);
        assert_eq!(line.len(), 2);
        assert!(!line.is_empty());
        assert_eq!(line.text(), "a b");
    }
}
