//! Two-column page split.
//!
//! Dictionary pages are set in exactly two columns. A token is assigned to a
//! column by its left edge alone, so a word straddling the gutter goes to the
//! column it starts in.

use crate::layout::token::Token;

/// One of the two columns of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Left half (`x0 < midpoint`)
    Left,
    /// Right half (`x0 >= midpoint`)
    Right,
}

impl Column {
    /// Column of `token` for a page split at `midpoint`.
    pub fn of(token: &Token, midpoint: f32) -> Self {
        if token.x0 < midpoint {
            Column::Left
        } else {
            Column::Right
        }
    }
}

/// Partition a page's tokens into left and right columns.
///
/// The midpoint is `page_width / 2`. Every token lands in exactly one of the
/// returned vectors and input order is preserved within each. An empty page
/// yields two empty columns.
///
/// # Examples
///
/// ```
/// use pdf_lexicon::layout::{split_columns, Token};
///
/// let tokens = vec![
///     Token::new("Batuk", 40.0, 70.0, 100.0, 110.0),
///     Token::new("Demam", 320.0, 355.0, 100.0, 110.0),
/// ];
/// let (left, right) = split_columns(tokens, 600.0);
/// assert_eq!(left[0].text, "Batuk");
/// assert_eq!(right[0].text, "Demam");
/// ```
pub fn split_columns(tokens: Vec<Token>, page_width: f32) -> (Vec<Token>, Vec<Token>) {
    let midpoint = page_width / 2.0;
    let mut left = vec![];
    let mut right = vec![];

    for token in tokens {
        match Column::of(&token, midpoint) {
            Column::Left => left.push(token),
            Column::Right => right.push(token),
        }
    }

    log::trace!(
        "Column split at x={:.1}: {} left, {} right",
        midpoint,
        left.len(),
        right.len()
    );

    (left, right)
}
