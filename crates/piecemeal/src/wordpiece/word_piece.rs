//! # Word Pieces

use core::ops::Range;

use crate::alloc::string::String;

/// One piece produced from a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPiece {
    /// The piece text.
    ///
    /// A vocabulary piece (with the suffix indicator when it continues a
    /// word), the unknown token, or literal word text.
    pub piece: String,

    /// Byte offset of the first covered byte of the source word.
    pub start: usize,

    /// Byte offset one past the last covered byte of the source word.
    pub limit: usize,
}

impl WordPiece {
    /// Create a new piece.
    pub fn new<S: Into<String>>(
        piece: S,
        start: usize,
        limit: usize,
    ) -> Self {
        debug_assert!(start <= limit);
        Self {
            piece: piece.into(),
            start,
            limit,
        }
    }

    /// The covered byte range of the source word.
    pub fn span(&self) -> Range<usize> {
        self.start..self.limit
    }
}
