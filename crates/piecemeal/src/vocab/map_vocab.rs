//! # Piece Map ``{ String -> T }`` Vocabulary

use crate::alloc::format;
use crate::alloc::string::ToString;
use crate::alloc::vec::Vec;
use crate::errors::{PMResult, PiecemealError};
use crate::types::TokenType;
use crate::vocab::{PieceTokenMap, PieceVocab};

/// Piece vocabulary as a dictionary map of ``{ String -> T }``.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceMapVocab<T: TokenType> {
    /// Map of ``{ String -> T }``.
    piece_map: PieceTokenMap<T>,

    /// The id for pieces missing from `piece_map`.
    default_token: Option<T>,
}

impl<T: TokenType> Default for PieceMapVocab<T> {
    fn default() -> Self {
        Self::from_piece_map(PieceTokenMap::default())
    }
}

impl<T: TokenType> From<PieceTokenMap<T>> for PieceMapVocab<T> {
    fn from(piece_map: PieceTokenMap<T>) -> Self {
        Self::from_piece_map(piece_map)
    }
}

impl<T: TokenType> PieceMapVocab<T> {
    /// Build a vocabulary from a [`PieceTokenMap`].
    ///
    /// The vocabulary will have no default token.
    pub fn from_piece_map(piece_map: PieceTokenMap<T>) -> Self {
        Self {
            piece_map,
            default_token: None,
        }
    }

    /// Build a vocabulary from an ordered list of pieces.
    ///
    /// Each piece is assigned its position in the list as its id.
    ///
    /// ## Arguments
    /// * `pieces` - the pieces, in id order.
    ///
    /// ## Returns
    /// The vocabulary; or an error if a piece is repeated,
    /// or the list is too long for `T`.
    pub fn from_pieces<I, S>(pieces: I) -> PMResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for (idx, piece) in pieces.into_iter().enumerate() {
            let token = token_for_index::<T>(idx)?;
            vocab.try_add_piece(piece.as_ref(), token)?;
        }
        Ok(vocab)
    }

    /// Set the id returned for pieces missing from the vocabulary.
    pub fn set_default_token(
        &mut self,
        default_token: Option<T>,
    ) {
        self.default_token = default_token;
    }

    /// Set the id returned for pieces missing from the vocabulary.
    pub fn with_default_token(
        mut self,
        default_token: Option<T>,
    ) -> Self {
        self.set_default_token(default_token);
        self
    }

    /// Get the underlying piece map.
    pub fn piece_map(&self) -> &PieceTokenMap<T> {
        &self.piece_map
    }

    /// Add a piece to the vocabulary.
    ///
    /// ## Returns
    /// An error if the piece is already present.
    pub fn try_add_piece(
        &mut self,
        piece: &str,
        token: T,
    ) -> PMResult<()> {
        if let Some(existing) = self.piece_map.get(piece) {
            return Err(PiecemealError::VocabConflict(format!(
                "duplicate piece {piece:?}: ids {existing} and {token}"
            )));
        }
        self.piece_map.insert(piece.to_string(), token);
        Ok(())
    }

    /// The number of pieces in the vocabulary.
    pub fn len(&self) -> usize {
        self.piece_map.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.piece_map.is_empty()
    }

    /// The highest id in the vocabulary, if any.
    pub fn max_token(&self) -> Option<T> {
        self.piece_map.values().copied().max()
    }

    /// Iterate over the ``(piece, id)`` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.piece_map
            .iter()
            .map(|(piece, &token)| (piece.as_str(), token))
    }

    /// The ``(piece, id)`` pairs, sorted by id.
    pub fn sorted_pieces(&self) -> Vec<(&str, T)> {
        let mut pairs: Vec<(&str, T)> = self.iter().collect();
        pairs.sort_by_key(|&(_, token)| token);
        pairs
    }
}

impl<T: TokenType> PieceVocab for PieceMapVocab<T> {
    type Token = T;

    fn lookup(
        &self,
        piece: &str,
    ) -> Option<T> {
        self.piece_map.get(piece).copied()
    }

    fn contains(
        &self,
        piece: &str,
    ) -> bool {
        self.piece_map.contains_key(piece)
    }

    fn default_token(&self) -> Option<T> {
        self.default_token
    }
}

/// Convert a list index into a token id.
pub(crate) fn token_for_index<T: TokenType>(idx: usize) -> PMResult<T> {
    T::from_usize(idx).ok_or_else(|| {
        PiecemealError::VocabConflict(format!(
            "vocab size ({}) exceeds token type capacity",
            idx + 1
        ))
    })
}
