//! # Piece Vocabulary Capability

use crate::alloc::sync::Arc;
use crate::types::TokenType;
use crate::vocab::PieceTokenMap;

/// Read-only lookup from subword piece to id.
///
/// Implementations must be pure: a lookup never mutates the vocabulary,
/// and repeated lookups of the same piece agree. The `Send + Sync` bound
/// lets one vocabulary serve concurrent tokenizer calls without locking.
pub trait PieceVocab: Send + Sync {
    /// The id type.
    type Token: TokenType;

    /// Look up the id of a piece.
    ///
    /// ## Arguments
    /// * `piece` - the complete piece, including any suffix indicator.
    ///
    /// ## Returns
    /// The id, or `None` if the piece is not in the vocabulary.
    fn lookup(
        &self,
        piece: &str,
    ) -> Option<Self::Token>;

    /// Is the piece in the vocabulary?
    fn contains(
        &self,
        piece: &str,
    ) -> bool {
        self.lookup(piece).is_some()
    }

    /// The id to use for pieces which are not in the vocabulary.
    ///
    /// This mirrors the default value of a lookup table; `None` means
    /// lookups of unknown pieces have no answer.
    fn default_token(&self) -> Option<Self::Token> {
        None
    }
}

impl<T: TokenType> PieceVocab for PieceTokenMap<T> {
    type Token = T;

    fn lookup(
        &self,
        piece: &str,
    ) -> Option<T> {
        self.get(piece).copied()
    }

    fn contains(
        &self,
        piece: &str,
    ) -> bool {
        self.contains_key(piece)
    }
}

impl<V: PieceVocab + ?Sized> PieceVocab for &V {
    type Token = V::Token;

    fn lookup(
        &self,
        piece: &str,
    ) -> Option<Self::Token> {
        (**self).lookup(piece)
    }

    fn contains(
        &self,
        piece: &str,
    ) -> bool {
        (**self).contains(piece)
    }

    fn default_token(&self) -> Option<Self::Token> {
        (**self).default_token()
    }
}

impl<V: PieceVocab + ?Sized> PieceVocab for Arc<V> {
    type Token = V::Token;

    fn lookup(
        &self,
        piece: &str,
    ) -> Option<Self::Token> {
        (**self).lookup(piece)
    }

    fn contains(
        &self,
        piece: &str,
    ) -> bool {
        (**self).contains(piece)
    }

    fn default_token(&self) -> Option<Self::Token> {
        (**self).default_token()
    }
}
