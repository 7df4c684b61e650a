//! # Tokenized Batches

use crate::alloc::string::String;
use crate::errors::PMResult;
use crate::ragged::RaggedVec;
use crate::wordpiece::TokenOutType;

/// Tokens of a batch, as piece strings or as vocabulary ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenBatch<T> {
    /// Piece strings; see [`TokenOutType::Piece`].
    Pieces(RaggedVec<String>),

    /// Vocabulary ids; see [`TokenOutType::Id`].
    Ids(RaggedVec<T>),
}

impl<T> TokenBatch<T> {
    /// The token representation of this batch.
    pub fn token_out_type(&self) -> TokenOutType {
        match self {
            TokenBatch::Pieces(_) => TokenOutType::Piece,
            TokenBatch::Ids(_) => TokenOutType::Id,
        }
    }

    /// The rank of the underlying [`RaggedVec`].
    pub fn rank(&self) -> usize {
        match self {
            TokenBatch::Pieces(pieces) => pieces.rank(),
            TokenBatch::Ids(ids) => ids.rank(),
        }
    }

    /// Borrow the piece strings, if this is a piece batch.
    pub fn as_pieces(&self) -> Option<&RaggedVec<String>> {
        match self {
            TokenBatch::Pieces(pieces) => Some(pieces),
            TokenBatch::Ids(_) => None,
        }
    }

    /// Borrow the ids, if this is an id batch.
    pub fn as_ids(&self) -> Option<&RaggedVec<T>> {
        match self {
            TokenBatch::Pieces(_) => None,
            TokenBatch::Ids(ids) => Some(ids),
        }
    }

    /// Take the piece strings, if this is a piece batch.
    pub fn into_pieces(self) -> Option<RaggedVec<String>> {
        match self {
            TokenBatch::Pieces(pieces) => Some(pieces),
            TokenBatch::Ids(_) => None,
        }
    }

    /// Take the ids, if this is an id batch.
    pub fn into_ids(self) -> Option<RaggedVec<T>> {
        match self {
            TokenBatch::Pieces(_) => None,
            TokenBatch::Ids(ids) => Some(ids),
        }
    }

    /// Drop the outermost nesting level; see [`RaggedVec::into_values`].
    pub fn into_values(self) -> PMResult<Self> {
        Ok(match self {
            TokenBatch::Pieces(pieces) => TokenBatch::Pieces(pieces.into_values()?),
            TokenBatch::Ids(ids) => TokenBatch::Ids(ids.into_values()?),
        })
    }
}

/// The output of [`crate::WordpieceTokenizer`].
///
/// `tokens`, `starts` and `limits` share one nested shape:
/// the input shape plus an innermost level of pieces per word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedBatch<T> {
    /// The pieces (or ids).
    pub tokens: TokenBatch<T>,

    /// Byte offset of the start of each piece in its source word.
    pub starts: RaggedVec<usize>,

    /// Byte offset one past the end of each piece in its source word.
    pub limits: RaggedVec<usize>,
}

impl<T> TokenizedBatch<T> {
    /// The shared rank of the three outputs.
    pub fn rank(&self) -> usize {
        self.starts.rank()
    }

    /// The number of pieces across the whole batch.
    pub fn num_pieces(&self) -> usize {
        self.starts.flat_values().len()
    }

    /// Drop the outermost nesting level of all three outputs.
    pub fn into_values(self) -> PMResult<Self> {
        Ok(Self {
            tokens: self.tokens.into_values()?,
            starts: self.starts.into_values()?,
            limits: self.limits.into_values()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::string::ToString;
    use crate::alloc::vec;

    #[test]
    fn test_token_batch_accessors() {
        let pieces: TokenBatch<u32> =
            TokenBatch::Pieces(RaggedVec::from_rows([vec!["un".to_string(), "##aff".to_string()]]));
        assert_eq!(pieces.token_out_type(), TokenOutType::Piece);
        assert_eq!(pieces.rank(), 2);
        assert!(pieces.as_ids().is_none());
        assert_eq!(pieces.as_pieces().unwrap().flat_values(), &["un", "##aff"]);

        let ids: TokenBatch<u32> = TokenBatch::Ids(RaggedVec::from_rows([vec![8, 9]]));
        assert_eq!(ids.token_out_type(), TokenOutType::Id);
        let ids = ids.into_values().unwrap();
        assert_eq!(ids.rank(), 1);
        assert_eq!(ids.into_ids().unwrap().flat_values(), &[8, 9]);
    }

    #[test]
    fn test_tokenized_batch_into_values() {
        let batch: TokenizedBatch<u32> = TokenizedBatch {
            tokens: TokenBatch::Ids(RaggedVec::from_rows([vec![2, 3, 4]])),
            starts: RaggedVec::from_rows([vec![0, 4, 5]]),
            limits: RaggedVec::from_rows([vec![4, 5, 7]]),
        };
        assert_eq!(batch.rank(), 2);
        assert_eq!(batch.num_pieces(), 3);

        let batch = batch.into_values().unwrap();
        assert_eq!(batch.rank(), 1);
        assert_eq!(batch.limits.flat_values(), &[4, 5, 7]);

        assert!(batch.into_values().is_err());
    }
}
