//! # Wordpiece Batch Tokenizer

use crate::alloc::format;
use crate::alloc::string::String;
use crate::alloc::vec;
use crate::alloc::vec::Vec;
use crate::errors::{PMResult, PiecemealError};
use crate::ragged::{Nested, RaggedVec};
use crate::tokenizer::{TokenBatch, TokenizedBatch};
use crate::vocab::PieceVocab;
use crate::wordpiece::{TokenOutType, WordPiece, WordpieceOptions, WordpieceSegmenter};

/// Tokenizes ragged batches of words with a [`WordpieceSegmenter`].
///
/// Each word of the batch is segmented independently; the pieces of every
/// word become one new innermost row, so the output rank is the input rank
/// plus one. The vocabulary is supplied per call and only ever read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordpieceTokenizer {
    segmenter: WordpieceSegmenter,
}

impl From<WordpieceOptions> for WordpieceTokenizer {
    fn from(options: WordpieceOptions) -> Self {
        Self::new(options)
    }
}

impl WordpieceTokenizer {
    /// Create a new tokenizer.
    pub fn new(options: WordpieceOptions) -> Self {
        Self {
            segmenter: WordpieceSegmenter::new(options),
        }
    }

    /// Get the tokenizer options.
    pub fn options(&self) -> &WordpieceOptions {
        self.segmenter.options()
    }

    /// Get the per-word segmenter.
    pub fn segmenter(&self) -> &WordpieceSegmenter {
        &self.segmenter
    }

    /// Tokenize a ragged batch of words, with offsets.
    ///
    /// ## Arguments
    /// * `vocab` - the piece vocabulary.
    /// * `words` - a batch of rank >= 1 of UTF-8 words.
    ///
    /// ## Returns
    /// The pieces (or ids), starts and limits; all of rank `words.rank() + 1`.
    ///
    /// Errors are [`PiecemealError::InvalidArgument`] for a word which is not
    /// UTF-8, and [`PiecemealError::Configuration`] when ids are requested
    /// but the vocabulary cannot supply them. No partial result is returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, vocab, words)))]
    pub fn tokenize_with_offsets<V, S>(
        &self,
        vocab: &V,
        words: &RaggedVec<S>,
    ) -> PMResult<TokenizedBatch<V::Token>>
    where
        V: PieceVocab + ?Sized,
        S: AsRef<[u8]> + Sync,
    {
        let token_out_type = self.options().token_out_type();
        log::debug!(
            "tokenizing {} words; rank={}, out={token_out_type:?}, parallel={}",
            words.flat_values().len(),
            words.rank(),
            self.use_parallel(),
        );

        if token_out_type == TokenOutType::Id {
            self.check_unknown_token(vocab)?;
        }

        let word_pieces = self.segment_words(vocab, words.flat_values())?;

        let num_pieces = word_pieces.iter().map(Vec::len).sum();
        let mut row_splits = Vec::with_capacity(word_pieces.len() + 1);
        row_splits.push(0);
        let mut texts: Vec<String> = Vec::with_capacity(num_pieces);
        let mut starts = Vec::with_capacity(num_pieces);
        let mut limits = Vec::with_capacity(num_pieces);

        for pieces in word_pieces {
            for WordPiece {
                piece,
                start,
                limit,
            } in pieces
            {
                texts.push(piece);
                starts.push(start);
                limits.push(limit);
            }
            row_splits.push(texts.len());
        }

        let tokens = match token_out_type {
            TokenOutType::Piece => TokenBatch::Pieces(words.with_flat_rows(row_splits.clone(), texts)?),
            TokenOutType::Id => {
                let ids = texts
                    .iter()
                    .map(|piece| piece_id(vocab, piece))
                    .collect::<PMResult<Vec<_>>>()?;
                TokenBatch::Ids(words.with_flat_rows(row_splits.clone(), ids)?)
            }
        };

        Ok(TokenizedBatch {
            tokens,
            starts: words.with_flat_rows(row_splits.clone(), starts)?,
            limits: words.with_flat_rows(row_splits, limits)?,
        })
    }

    /// Tokenize a ragged batch of words, discarding offsets.
    ///
    /// See [`Self::tokenize_with_offsets`].
    pub fn tokenize<V, S>(
        &self,
        vocab: &V,
        words: &RaggedVec<S>,
    ) -> PMResult<TokenBatch<V::Token>>
    where
        V: PieceVocab + ?Sized,
        S: AsRef<[u8]> + Sync,
    {
        Ok(self.tokenize_with_offsets(vocab, words)?.tokens)
    }

    /// Tokenize a single word, with offsets.
    ///
    /// The word is tokenized as a batch of one, and that batch level is then
    /// dropped: the outputs are of rank 1.
    pub fn tokenize_word_with_offsets<V, S>(
        &self,
        vocab: &V,
        word: S,
    ) -> PMResult<TokenizedBatch<V::Token>>
    where
        V: PieceVocab + ?Sized,
        S: AsRef<[u8]> + Sync,
    {
        let batch = RaggedVec::from_flat_values(vec![word]);
        self.tokenize_with_offsets(vocab, &batch)?.into_values()
    }

    /// Tokenize a single word, discarding offsets.
    pub fn tokenize_word<V, S>(
        &self,
        vocab: &V,
        word: S,
    ) -> PMResult<TokenBatch<V::Token>>
    where
        V: PieceVocab + ?Sized,
        S: AsRef<[u8]> + Sync,
    {
        Ok(self.tokenize_word_with_offsets(vocab, word)?.tokens)
    }

    /// Tokenize a tree-shaped batch of words of any depth, with offsets.
    ///
    /// A [`Nested::Leaf`] is tokenized as by [`Self::tokenize_word_with_offsets`].
    ///
    /// The rank of a [`Nested::List`] is taken from its words, see
    /// [`Nested::depth`]. A nest of lists without any word (such as `[[]]`)
    /// has no determinable rank and is rejected; a single empty list is of
    /// rank 1.
    ///
    /// ## Returns
    /// The outputs, of rank `depth + 1`; or
    /// [`PiecemealError::InvalidArgument`] if the depth is not uniform,
    /// or cannot be determined.
    pub fn tokenize_nested_with_offsets<V, S>(
        &self,
        vocab: &V,
        words: &Nested<S>,
    ) -> PMResult<TokenizedBatch<V::Token>>
    where
        V: PieceVocab + ?Sized,
        S: AsRef<[u8]> + Sync,
    {
        match words {
            Nested::Leaf(word) => self.tokenize_word_with_offsets(vocab, word),
            Nested::List(_) => {
                let words = RaggedVec::try_from_nested(words.to_refs())?;
                self.tokenize_with_offsets(vocab, &words)
            }
        }
    }

    /// Tokenize a tree-shaped batch of words of any depth, discarding offsets.
    pub fn tokenize_nested<V, S>(
        &self,
        vocab: &V,
        words: &Nested<S>,
    ) -> PMResult<TokenBatch<V::Token>>
    where
        V: PieceVocab + ?Sized,
        S: AsRef<[u8]> + Sync,
    {
        Ok(self.tokenize_nested_with_offsets(vocab, words)?.tokens)
    }

    /// The unknown token must have an id before any word is looked at.
    fn check_unknown_token<V: PieceVocab + ?Sized>(
        &self,
        vocab: &V,
    ) -> PMResult<()> {
        if let Some(unknown_token) = self.options().unknown_token()
            && vocab.lookup(unknown_token).is_none()
        {
            return Err(PiecemealError::Configuration(format!(
                "unknown token {unknown_token:?} is not in the vocabulary"
            )));
        }
        Ok(())
    }

    fn use_parallel(&self) -> bool {
        cfg!(feature = "rayon") && self.options().parallel()
    }

    fn segment_words<V, S>(
        &self,
        vocab: &V,
        words: &[S],
    ) -> PMResult<Vec<Vec<WordPiece>>>
    where
        V: PieceVocab + ?Sized,
        S: AsRef<[u8]> + Sync,
    {
        #[cfg(feature = "rayon")]
        if self.options().parallel() {
            return self.par_segment_words(vocab, words);
        }

        words
            .iter()
            .map(|word| self.segmenter.try_segment_bytes(vocab, word.as_ref()))
            .collect()
    }

    /// Results land in input order; the first failing word decides the error.
    #[cfg(feature = "rayon")]
    fn par_segment_words<V, S>(
        &self,
        vocab: &V,
        words: &[S],
    ) -> PMResult<Vec<Vec<WordPiece>>>
    where
        V: PieceVocab + ?Sized,
        S: AsRef<[u8]> + Sync,
    {
        use rayon::prelude::*;
        let results: Vec<PMResult<Vec<WordPiece>>> = words
            .par_iter()
            .map(|word| self.segmenter.try_segment_bytes(vocab, word.as_ref()))
            .collect();
        results.into_iter().collect()
    }
}

/// The id of a piece: its own, else the vocabulary default.
fn piece_id<V: PieceVocab + ?Sized>(
    vocab: &V,
    piece: &str,
) -> PMResult<V::Token> {
    vocab
        .lookup(piece)
        .or_else(|| vocab.default_token())
        .ok_or_else(|| {
            PiecemealError::Configuration(format!(
                "piece {piece:?} has no id, and the vocabulary has no default token"
            ))
        })
}
