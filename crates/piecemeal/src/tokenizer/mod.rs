//! # Batch Tokenization
//!
//! [`WordpieceTokenizer`] flattens a ragged batch of words, runs the
//! [`crate::WordpieceSegmenter`] over every word (optionally on the ``rayon``
//! pool), and re-nests the pieces under their words.
//!
//! The result is a [`TokenizedBatch`]: tokens, starts and limits, each a
//! [`crate::RaggedVec`] of the same shape.

pub mod tokenized_batch;
pub mod wordpiece_tokenizer;

#[doc(inline)]
pub use tokenized_batch::{TokenBatch, TokenizedBatch};
#[doc(inline)]
pub use wordpiece_tokenizer::WordpieceTokenizer;
