//! # `piecemeal` Wordpiece Tokenizer
//!
//! This is a greedy longest-match-first subword ("wordpiece") tokenizer.
//!
//! Input words arrive already isolated (no normalization or whitespace
//! splitting happens here), possibly grouped into ragged batches of any depth.
//! Every word is split into vocabulary pieces; continuation pieces carry a
//! suffix indicator (``##`` by default), and every piece reports the byte range
//! it covers in its source word.
//!
//! See:
//! * [`vocab`] for the vocabulary lookup capability and `vocab.txt` io.
//! * [`ragged`] for the row-splits batch container.
//! * [`wordpiece`] for the per-word segmenter and its options.
//! * [`tokenizer`] for the batch tokenizer.
//!
//! ## Example
//!
//! ```rust
//! use piecemeal::{
//!     Nested, PieceMapVocab, TokenOutType, WordpieceOptions, WordpieceTokenizer,
//! };
//!
//! let vocab: PieceMapVocab<u32> = PieceMapVocab::from_pieces([
//!     "[UNK]", "they", "##'", "##re", "the", "great", "##est",
//! ])
//! .unwrap();
//!
//! let tokenizer = WordpieceTokenizer::new(
//!     WordpieceOptions::default().with_token_out_type(TokenOutType::Piece),
//! );
//!
//! let batch = Nested::list([Nested::from_leaves(["they're", "the", "greatest"])]);
//! let result = tokenizer.tokenize_nested_with_offsets(&vocab, &batch).unwrap();
//!
//! assert_eq!(
//!     result.tokens.into_pieces().unwrap().into_nested(),
//!     Nested::list([Nested::from_rows([
//!         vec!["they", "##'", "##re"],
//!         vec!["the"],
//!         vec!["great", "##est"],
//!     ])])
//!     .map(|s| s.to_string()),
//! );
//! assert_eq!(
//!     result.starts.into_nested(),
//!     Nested::list([Nested::from_rows([vec![0, 4, 5], vec![0], vec![0, 5]])]),
//! );
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod errors;
pub mod ragged;
pub mod tokenizer;
pub mod types;
pub mod vocab;
pub mod wordpiece;

#[doc(inline)]
pub use errors::{PMResult, PiecemealError};
#[doc(inline)]
pub use ragged::{Nested, RaggedVec};
#[doc(inline)]
pub use tokenizer::{TokenBatch, TokenizedBatch, WordpieceTokenizer};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{PieceMapVocab, PieceVocab};
#[doc(inline)]
pub use wordpiece::{TokenOutType, WordPiece, WordpieceOptions, WordpieceSegmenter};
