//! # Vocabulary
//!
//! The tokenizer never owns its vocabulary; it borrows a [`PieceVocab`]
//! for the duration of each call.
//!
//! ## Piece Vocabulary
//!
//! [`PieceVocab`] is the lookup capability the segmenter consumes:
//! * `contains` - is this piece (with any suffix indicator) known?
//! * `lookup` - the id for a known piece.
//! * `default_token` - the id handed out for unknown pieces, if any.
//!
//! [`PieceMapVocab`] is the ``{ String -> T }`` hash map implementation.
//!
//! ## Vocabulary IO
//!
//! With the "std" feature, [`io`] reads and writes the line-oriented
//! `vocab.txt` format used by BERT-style models.
#[cfg(feature = "std")]
pub mod io;

pub mod map_vocab;
pub mod piece_vocab;
pub mod vocab_types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[doc(inline)]
pub use map_vocab::PieceMapVocab;
#[doc(inline)]
pub use piece_vocab::PieceVocab;
#[doc(inline)]
pub use vocab_types::PieceTokenMap;
