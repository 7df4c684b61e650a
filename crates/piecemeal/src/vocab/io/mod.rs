//! # Vocabulary IO
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use piecemeal::{
//!     PMResult,
//!     PieceMapVocab,
//!     WordpieceOptions,
//!     WordpieceTokenizer,
//!     vocab::io::load_vocab_txt_path,
//! };
//!
//! fn example() -> PMResult<Vec<String>> {
//!     let vocab: PieceMapVocab<u32> = load_vocab_txt_path("vocab.txt")?;
//!     let tokenizer = WordpieceTokenizer::new(WordpieceOptions::default());
//!
//!     let ids = tokenizer.tokenize_word(&vocab, "unaffable")?;
//!     Ok(ids.into_ids().unwrap().flat_values().iter().map(|t| t.to_string()).collect())
//! }
//! ```

mod vocab_txt_io;

#[doc(inline)]
pub use vocab_txt_io::*;
