//! # Wordpiece Segmentation
//!
//! [`WordpieceOptions`] describes the declarative needs of a segmentation:
//! * `suffix_indicator` - the continuation marker, ``##`` by default.
//! * `max_bytes_per_word` - longer words skip matching and are unknown.
//! * `max_chars_per_token` - an upper bound on candidate piece length.
//! * `unknown_token` / `split_unknown_characters` - the unknown-token policy.
//! * `token_out_type` - piece strings, or vocabulary ids.
//!
//! [`WordpieceSegmenter`] implements greedy longest-match-first splitting of
//! a single word, with byte offsets for every piece.

pub mod segmenter;
pub mod word_piece;
pub mod wordpiece_options;

#[doc(inline)]
pub use segmenter::WordpieceSegmenter;
#[doc(inline)]
pub use word_piece::WordPiece;
#[doc(inline)]
pub use wordpiece_options::{
    DEFAULT_MAX_BYTES_PER_WORD,
    DEFAULT_SUFFIX_INDICATOR,
    DEFAULT_UNKNOWN_TOKEN,
    TokenOutType,
    WordpieceOptions,
};
