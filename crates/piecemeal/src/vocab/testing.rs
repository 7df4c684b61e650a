//! # Vocabulary Test Utilities

use crate::types::TokenType;
use crate::vocab::PieceMapVocab;

/// The pieces of [`build_test_vocab`], in id order.
pub const TEST_VOCAB_PIECES: &[&str] = &[
    "[PAD]", "[UNK]", "they", "##'", "##re", "the", "great", "##est", "un", "##aff", "##able",
    "##ity", "unaffable", "a", "##b", "##c", "éé", "##é", "你", "##好",
];

/// Build a small vocabulary for segmentation tests.
///
/// Ids are the positions in [`TEST_VOCAB_PIECES`].
pub fn build_test_vocab<T: TokenType>() -> PieceMapVocab<T> {
    PieceMapVocab::from_pieces(TEST_VOCAB_PIECES).expect("test vocab is well formed")
}
