//! # Wordpiece Segmenter

use crate::alloc::format;
use crate::alloc::string::{String, ToString};
use crate::alloc::vec::Vec;
use crate::errors::{PMResult, PiecemealError};
use crate::vocab::PieceVocab;
use crate::wordpiece::{WordPiece, WordpieceOptions};

/// Greedy longest-match-first wordpiece segmenter.
///
/// Each word is scanned left to right over chars. At every position the
/// longest candidate (bounded by the end of the word, and by
/// `max_chars_per_token`) which the vocabulary contains is taken; matches are
/// never revisited. Candidates after the first position carry the suffix
/// indicator.
///
/// If some position has no match at all, every piece found so far for the
/// word is discarded and the whole word takes the unknown-token policy.
///
/// ## Cost
///
/// The backward scan constructs up to `n` candidates at each of `n` positions
/// of an `n`-char word, and each vocabulary lookup hashes its candidate; so the
/// worst case per word is `O(bytes^2)` lookups of `O(bytes)` work. Words over
/// `max_bytes_per_word` are never scanned, and `max_chars_per_token` caps the
/// inner scan; these two bounds are what keeps pathological input cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordpieceSegmenter {
    options: WordpieceOptions,
}

impl From<WordpieceOptions> for WordpieceSegmenter {
    fn from(options: WordpieceOptions) -> Self {
        Self::new(options)
    }
}

impl WordpieceSegmenter {
    /// Create a new segmenter.
    pub fn new(options: WordpieceOptions) -> Self {
        Self { options }
    }

    /// Get the segmentation options.
    pub fn options(&self) -> &WordpieceOptions {
        &self.options
    }

    /// Segment a word.
    ///
    /// ## Arguments
    /// * `vocab` - the piece vocabulary.
    /// * `word` - the word; an empty word yields no pieces.
    ///
    /// ## Returns
    /// The pieces, in order; their spans tile `0..word.len()`.
    pub fn segment<V: PieceVocab + ?Sized>(
        &self,
        vocab: &V,
        word: &str,
    ) -> Vec<WordPiece> {
        let mut pieces = Vec::new();
        self.segment_append(vocab, word, &mut pieces);
        pieces
    }

    /// Segment a UTF-8 encoded word.
    ///
    /// ## Returns
    /// The pieces; or [`PiecemealError::InvalidArgument`]
    /// if the bytes are not valid UTF-8.
    pub fn try_segment_bytes<V: PieceVocab + ?Sized>(
        &self,
        vocab: &V,
        word: &[u8],
    ) -> PMResult<Vec<WordPiece>> {
        let word = core::str::from_utf8(word).map_err(|err| {
            PiecemealError::InvalidArgument(format!("word is not valid UTF-8: {err}"))
        })?;
        Ok(self.segment(vocab, word))
    }

    /// Segment a word, appending to a target buffer.
    ///
    /// Pieces already in `pieces` are left untouched.
    ///
    /// ## Arguments
    /// * `vocab` - the piece vocabulary.
    /// * `word` - the word.
    /// * `pieces` - the target buffer.
    pub fn segment_append<V: PieceVocab + ?Sized>(
        &self,
        vocab: &V,
        word: &str,
        pieces: &mut Vec<WordPiece>,
    ) {
        if word.is_empty() {
            return;
        }

        if word.len() > self.options.max_bytes_per_word() {
            log::trace!(
                "word of {} bytes exceeds max_bytes_per_word ({})",
                word.len(),
                self.options.max_bytes_per_word()
            );
            self.append_unknown(word, pieces);
            return;
        }

        let mark = pieces.len();
        if !self.append_matches(vocab, word, pieces) {
            log::trace!("no segmentation for {word:?}");
            pieces.truncate(mark);
            self.append_unknown(word, pieces);
        }
    }

    /// Greedy matching; returns `false` at the first position without a match.
    fn append_matches<V: PieceVocab + ?Sized>(
        &self,
        vocab: &V,
        word: &str,
        pieces: &mut Vec<WordPiece>,
    ) -> bool {
        // Byte offset of every char start, plus the end of the word.
        let boundaries: Vec<usize> = word
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(core::iter::once(word.len()))
            .collect();
        let num_chars = boundaries.len() - 1;

        let suffix_indicator = self.options.suffix_indicator();
        let max_chars = self.options.max_chars_per_token();

        let mut candidate = String::with_capacity(suffix_indicator.len() + word.len());

        let mut cursor = 0;
        while cursor < num_chars {
            let start = boundaries[cursor];
            let mut end = match max_chars {
                Some(max_chars) => num_chars.min(cursor.saturating_add(max_chars.get())),
                None => num_chars,
            };

            candidate.clear();
            if cursor > 0 {
                candidate.push_str(suffix_indicator);
            }
            let prefix_len = candidate.len();
            candidate.push_str(&word[start..boundaries[end]]);

            // Shrink the candidate from the right, one char at a time.
            loop {
                if vocab.contains(&candidate) {
                    break;
                }
                end -= 1;
                if end == cursor {
                    return false;
                }
                candidate.truncate(prefix_len + boundaries[end] - start);
            }

            pieces.push(WordPiece::new(candidate.as_str(), start, boundaries[end]));
            cursor = end;
        }

        true
    }

    /// Apply the unknown-token policy to a whole word.
    fn append_unknown(
        &self,
        word: &str,
        pieces: &mut Vec<WordPiece>,
    ) {
        let unknown_token = self.options.unknown_token();

        if self.options.split_unknown_characters() {
            pieces.extend(word.char_indices().map(|(start, c)| {
                let limit = start + c.len_utf8();
                let piece = unknown_token.unwrap_or(&word[start..limit]);
                WordPiece::new(piece, start, limit)
            }));
        } else {
            pieces.push(WordPiece::new(
                unknown_token.unwrap_or(word).to_string(),
                0,
                word.len(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;
    use crate::vocab::PieceMapVocab;
    use crate::vocab::testing::build_test_vocab;

    fn pieces_of(pieces: &[WordPiece]) -> Vec<(&str, usize, usize)> {
        pieces
            .iter()
            .map(|p| (p.piece.as_str(), p.start, p.limit))
            .collect()
    }

    #[test]
    fn test_suffix_indicator() {
        let vocab = build_test_vocab::<u32>();
        let segmenter = WordpieceSegmenter::default();

        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "they're")),
            vec![("they", 0, 4), ("##'", 4, 5), ("##re", 5, 7)]
        );
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "greatest")),
            vec![("great", 0, 5), ("##est", 5, 8)]
        );
    }

    #[test]
    fn test_longest_match_first() {
        let vocab = build_test_vocab::<u32>();
        let segmenter = WordpieceSegmenter::default();

        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "unaffable")),
            vec![("unaffable", 0, 9)]
        );
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "unaffableity")),
            vec![("unaffable", 0, 9), ("##ity", 9, 12)]
        );
    }

    #[test]
    fn test_no_backtracking() {
        let vocab = PieceMapVocab::<u32>::from_pieces(["[UNK]", "ab", "abc", "##cd", "##d"]).unwrap();
        let segmenter = WordpieceSegmenter::default();

        // "abc" is preferred; "##d" then completes the word.
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "abcd")),
            vec![("abc", 0, 3), ("##d", 3, 4)]
        );

        let vocab = PieceMapVocab::<u32>::from_pieces(["[UNK]", "ab", "abc", "##cd"]).unwrap();
        // "abc" is accepted and never reconsidered; "##d" is missing.
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "abcd")),
            vec![("[UNK]", 0, 4)]
        );
    }

    #[test]
    fn test_unknown_word() {
        let vocab = build_test_vocab::<u32>();
        let segmenter = WordpieceSegmenter::default();

        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "qzx")),
            vec![("[UNK]", 0, 3)]
        );

        // Partial matches are discarded.
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "theyq")),
            vec![("[UNK]", 0, 5)]
        );

        // Every char but the last matches.
        let word = "a".to_string() + &"bc".repeat(4) + "€";
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, &word)),
            vec![("[UNK]", 0, 12)]
        );
    }

    #[test]
    fn test_unknown_literal() {
        let vocab = build_test_vocab::<u32>();
        let segmenter =
            WordpieceSegmenter::new(WordpieceOptions::default().with_unknown_token::<String>(None));

        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "theyq")),
            vec![("theyq", 0, 5)]
        );

        let segmenter = WordpieceSegmenter::new(
            WordpieceOptions::default()
                .with_unknown_token::<String>(None)
                .with_split_unknown_characters(true),
        );
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "aq€")),
            vec![("a", 0, 1), ("q", 1, 2), ("€", 2, 5)]
        );
    }

    #[test]
    fn test_split_unknown_characters() {
        let vocab = build_test_vocab::<u32>();
        let segmenter =
            WordpieceSegmenter::new(WordpieceOptions::default().with_split_unknown_characters(true));

        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "qé")),
            vec![("[UNK]", 0, 1), ("[UNK]", 1, 3)]
        );

        // Known words are unaffected.
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "abc")),
            vec![("a", 0, 1), ("##b", 1, 2), ("##c", 2, 3)]
        );
    }

    #[test]
    fn test_empty_word() {
        let vocab = build_test_vocab::<u32>();
        let segmenter = WordpieceSegmenter::new(WordpieceOptions::default().with_max_bytes_per_word(0));

        assert!(segmenter.segment(&vocab, "").is_empty());
    }

    #[test]
    fn test_max_bytes_per_word() {
        let vocab = build_test_vocab::<u32>();
        let segmenter = WordpieceSegmenter::new(WordpieceOptions::default().with_max_bytes_per_word(4));

        // Exactly at the limit: segmented.
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "they")),
            vec![("they", 0, 4)]
        );
        // One over: unknown, regardless of the vocabulary.
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "great")),
            vec![("[UNK]", 0, 5)]
        );

        let segmenter = WordpieceSegmenter::new(
            WordpieceOptions::default()
                .with_max_bytes_per_word(4)
                .with_split_unknown_characters(true),
        );
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "abcab")),
            vec![
                ("[UNK]", 0, 1),
                ("[UNK]", 1, 2),
                ("[UNK]", 2, 3),
                ("[UNK]", 3, 4),
                ("[UNK]", 4, 5)
            ]
        );
    }

    #[test]
    fn test_max_chars_per_token() {
        let vocab = build_test_vocab::<u32>();

        let segmenter = WordpieceSegmenter::new(WordpieceOptions::default().with_max_chars_per_token(5));
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "greatest")),
            vec![("great", 0, 5), ("##est", 5, 8)]
        );

        // "unaffable" is out of reach; fall back to shorter pieces.
        let segmenter = WordpieceSegmenter::new(WordpieceOptions::default().with_max_chars_per_token(4));
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "unaffable")),
            vec![("un", 0, 2), ("##aff", 2, 5), ("##able", 5, 9)]
        );

        let segmenter = WordpieceSegmenter::new(WordpieceOptions::default().with_max_chars_per_token(2));
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "they")),
            vec![("[UNK]", 0, 4)]
        );
    }

    #[test]
    fn test_multibyte_offsets() {
        let vocab = build_test_vocab::<u32>();
        let segmenter = WordpieceSegmenter::default();

        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "ééé")),
            vec![("éé", 0, 4), ("##é", 4, 6)]
        );
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "你好")),
            vec![("你", 0, 3), ("##好", 3, 6)]
        );
    }

    #[test]
    fn test_empty_suffix_indicator() {
        let vocab = PieceMapVocab::<u32>::from_pieces(["[UNK]", "they", "'", "re"]).unwrap();
        let segmenter = WordpieceSegmenter::new(
            WordpieceOptions::default()
                .with_suffix_indicator("")
                .with_max_chars_per_token(2),
        );

        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "they're")),
            vec![("[UNK]", 0, 7)]
        );

        let segmenter = WordpieceSegmenter::new(WordpieceOptions::default().with_suffix_indicator(""));
        assert_eq!(
            pieces_of(&segmenter.segment(&vocab, "they're")),
            vec![("they", 0, 4), ("'", 4, 5), ("re", 5, 7)]
        );
    }

    #[test]
    fn test_segment_append_and_bytes() {
        let vocab = build_test_vocab::<u32>();
        let segmenter = WordpieceSegmenter::default();

        let mut pieces = vec![WordPiece::new("the", 0, 3)];
        segmenter.segment_append(&vocab, "theyq", &mut pieces);
        assert_eq!(
            pieces_of(&pieces),
            vec![("the", 0, 3), ("[UNK]", 0, 5)]
        );

        assert_eq!(
            segmenter.try_segment_bytes(&vocab, "the".as_bytes()).unwrap(),
            vec![WordPiece::new("the", 0, 3)]
        );
        assert!(matches!(
            segmenter.try_segment_bytes(&vocab, &[0x74, 0xff]),
            Err(PiecemealError::InvalidArgument(_))
        ));
    }
}
