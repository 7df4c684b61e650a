#![allow(missing_docs)]

use divan::{Bencher, black_box, counter::BytesCount};
use piecemeal::{
    PieceMapVocab,
    RaggedVec,
    WordpieceOptions,
    WordpieceSegmenter,
    WordpieceTokenizer,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static SENTENCE: &str = "they're the greatest unaffable unaffability of \
    quick brown foxes jumping over lazy dogs while the weather is great";

fn build_vocab() -> PieceMapVocab<u32> {
    let mut pieces: Vec<String> = vec!["[PAD]".to_string(), "[UNK]".to_string()];
    for c in 'a'..='z' {
        pieces.push(c.to_string());
        pieces.push(format!("##{c}"));
    }
    for piece in [
        "un", "##aff", "##able", "##ity", "unaffable", "they", "##'", "##re", "the", "great",
        "##est", "quick", "brown", "fox", "##es", "jump", "##ing", "over", "lazy", "dog", "##s",
        "while", "weather", "is", "of",
    ] {
        pieces.push(piece.to_string());
    }
    PieceMapVocab::from_pieces(pieces).unwrap()
}

fn words(repeat: usize) -> Vec<String> {
    SENTENCE
        .split_whitespace()
        .cycle()
        .take(repeat * SENTENCE.split_whitespace().count())
        .map(str::to_string)
        .collect()
}

fn total_bytes(words: &[String]) -> usize {
    words.iter().map(String::len).sum()
}

mod segmenter {
    use super::*;

    #[divan::bench]
    fn english_words(bencher: Bencher) {
        let vocab = build_vocab();
        let words = words(100);
        let segmenter = WordpieceSegmenter::default();
        bencher
            .counter(BytesCount::new(total_bytes(&words)))
            .bench(|| {
                let mut pieces = Vec::new();
                for word in &words {
                    segmenter.segment_append(&vocab, black_box(word), &mut pieces);
                }
                pieces
            });
    }

    #[divan::bench(args = [0, 8])]
    fn long_unknown_word(
        bencher: Bencher,
        max_chars_per_token: usize,
    ) {
        let vocab = build_vocab();
        // Scans all the way to the trailing char, which is not in the vocabulary.
        let word = "abcdefghij".repeat(9) + "€";
        let segmenter = WordpieceSegmenter::new(
            WordpieceOptions::default().with_max_chars_per_token(max_chars_per_token),
        );
        bencher
            .counter(BytesCount::new(word.len()))
            .bench(|| segmenter.segment(&vocab, black_box(&word)));
    }
}

mod tokenizer {
    use super::*;

    #[divan::bench(args = [false, true])]
    fn batch(
        bencher: Bencher,
        parallel: bool,
    ) {
        let vocab = build_vocab();
        let batch = RaggedVec::from_flat_values(words(1000));
        let bytes = total_bytes(batch.flat_values());

        let tokenizer = WordpieceTokenizer::new(WordpieceOptions::default().with_parallel(parallel));
        bencher
            .counter(BytesCount::new(bytes))
            .bench(|| tokenizer.tokenize_with_offsets(&vocab, black_box(&batch)));
    }
}
