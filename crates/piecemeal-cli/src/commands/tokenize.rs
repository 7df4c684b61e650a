use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use piecemeal::{
    PieceMapVocab,
    RaggedVec,
    TokenBatch,
    TokenizedBatch,
    WordpieceTokenizer,
    vocab::io::load_vocab_txt_path,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    wordpiece_args::WordpieceArgs,
};

/// Args for the tokenize command.
#[derive(clap::Args, Debug)]
pub struct TokenizeArgs {
    /// The `vocab.txt` vocabulary; one piece per line.
    #[arg(long)]
    vocab: PathBuf,

    /// Print every token as `token@start:limit`.
    #[arg(long)]
    offsets: bool,

    #[command(flatten)]
    wordpiece: WordpieceArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl TokenizeArgs {
    /// Run the tokenize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab: PieceMapVocab<u32> = load_vocab_txt_path(&self.vocab)?;
        let tokenizer = WordpieceTokenizer::new(self.wordpiece.options());

        let words = read_rows(self.input.open_reader()?)?;
        log::info!(
            "tokenizing {} words on {} lines",
            words.flat_values().len(),
            words.len()
        );

        let result = tokenizer.tokenize_with_offsets(&vocab, &words)?;

        let mut writer = self.output.open_writer()?;
        write_rows(&mut writer, &result, self.offsets)?;
        writer.flush()?;

        Ok(())
    }
}

/// One batch row of whitespace-separated words per line.
fn read_rows<R: BufRead>(reader: R) -> std::io::Result<RaggedVec<String>> {
    let rows = reader
        .lines()
        .map(|line| Ok(line?.split_whitespace().map(str::to_string).collect::<Vec<_>>()))
        .collect::<std::io::Result<Vec<_>>>()?;
    Ok(RaggedVec::from_rows(rows))
}

/// One output line per row; words separated by ` | `, pieces by spaces.
fn write_rows(
    writer: &mut dyn Write,
    result: &TokenizedBatch<u32>,
    offsets: bool,
) -> std::io::Result<()> {
    let tokens: Vec<String> = match &result.tokens {
        TokenBatch::Pieces(pieces) => pieces.flat_values().to_vec(),
        TokenBatch::Ids(ids) => ids.flat_values().iter().map(u32::to_string).collect(),
    };
    let starts = result.starts.flat_values();
    let limits = result.limits.flat_values();

    let [row_splits, word_splits] = result.starts.nested_row_splits() else {
        return Err(std::io::Error::other("expected a rank 3 result"));
    };

    for row in row_splits.windows(2) {
        for word in row[0]..row[1] {
            if word > row[0] {
                write!(writer, " | ")?;
            }
            for piece in word_splits[word]..word_splits[word + 1] {
                if piece > word_splits[word] {
                    write!(writer, " ")?;
                }
                write!(writer, "{}", tokens[piece])?;
                if offsets {
                    write!(writer, "@{}:{}", starts[piece], limits[piece])?;
                }
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use clap::Parser;
    use piecemeal::{TokenOutType, WordpieceOptions};

    use super::*;
    use crate::{Args, commands::Commands};

    fn parse_tokenize_args(flags: &[&str]) -> clap::error::Result<TokenizeArgs> {
        let argv = ["piecemeal", "tokenize", "--vocab", "vocab.txt"]
            .iter()
            .chain(flags)
            .copied();
        let Commands::Tokenize(args) = Args::try_parse_from(argv)?.command;
        Ok(args)
    }

    fn vocab() -> PieceMapVocab<u32> {
        PieceMapVocab::from_pieces(["[UNK]", "they", "##'", "##re", "the", "great", "##est"])
            .unwrap()
    }

    fn render(
        input: &str,
        options: WordpieceOptions,
        offsets: bool,
    ) -> String {
        let words = read_rows(input.as_bytes()).unwrap();
        let result = WordpieceTokenizer::new(options)
            .tokenize_with_offsets(&vocab(), &words)
            .unwrap();

        let mut buf: Vec<u8> = Vec::new();
        write_rows(&mut buf, &result, offsets).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_pieces() {
        let options = WordpieceOptions::default().with_token_out_type(TokenOutType::Piece);
        assert_eq!(
            render("they're the  greatest\n\nqzx\n", options, false),
            "they ##' ##re | the | great ##est\n\n[UNK]\n"
        );
    }

    #[test]
    fn test_ids_with_offsets() {
        assert_eq!(
            render("they're greatest", WordpieceOptions::default(), true),
            "1@0:4 2@4:5 3@5:7 | 5@0:5 6@5:8\n"
        );
    }

    #[test]
    fn test_no_unknown_token() {
        let args = parse_tokenize_args(&["--no-unknown-token"]).unwrap();
        let options = args.wordpiece.options();
        assert_eq!(options.unknown_token(), None);

        assert_eq!(
            render("they're qzx", options, true),
            "they@0:4 ##'@4:5 ##re@5:7 | qzx@0:3\n"
        );

        assert!(parse_tokenize_args(&["--no-unknown-token", "--unknown-token", "[OOV]"]).is_err());
    }

    #[test]
    fn test_max_chars_per_token() {
        let args = parse_tokenize_args(&["--max-chars-per-token", "4"]).unwrap();
        let options = args.wordpiece.options();
        assert_eq!(options.max_chars_per_token(), NonZeroUsize::new(4));

        // "great" is five chars.
        assert_eq!(
            render("they're the greatest", options, false),
            "they ##' ##re | the | [UNK]\n"
        );

        let args = parse_tokenize_args(&[]).unwrap();
        assert_eq!(args.wordpiece.options().max_chars_per_token(), None);
    }
}
