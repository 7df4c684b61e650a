use piecemeal::{
    TokenOutType,
    WordpieceOptions,
    wordpiece::{DEFAULT_MAX_BYTES_PER_WORD, DEFAULT_SUFFIX_INDICATOR, DEFAULT_UNKNOWN_TOKEN},
};

/// Wordpiece segmentation arg group.
#[derive(clap::Args, Debug)]
pub struct WordpieceArgs {
    /// Marker prepended to pieces which continue a word.
    #[arg(long, default_value = DEFAULT_SUFFIX_INDICATOR)]
    pub suffix_indicator: String,

    /// Longer words (in bytes) are unknown without matching.
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES_PER_WORD)]
    pub max_bytes_per_word: usize,

    /// Longest candidate piece, in chars; 0 is unbounded.
    #[arg(long, default_value_t = 0)]
    pub max_chars_per_token: usize,

    /// Replacement for unknown words.
    #[arg(long, default_value = DEFAULT_UNKNOWN_TOKEN)]
    pub unknown_token: String,

    /// Leave unknown text as is, rather than replacing it.
    #[arg(long, conflicts_with = "unknown_token")]
    pub no_unknown_token: bool,

    /// Replace unknown words character by character.
    #[arg(long)]
    pub split_unknown_characters: bool,

    /// Output format of tokens: "piece" or "id".
    #[arg(long, default_value = "piece")]
    pub out_type: TokenOutType,

    /// Segment words on the rayon thread pool.
    #[arg(long)]
    pub parallel: bool,
}

impl WordpieceArgs {
    /// Build the segmentation options.
    pub fn options(&self) -> WordpieceOptions {
        let unknown_token = (!self.no_unknown_token).then(|| self.unknown_token.clone());

        WordpieceOptions::default()
            .with_suffix_indicator(self.suffix_indicator.as_str())
            .with_max_bytes_per_word(self.max_bytes_per_word)
            .with_max_chars_per_token(self.max_chars_per_token)
            .with_unknown_token(unknown_token)
            .with_split_unknown_characters(self.split_unknown_characters)
            .with_token_out_type(self.out_type)
            .with_parallel(self.parallel)
    }
}
