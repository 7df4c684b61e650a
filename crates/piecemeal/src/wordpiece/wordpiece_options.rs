//! Wordpiece Options
//!
//! Options for building a [`super::WordpieceSegmenter`]
//! and a [`crate::WordpieceTokenizer`].

use core::{fmt, num::NonZeroUsize, str::FromStr};

use crate::alloc::format;
use crate::alloc::string::{String, ToString};
use crate::errors::PiecemealError;

/// The default continuation marker.
pub const DEFAULT_SUFFIX_INDICATOR: &str = "##";

/// The default word length limit, in bytes.
pub const DEFAULT_MAX_BYTES_PER_WORD: usize = 100;

/// The default unknown token.
pub const DEFAULT_UNKNOWN_TOKEN: &str = "[UNK]";

/// Selects the token representation of tokenizer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenOutType {
    /// Piece strings.
    Piece,

    /// Vocabulary ids.
    #[default]
    Id,
}

impl fmt::Display for TokenOutType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(match self {
            TokenOutType::Piece => "piece",
            TokenOutType::Id => "id",
        })
    }
}

impl FromStr for TokenOutType {
    type Err = PiecemealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "piece" | "pieces" | "string" => Ok(TokenOutType::Piece),
            "id" | "ids" | "int" => Ok(TokenOutType::Id),
            _ => Err(PiecemealError::Parse(format!(
                "unknown token output type {s:?}; expected \"piece\" or \"id\""
            ))),
        }
    }
}

/// Options for configuring wordpiece segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordpieceOptions {
    /// The marker prepended to pieces which continue a word.
    ///
    /// An empty indicator is a zero-length prefix:
    /// continuation pieces are looked up as bare text.
    pub suffix_indicator: String,

    /// Words longer than this many bytes are not matched at all;
    /// they take the unknown-token policy directly.
    pub max_bytes_per_word: usize,

    /// The longest candidate piece, in chars, excluding the suffix indicator.
    ///
    /// `None` is unbounded. This bounds matching cost for long words;
    /// it should be at least the longest piece in the vocabulary.
    pub max_chars_per_token: Option<NonZeroUsize>,

    /// The token representation of tokenizer output.
    pub token_out_type: TokenOutType,

    /// The replacement for unknown words (or characters).
    ///
    /// `None` (or empty) leaves unknown text as is.
    pub unknown_token: Option<String>,

    /// Replace each character of an unknown word, rather than the whole word.
    pub split_unknown_characters: bool,

    /// Should batches be segmented in parallel?
    ///
    /// Only honored with the "rayon" feature.
    pub parallel: bool,
}

impl Default for WordpieceOptions {
    fn default() -> Self {
        Self {
            suffix_indicator: DEFAULT_SUFFIX_INDICATOR.to_string(),
            max_bytes_per_word: DEFAULT_MAX_BYTES_PER_WORD,
            max_chars_per_token: None,
            token_out_type: TokenOutType::default(),
            unknown_token: Some(DEFAULT_UNKNOWN_TOKEN.to_string()),
            split_unknown_characters: false,
            parallel: false,
        }
    }
}

impl WordpieceOptions {
    /// Get the suffix indicator.
    pub fn suffix_indicator(&self) -> &str {
        &self.suffix_indicator
    }

    /// Set the suffix indicator.
    pub fn set_suffix_indicator<S: Into<String>>(
        &mut self,
        suffix_indicator: S,
    ) {
        self.suffix_indicator = suffix_indicator.into();
    }

    /// Set the suffix indicator and return the options.
    pub fn with_suffix_indicator<S: Into<String>>(
        mut self,
        suffix_indicator: S,
    ) -> Self {
        self.set_suffix_indicator(suffix_indicator);
        self
    }

    /// Get the word length limit, in bytes.
    pub fn max_bytes_per_word(&self) -> usize {
        self.max_bytes_per_word
    }

    /// Set the word length limit, in bytes.
    pub fn set_max_bytes_per_word(
        &mut self,
        max_bytes_per_word: usize,
    ) {
        self.max_bytes_per_word = max_bytes_per_word;
    }

    /// Set the word length limit and return the options.
    pub fn with_max_bytes_per_word(
        mut self,
        max_bytes_per_word: usize,
    ) -> Self {
        self.set_max_bytes_per_word(max_bytes_per_word);
        self
    }

    /// Get the candidate piece length limit, in chars.
    pub fn max_chars_per_token(&self) -> Option<NonZeroUsize> {
        self.max_chars_per_token
    }

    /// Set the candidate piece length limit, in chars.
    ///
    /// `0` is unbounded.
    pub fn set_max_chars_per_token(
        &mut self,
        max_chars_per_token: usize,
    ) {
        self.max_chars_per_token = NonZeroUsize::new(max_chars_per_token);
    }

    /// Set the candidate piece length limit and return the options.
    pub fn with_max_chars_per_token(
        mut self,
        max_chars_per_token: usize,
    ) -> Self {
        self.set_max_chars_per_token(max_chars_per_token);
        self
    }

    /// Get the token output type.
    pub fn token_out_type(&self) -> TokenOutType {
        self.token_out_type
    }

    /// Set the token output type.
    pub fn set_token_out_type(
        &mut self,
        token_out_type: TokenOutType,
    ) {
        self.token_out_type = token_out_type;
    }

    /// Set the token output type and return the options.
    pub fn with_token_out_type(
        mut self,
        token_out_type: TokenOutType,
    ) -> Self {
        self.set_token_out_type(token_out_type);
        self
    }

    /// Get the effective unknown token.
    ///
    /// An empty configured token is reported as `None`.
    pub fn unknown_token(&self) -> Option<&str> {
        self.unknown_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }

    /// Set the unknown token.
    pub fn set_unknown_token<S: Into<String>>(
        &mut self,
        unknown_token: Option<S>,
    ) {
        self.unknown_token = unknown_token.map(Into::into);
    }

    /// Set the unknown token and return the options.
    pub fn with_unknown_token<S: Into<String>>(
        mut self,
        unknown_token: Option<S>,
    ) -> Self {
        self.set_unknown_token(unknown_token);
        self
    }

    /// Get whether unknown words are replaced per character.
    pub fn split_unknown_characters(&self) -> bool {
        self.split_unknown_characters
    }

    /// Set whether unknown words are replaced per character.
    pub fn set_split_unknown_characters(
        &mut self,
        split_unknown_characters: bool,
    ) {
        self.split_unknown_characters = split_unknown_characters;
    }

    /// Set whether unknown words are replaced per character
    /// and return the options.
    pub fn with_split_unknown_characters(
        mut self,
        split_unknown_characters: bool,
    ) -> Self {
        self.set_split_unknown_characters(split_unknown_characters);
        self
    }

    /// Get whether batches are segmented in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Set whether batches are segmented in parallel.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Set whether batches are segmented in parallel
    /// and return the options.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WordpieceOptions::default();
        assert_eq!(options.suffix_indicator(), "##");
        assert_eq!(options.max_bytes_per_word(), 100);
        assert_eq!(options.max_chars_per_token(), None);
        assert_eq!(options.token_out_type(), TokenOutType::Id);
        assert_eq!(options.unknown_token(), Some("[UNK]"));
        assert!(!options.split_unknown_characters());
        assert!(!options.parallel());
    }

    #[test]
    fn test_builders() {
        let options = WordpieceOptions::default()
            .with_suffix_indicator("@@")
            .with_max_bytes_per_word(12)
            .with_max_chars_per_token(4)
            .with_token_out_type(TokenOutType::Piece)
            .with_unknown_token(Some("<unk>"))
            .with_split_unknown_characters(true)
            .with_parallel(true);

        assert_eq!(options.suffix_indicator(), "@@");
        assert_eq!(options.max_bytes_per_word(), 12);
        assert_eq!(options.max_chars_per_token(), NonZeroUsize::new(4));
        assert_eq!(options.token_out_type(), TokenOutType::Piece);
        assert_eq!(options.unknown_token(), Some("<unk>"));
        assert!(options.split_unknown_characters());
        assert!(options.parallel());

        let options = options
            .with_max_chars_per_token(0)
            .with_unknown_token(Some(""));
        assert_eq!(options.max_chars_per_token(), None);
        assert_eq!(options.unknown_token(), None);

        let options = options.with_unknown_token::<String>(None);
        assert_eq!(options.unknown_token(), None);
    }

    #[test]
    fn test_token_out_type_parse() {
        assert_eq!("piece".parse::<TokenOutType>().unwrap(), TokenOutType::Piece);
        assert_eq!("IDS".parse::<TokenOutType>().unwrap(), TokenOutType::Id);
        assert_eq!(TokenOutType::Id.to_string(), "id");
        assert!(matches!(
            "bytes".parse::<TokenOutType>(),
            Err(PiecemealError::Parse(_))
        ));
    }
}
