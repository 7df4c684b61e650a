//! # Error Types

use crate::alloc::string::String;

/// Errors from piecemeal operations.
#[derive(Debug, thiserror::Error)]
pub enum PiecemealError {
    /// Static configuration is unusable with the supplied vocabulary.
    ///
    /// These are fatal; retrying the same call will fail the same way.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed input shape or encoding.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Parse error (integers, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for piecemeal operations.
pub type PMResult<T> = core::result::Result<T, PiecemealError>;
