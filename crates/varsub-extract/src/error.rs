//! Error types for the extraction crate.

use thiserror::Error;

/// Errors that can occur when compiling a delimiter pair.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The start marker is empty.
    #[error("missing start delimiter")]
    MissingStartDelimiter,

    /// The end marker is empty.
    #[error("missing end delimiter")]
    MissingEndDelimiter,

    /// The derived pattern failed to compile.
    #[error("invalid token pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
