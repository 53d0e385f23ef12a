//! Error types for whenwords operations.

use thiserror::Error;

/// Errors returned by the formatting and parsing operations.
///
/// The message carried by each variant is for humans only. Callers that need to
/// branch should match on the variant, not the text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WhenError {
    /// A timestamp could not be reduced to seconds since the epoch: malformed
    /// ISO text, a non-finite epoch value, or an unset primary timestamp.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Duration text matched neither grammar, or a duration to format was
    /// negative or non-finite.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, WhenError>;
