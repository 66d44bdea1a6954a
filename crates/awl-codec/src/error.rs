//! Error types for codec operations.

use thiserror::Error;

/// Errors that can occur while decoding.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input was empty or contained only whitespace.
    #[error("input is empty")]
    Empty,

    /// The input is not valid Base64.
    #[error("invalid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The decoded bytes are not valid UTF-8 text.
    #[error("decoded bytes are not valid UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}

/// Convenience alias for codec results.
pub type CodecResult<T> = Result<T, CodecError>;
