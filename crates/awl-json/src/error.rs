//! Error types for the JSON text boundary.

/// Errors that can occur when handling raw JSON text.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The input was empty or contained only whitespace.
    #[error("input is empty")]
    Empty,

    /// The input is not valid JSON.
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// A value failed to serialize back to text.
    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Convenience alias for JSON results.
pub type JsonResult<T> = Result<T, JsonError>;
