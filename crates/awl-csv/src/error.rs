//! Error types for CSV conversion.

use thiserror::Error;

/// Errors that can occur while converting between CSV and JSON.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// The input was empty or contained only whitespace.
    #[error("input is empty")]
    Empty,

    /// The JSON side of a conversion failed to parse.
    #[error("json error: {0}")]
    Json(#[from] awl_json::JsonError),

    /// CSV rows can only be produced from a JSON array.
    #[error("expected a JSON array of objects, got {kind}")]
    NotAnArray { kind: &'static str },

    /// The JSON array had no rows to take headers from.
    #[error("the array has no rows")]
    EmptyArray,

    /// An array element was not an object.
    #[error("row {index} is not an object, got {kind}")]
    RowNotObject { index: usize, kind: &'static str },
}

/// Convenience alias for CSV results.
pub type CsvResult<T> = Result<T, CsvError>;
