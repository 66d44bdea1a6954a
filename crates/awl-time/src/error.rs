//! Error types for date operations.

use thiserror::Error;

/// Errors that can occur while interpreting time inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The input was not a unix timestamp, or fell outside the
    /// representable range.
    #[error("invalid timestamp {input:?}: expected unix seconds or milliseconds")]
    InvalidTimestamp { input: String },

    /// The input did not parse under any accepted date format.
    #[error("invalid date {input:?}: try RFC 3339, YYYY-MM-DD HH:MM:SS, or YYYY-MM-DD")]
    InvalidDate { input: String },
}

/// Convenience alias for time results.
pub type TimeResult<T> = Result<T, TimeError>;
