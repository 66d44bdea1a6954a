//! Error types for diff operations.

use thiserror::Error;

/// Errors that can occur while computing a diff.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// Structural comparison descended past the configured depth limit.
    #[error("value nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
