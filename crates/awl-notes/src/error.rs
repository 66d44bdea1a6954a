use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by note stores and feeds.
#[derive(Debug, Error)]
pub enum NotesError {
    /// The note title was empty or all whitespace.
    #[error("note title must not be empty")]
    EmptyTitle,

    /// Reading or writing the backing file failed.
    #[error("note store I/O: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not hold a valid note collection.
    #[error("note file {} is corrupt: {message}", .path.display())]
    Corrupt { path: PathBuf, message: String },

    /// Serializing the collection for persistence failed.
    #[error("note serialization: {0}")]
    Serialize(String),
}

/// Convenience alias for fallible note operations.
pub type NotesResult<T> = Result<T, NotesError>;
