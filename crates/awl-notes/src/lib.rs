//! Note storage and realtime change feeds for Awl.
//!
//! Notes are small colored text records with creation and modification
//! timestamps. Two backends implement the same [`NoteStore`] interface:
//! [`MemoryNoteStore`] for tests and ephemeral sessions, and
//! [`JsonFileNoteStore`], which persists the collection as a single JSON
//! document. [`NoteFeed`] wraps any store and broadcasts a full
//! [`NoteSnapshot`] to subscribers after every change.
//!
//! # Key Types
//!
//! - [`Note`] / [`NoteInput`]: stored record and creation input
//! - [`NoteStore`]: backend-agnostic collection interface
//! - [`MemoryNoteStore`] / [`JsonFileNoteStore`]: the two backends
//! - [`NoteFeed`] / [`NoteSnapshot`]: realtime snapshot broadcasting
//! - [`NotesError`]: error type for all note operations

pub mod error;
pub mod feed;
pub mod file;
pub mod memory;
pub mod note;
pub mod traits;

pub use error::{NotesError, NotesResult};
pub use feed::{NoteFeed, NoteSnapshot, SnapshotStream, DEFAULT_FEED_CAPACITY};
pub use file::JsonFileNoteStore;
pub use memory::MemoryNoteStore;
pub use note::{Note, NoteInput, DEFAULT_COLOR};
pub use traits::NoteStore;
