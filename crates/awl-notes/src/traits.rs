use uuid::Uuid;

use crate::error::NotesResult;
use crate::note::{Note, NoteInput};

/// Backend-agnostic interface to a note collection.
///
/// Implementations must guarantee:
/// - `add` mints the id and stamps both timestamps with one instant
/// - `list` returns notes newest-first by creation time
/// - `remove` is idempotent; removing an unknown id reports `false`
pub trait NoteStore: Send + Sync {
    /// Validates the input and stores a new note, returning the stored
    /// value with its minted id and timestamps.
    fn add(&self, input: NoteInput) -> NotesResult<Note>;

    /// Removes a note by id. Returns `true` if the note existed.
    fn remove(&self, id: &Uuid) -> NotesResult<bool>;

    /// Every note in the collection, newest first.
    fn list(&self) -> NotesResult<Vec<Note>>;

    /// Number of notes in the collection.
    fn len(&self) -> NotesResult<usize>;

    /// Returns `true` if the collection holds no notes.
    fn is_empty(&self) -> NotesResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Looks up a single note by id.
    fn get(&self, id: &Uuid) -> NotesResult<Option<Note>> {
        Ok(self.list()?.into_iter().find(|note| note.id == *id))
    }
}
