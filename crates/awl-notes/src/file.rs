use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{NotesError, NotesResult};
use crate::note::{sort_newest_first, Note, NoteInput};
use crate::traits::NoteStore;

/// Note store persisted as a single JSON document.
///
/// The whole collection is loaded at open and the file is rewritten after
/// every mutation, so on disk it always holds a complete, well-formed
/// snapshot. An absent or empty file opens as an empty collection.
pub struct JsonFileNoteStore {
    path: PathBuf,
    notes: RwLock<HashMap<Uuid, Note>>,
}

impl JsonFileNoteStore {
    /// Opens (or initializes) the store backed by the given file.
    pub fn open(path: impl AsRef<Path>) -> NotesResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let notes = if path.exists() {
            Self::load(&path)?
        } else {
            HashMap::new()
        };

        info!(path = %path.display(), count = notes.len(), "note store opened");

        Ok(Self {
            path,
            notes: RwLock::new(notes),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-reads the backing file, replacing the in-memory collection.
    ///
    /// Returns `true` when the reload changed the collection; lets a
    /// long-lived process pick up writes made by other processes. A file
    /// that disappeared reloads as empty.
    pub fn reload(&self) -> NotesResult<bool> {
        let fresh = if self.path.exists() {
            Self::load(&self.path)?
        } else {
            HashMap::new()
        };
        let mut notes = self.notes.write().expect("note lock poisoned");
        let changed = *notes != fresh;
        *notes = fresh;
        if changed {
            debug!(path = %self.path.display(), count = notes.len(), "note store reloaded");
        }
        Ok(changed)
    }

    fn load(path: &Path) -> NotesResult<HashMap<Uuid, Note>> {
        let text = fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Ok(HashMap::new());
        }
        let stored: Vec<Note> = serde_json::from_str(&text).map_err(|e| NotesError::Corrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(stored.into_iter().map(|note| (note.id, note)).collect())
    }

    /// Rewrites the backing file from the given map, newest note first.
    /// The caller must hold the write lock so rewrites cannot interleave.
    fn persist(&self, notes: &HashMap<Uuid, Note>) -> NotesResult<()> {
        let mut all: Vec<Note> = notes.values().cloned().collect();
        sort_newest_first(&mut all);
        let body = serde_json::to_vec_pretty(&all)
            .map_err(|e| NotesError::Serialize(e.to_string()))?;
        fs::write(&self.path, body)?;

        debug!(path = %self.path.display(), count = all.len(), "note store persisted");
        Ok(())
    }
}

impl fmt::Debug for JsonFileNoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.notes.read().expect("note lock poisoned").len();
        f.debug_struct("JsonFileNoteStore")
            .field("path", &self.path)
            .field("note_count", &count)
            .finish()
    }
}

impl NoteStore for JsonFileNoteStore {
    fn add(&self, input: NoteInput) -> NotesResult<Note> {
        let note = Note::create(input)?;
        let mut notes = self.notes.write().expect("note lock poisoned");
        notes.insert(note.id, note.clone());
        if let Err(e) = self.persist(&notes) {
            // Keep memory in step with the file when the rewrite fails.
            notes.remove(&note.id);
            return Err(e);
        }
        Ok(note)
    }

    fn remove(&self, id: &Uuid) -> NotesResult<bool> {
        let mut notes = self.notes.write().expect("note lock poisoned");
        match notes.remove(id) {
            Some(note) => {
                if let Err(e) = self.persist(&notes) {
                    notes.insert(note.id, note);
                    return Err(e);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn list(&self) -> NotesResult<Vec<Note>> {
        let mut notes: Vec<Note> = self
            .notes
            .read()
            .expect("note lock poisoned")
            .values()
            .cloned()
            .collect();
        sort_newest_first(&mut notes);
        Ok(notes)
    }

    fn len(&self) -> NotesResult<usize> {
        Ok(self.notes.read().expect("note lock poisoned").len())
    }
}
