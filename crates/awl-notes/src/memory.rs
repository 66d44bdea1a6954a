use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use uuid::Uuid;

use crate::error::NotesResult;
use crate::note::{sort_newest_first, Note, NoteInput};
use crate::traits::NoteStore;

/// In-memory note store backed by a `RwLock`-guarded map.
///
/// Contents are lost on drop; intended for tests and ephemeral sessions.
pub struct MemoryNoteStore {
    notes: RwLock<HashMap<Uuid, Note>>,
}

impl MemoryNoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            notes: RwLock::new(HashMap::new()),
        }
    }

    /// Removes every note.
    pub fn clear(&self) {
        self.notes.write().expect("note lock poisoned").clear();
    }
}

impl Default for MemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryNoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.notes.read().expect("note lock poisoned").len();
        f.debug_struct("MemoryNoteStore")
            .field("note_count", &count)
            .finish()
    }
}

impl NoteStore for MemoryNoteStore {
    fn add(&self, input: NoteInput) -> NotesResult<Note> {
        let note = Note::create(input)?;
        self.notes
            .write()
            .expect("note lock poisoned")
            .insert(note.id, note.clone());
        Ok(note)
    }

    fn remove(&self, id: &Uuid) -> NotesResult<bool> {
        Ok(self
            .notes
            .write()
            .expect("note lock poisoned")
            .remove(id)
            .is_some())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;
    use crate::note::DEFAULT_COLOR;
    use chrono::DateTime;

    fn input(title: &str) -> NoteInput {
        NoteInput::new(title, "body")
    }

    fn note_at(secs: i64) -> Note {
        let at = DateTime::from_timestamp(secs, 0).unwrap();
        Note {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            content: String::new(),
            color: DEFAULT_COLOR.to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    // ------- Adding -------

    #[test]
    fn add_returns_the_stored_note() {
        let store = MemoryNoteStore::new();
        let note = store.add(input("groceries")).unwrap();

        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.get(&note.id).unwrap(), Some(note));
    }

    #[test]
    fn add_rejects_blank_titles() {
        let store = MemoryNoteStore::new();
        let err = store.add(input("   ")).unwrap_err();

        assert!(matches!(err, NotesError::EmptyTitle));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn add_fills_in_the_default_color() {
        let store = MemoryNoteStore::new();
        let note = store.add(input("t")).unwrap();
        assert_eq!(note.color, DEFAULT_COLOR);
    }

    #[test]
    fn add_keeps_an_explicit_color() {
        let store = MemoryNoteStore::new();
        let note = store.add(input("t").with_color("#a5f3fc")).unwrap();
        assert_eq!(note.color, "#a5f3fc");
    }

    // ------- Removing -------

    #[test]
    fn remove_deletes_an_existing_note() {
        let store = MemoryNoteStore::new();
        let note = store.add(input("t")).unwrap();

        assert!(store.remove(&note.id).unwrap());
        assert!(store.is_empty().unwrap());
        assert_eq!(store.get(&note.id).unwrap(), None);
    }

    #[test]
    fn remove_unknown_id_reports_false() {
        let store = MemoryNoteStore::new();
        assert!(!store.remove(&Uuid::new_v4()).unwrap());
    }

    #[test]
    fn remove_is_idempotent() {
        let store = MemoryNoteStore::new();
        let note = store.add(input("t")).unwrap();

        assert!(store.remove(&note.id).unwrap());
        assert!(!store.remove(&note.id).unwrap());
    }

    // ------- Listing -------

    #[test]
    fn list_is_newest_first() {
        // Inserted with fixed timestamps so the order does not depend on
        // wall-clock resolution.
        let store = MemoryNoteStore::new();
        let old = note_at(1_000);
        let mid = note_at(2_000);
        let new = note_at(3_000);
        for n in [&mid, &old, &new] {
            store.notes.write().unwrap().insert(n.id, n.clone());
        }

        let listed = store.list().unwrap();
        assert_eq!(listed, vec![new, mid, old]);
    }

    #[test]
    fn equal_timestamps_break_ties_by_id() {
        let store = MemoryNoteStore::new();
        for n in [note_at(5_000), note_at(5_000)] {
            store.notes.write().unwrap().insert(n.id, n);
        }

        let listed = store.list().unwrap();
        assert!(listed[0].id < listed[1].id);
    }

    #[test]
    fn clear_empties_the_store() {
        let store = MemoryNoteStore::new();
        store.add(input("a")).unwrap();
        store.add(input("b")).unwrap();

        store.clear();
        assert!(store.is_empty().unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn debug_reports_note_count() {
        let store = MemoryNoteStore::new();
        store.add(input("t")).unwrap();
        assert_eq!(format!("{store:?}"), "MemoryNoteStore { note_count: 1 }");
    }

    // ------- Concurrency -------

    #[test]
    fn concurrent_adds_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemoryNoteStore::new());
        let mut handles = Vec::new();
        for t in 0..4 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                for i in 0..25 {
                    store.add(input(&format!("note {t}-{i}"))).unwrap();
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(store.len().unwrap(), 100);
    }
}
