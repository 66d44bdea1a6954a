use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

use crate::error::NotesResult;
use crate::note::{Note, NoteInput};
use crate::traits::NoteStore;

/// Default capacity of the snapshot broadcast channel.
pub const DEFAULT_FEED_CAPACITY: usize = 64;

/// One full view of a note collection, published after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSnapshot {
    /// Name of the collection the snapshot describes.
    pub collection: String,
    /// Change counter; one snapshot per mutation, starting at 1.
    pub seq: u64,
    /// Every note in the collection, newest first.
    pub notes: Vec<Note>,
}

/// A broadcast channel receiver for collection snapshots.
pub type SnapshotStream = broadcast::Receiver<NoteSnapshot>;

/// Store wrapper that publishes a full snapshot after every mutation.
///
/// Works like a remote-database change listener: subscribers get the
/// current contents up front and a fresh [`NoteSnapshot`] after each add
/// or remove, rather than individual change events.
pub struct NoteFeed<S> {
    store: S,
    collection: String,
    seq: AtomicU64,
    sender: broadcast::Sender<NoteSnapshot>,
}

impl<S: NoteStore> NoteFeed<S> {
    /// Wraps a store with the default channel capacity.
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self::with_capacity(store, collection, DEFAULT_FEED_CAPACITY)
    }

    /// Wraps a store with an explicit channel capacity.
    pub fn with_capacity(store: S, collection: impl Into<String>, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            store,
            collection: collection.into(),
            seq: AtomicU64::new(0),
            sender,
        }
    }

    /// Collection name this feed publishes under.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Sequence number of the most recent snapshot (0 before any change).
    pub fn seq(&self) -> u64 {
        self.seq.load(Ordering::SeqCst)
    }

    /// Number of live snapshot subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Reference to the wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Subscribes to the feed.
    ///
    /// Returns the current contents plus a stream of future snapshots. A
    /// mutation racing the subscription may appear in both.
    pub fn subscribe(&self) -> NotesResult<(NoteSnapshot, SnapshotStream)> {
        let stream = self.sender.subscribe();
        let snapshot = NoteSnapshot {
            collection: self.collection.clone(),
            seq: self.seq(),
            notes: self.store.list()?,
        };
        Ok((snapshot, stream))
    }

    /// Adds a note and publishes the resulting snapshot.
    pub fn add(&self, input: NoteInput) -> NotesResult<Note> {
        let note = self.store.add(input)?;
        self.refresh()?;
        debug!(id = %note.id, title = %note.title, "note added");
        Ok(note)
    }

    /// Removes a note; publishes a snapshot only when something changed.
    pub fn remove(&self, id: &Uuid) -> NotesResult<bool> {
        let removed = self.store.remove(id)?;
        if removed {
            self.refresh()?;
            debug!(%id, "note removed");
        }
        Ok(removed)
    }

    /// Current notes, newest first.
    pub fn list(&self) -> NotesResult<Vec<Note>> {
        self.store.list()
    }

    /// Builds the next snapshot and fans it out, bumping the sequence
    /// number. Runs after every mutation; it is also public so a caller
    /// that reloaded the underlying store can push the new state. A send
    /// failure means no live subscribers, which is not an error.
    pub fn refresh(&self) -> NotesResult<NoteSnapshot> {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = NoteSnapshot {
            collection: self.collection.clone(),
            seq,
            notes: self.store.list()?,
        };
        let _ = self.sender.send(snapshot.clone());
        Ok(snapshot)
    }
}

impl<S> fmt::Debug for NoteFeed<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteFeed")
            .field("collection", &self.collection)
            .field("seq", &self.seq.load(Ordering::SeqCst))
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}
