use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{NotesError, NotesResult};

/// Background color assigned when the input does not name one.
pub const DEFAULT_COLOR: &str = "#fef3c7";

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, minted when the note is created.
    pub id: Uuid,
    /// Title line shown in listings.
    pub title: String,
    /// Free-form body text.
    pub content: String,
    /// Display color as a CSS hex string.
    pub color: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time. Equals `created_at` until the note changes.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Mints a note from caller input.
    ///
    /// The title must contain at least one non-whitespace character. A
    /// missing or blank color falls back to [`DEFAULT_COLOR`]. Both
    /// timestamps are stamped with the same instant.
    pub fn create(input: NoteInput) -> NotesResult<Self> {
        if input.title.trim().is_empty() {
            return Err(NotesError::EmptyTitle);
        }
        let color = match input.color {
            Some(c) if !c.trim().is_empty() => c,
            _ => DEFAULT_COLOR.to_string(),
        };
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            color,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Caller-supplied fields for a new note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
    /// Title line; must not be blank.
    pub title: String,
    /// Free-form body text; may be empty.
    pub content: String,
    /// Optional display color. `None` or blank selects [`DEFAULT_COLOR`].
    pub color: Option<String>,
}

impl NoteInput {
    /// Input with the given title and content and no explicit color.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            color: None,
        }
    }

    /// Sets an explicit display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Orders notes newest-first by creation time, breaking ties by id so
/// every backend lists in the same order.
pub(crate) fn sort_newest_first(notes: &mut [Note]) {
    notes.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
