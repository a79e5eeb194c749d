//! Note data model.
//!
//! A [`Note`] is a named, timestamped unit of text. Notes are identified by
//! an immutable [`NoteId`] but looked up by name from the command line.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name used when a note is created or saved without one.
pub const UNTITLED: &str = "untitled";

/// Name of the note seeded on first run.
pub const WELCOME_NAME: &str = "welcome";

const WELCOME_TEXT: &str = "Welcome to termpad

A minimalist notepad in the spirit of old computer terminals.

Press Ctrl+K to reach the command line, Esc to come back here.

Commands:
:save [name]    save this note
:open <name>    open a saved note
:list           show all notes
:new [name]     start a new note
:delete <name>  delete a note
:help           show all commands
:clear          clear the command output

Light markup is highlighted when the editor is not focused:
**bold text**
*italic text*
`code text`

Start typing to begin your note...";

/// Opaque, immutable note identifier.
///
/// Serialized as a bare string so stores written by older builds (short
/// random ids) still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generate a fresh identifier (UUID v4, simple hex form).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create an empty note with a fresh id, stamped `now`.
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: NoteId::generate(),
            name: name.into(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The note shown on first run. Not persisted until saved.
    pub fn welcome(now: DateTime<Utc>) -> Self {
        Self {
            content: WELCOME_TEXT.to_string(),
            ..Self::new(WELCOME_NAME, now)
        }
    }

    /// Replace the content and refresh `updated_at`.
    pub fn set_content(&mut self, content: impl Into<String>, now: DateTime<Utc>) {
        self.content = content.into();
        self.touch(now);
    }

    /// Rename and refresh `updated_at`.
    pub fn rename(&mut self, name: impl Into<String>, now: DateTime<Utc>) {
        self.name = name.into();
        self.touch(now);
    }

    /// Refresh `updated_at`, never letting it fall behind `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}
