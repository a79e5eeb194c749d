//! Persistence-backed, ordered collection of saved notes.
//!
//! Lookups by name resolve to the *first* note with that name in sequence
//! order. Names are not enforced unique, so later duplicates are only
//! reachable by id.

use serde_json::Value;

use crate::note::Note;
use crate::storage::{BlobStore, STORAGE_KEY, StorageError};

#[derive(Debug)]
pub struct NoteRepository {
    store: Box<dyn BlobStore>,
    notes: Vec<Note>,
}

impl NoteRepository {
    /// Load notes from `store`.
    ///
    /// Never fails: an unreadable or malformed blob yields an empty
    /// collection, and individual malformed entries are dropped. Both are
    /// logged.
    pub fn load(store: impl BlobStore + 'static) -> Self {
        Self::load_boxed(Box::new(store))
    }

    pub fn load_boxed(store: Box<dyn BlobStore>) -> Self {
        let notes = match store.get(STORAGE_KEY) {
            Ok(Some(blob)) => decode_notes(&blob),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load notes from storage");
                Vec::new()
            }
        };
        tracing::debug!(count = notes.len(), "notes loaded");
        Self { store, notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Swap in a new list and write it through to storage.
    ///
    /// A failed write is logged; the in-memory list is updated regardless
    /// and stays authoritative for the rest of the session.
    pub fn replace(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        if let Err(err) = self.persist() {
            tracing::warn!(error = %err, "failed to save notes to storage");
        }
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let blob = encode_notes(&self.notes)?;
        self.store.set(STORAGE_KEY, &blob)
    }

    pub fn store(&self) -> &dyn BlobStore {
        self.store.as_ref()
    }

    pub fn into_store(self) -> Box<dyn BlobStore> {
        self.store
    }
}

/// Index of the first note named `name`, in sequence order.
///
/// Every by-name command (`open`, `delete`, overwriting `save`) resolves
/// through here.
pub fn position_by_name(notes: &[Note], name: &str) -> Option<usize> {
    notes.iter().position(|note| note.name == name)
}

/// Serialize notes into the stored blob format (a JSON array).
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_notes(notes: &[Note]) -> Result<String, serde_json::Error> {
    serde_json::to_string(notes)
}

/// Parse a stored blob, keeping every entry that deserializes cleanly.
pub fn decode_notes(blob: &str) -> Vec<Note> {
    let entries = match serde_json::from_str::<Value>(blob) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            tracing::warn!(kind = value_kind(&other), "stored notes are not a list; ignoring");
            return Vec::new();
        }
        Err(err) => {
            tracing::warn!(error = %err, "stored notes are not valid JSON; ignoring");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Note>(entry) {
            Ok(note) => Some(note),
            Err(err) => {
                tracing::warn!(index, error = %err, "dropping malformed stored note");
                None
            }
        })
        .collect()
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::{TimeZone, Utc};

    fn note(name: &str, content: &str) -> Note {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let mut note = Note::new(name, now);
        note.content = content.to_string();
        note
    }

    #[test]
    fn test_load_empty_store() {
        let repo = NoteRepository::load(MemoryStore::new());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_load_garbage_yields_empty() {
        let store = MemoryStore::new().with_blob(STORAGE_KEY, "{not json");
        assert!(NoteRepository::load(store).is_empty());
    }

    #[test]
    fn test_load_non_array_yields_empty() {
        let store = MemoryStore::new().with_blob(STORAGE_KEY, r#"{"name":"a"}"#);
        assert!(NoteRepository::load(store).is_empty());
    }

    #[test]
    fn test_load_drops_only_malformed_entries() {
        let good = serde_json::to_string(&note("good", "kept")).unwrap();
        let blob = format!(
            r#"[{good}, {{"id":"x","name":"bad","content":"","createdAt":"yesterday","updatedAt":"today"}}]"#
        );
        let repo = NoteRepository::load(MemoryStore::new().with_blob(STORAGE_KEY, blob));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.notes()[0].name, "good");
    }

    #[test]
    fn test_replace_then_load_round_trips() {
        let mut repo = NoteRepository::load(MemoryStore::new());
        let mut first = note("a", "alpha");
        first.updated_at = Utc.timestamp_millis_opt(1_714_554_000_123).unwrap();
        let notes = vec![first, note("b", "beta")];
        repo.replace(notes.clone());

        let reloaded = NoteRepository::load_boxed(repo.into_store());
        assert_eq!(reloaded.notes(), notes.as_slice());
    }

    #[test]
    fn test_replace_keeps_memory_state_when_write_fails() {
        let mut repo = NoteRepository::load(MemoryStore::new().failing_writes());
        repo.replace(vec![note("a", "alpha")]);
        assert_eq!(repo.len(), 1);
        assert!(repo.store().get(STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_lookup_resolves_first_match() {
        let notes = vec![note("other", ""), note("dup", "first"), note("dup", "second")];
        assert_eq!(position_by_name(&notes, "dup"), Some(1));
        assert_eq!(position_by_name(&notes, "nope"), None);
    }
}
