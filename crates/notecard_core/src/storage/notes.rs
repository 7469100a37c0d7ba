//! Note list adapter over one key-value slot.
//!
//! # Responsibility
//! - Serialize the full note collection into a single JSON array slot.
//! - Load tolerantly: absent or corrupt data reads as an empty collection.
//!
//! # Invariants
//! - `load` never fails; decode problems are logged and swallowed.
//! - Loaded collections contain only valid notes with unique ids.
//! - `save` overwrites the slot with the complete collection.

use super::{KvStore, StorageResult};
use crate::model::note::Note;
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashSet;

/// Slot key used when no other key is configured.
pub const DEFAULT_STORAGE_KEY: &str = "my_notes_v1";

/// Storage adapter binding a [`KvStore`] to one note slot.
pub struct NoteStorage<S: KvStore> {
    store: S,
    key: String,
}

impl<S: KvStore> NoteStorage<S> {
    /// Binds `store` to [`DEFAULT_STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Reads the slot and decodes the note list.
    ///
    /// Returns an empty list when the slot is absent, unreadable, or not a
    /// JSON array. Array entries that are not valid notes, or repeat an
    /// earlier id, are dropped.
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=notes_load module=storage status=empty reason=absent");
                return Vec::new();
            }
            Err(err) => {
                warn!("event=notes_load module=storage status=error reason=read_failed error={err}");
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(Value::Null) => return Vec::new(),
            Ok(_) => {
                warn!("event=notes_load module=storage status=error reason=not_an_array");
                return Vec::new();
            }
            Err(err) => {
                warn!("event=notes_load module=storage status=error reason=parse_failed error={err}");
                return Vec::new();
            }
        };

        let total = entries.len();
        let mut seen = HashSet::new();
        let notes: Vec<Note> = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Note>(entry) {
                Ok(note) => Some(note),
                Err(err) => {
                    warn!("event=notes_load module=storage status=skip reason=invalid_entry error={err}");
                    None
                }
            })
            .filter(|note| {
                let fresh = seen.insert(note.id.clone());
                if !fresh {
                    warn!(
                        "event=notes_load module=storage status=skip reason=duplicate_id id={}",
                        note.id
                    );
                }
                fresh
            })
            .collect();

        debug!(
            "event=notes_load module=storage status=ok count={} dropped={}",
            notes.len(),
            total - notes.len()
        );
        notes
    }

    /// Serializes `notes` and overwrites the slot.
    pub fn save(&mut self, notes: &[Note]) -> StorageResult<()> {
        let payload = serde_json::to_string(notes)?;
        self.store.set(&self.key, &payload)?;
        debug!(
            "event=notes_save module=storage status=ok count={} bytes={}",
            notes.len(),
            payload.len()
        );
        Ok(())
    }
}
