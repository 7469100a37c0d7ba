//! In-memory note collection mirrored to storage.
//!
//! # Responsibility
//! - Own the session's note collection, loaded once at open.
//! - Expose add (prepend), remove-by-id and full read.
//! - Flush the full collection to storage after every mutation.
//!
//! # Invariants
//! - Notes are stored newest-first by insertion, independent of display sort.
//! - Ids are unique within the collection.
//! - A rejected add performs no storage write.
//! - Memory and storage never diverge: a failed flush rolls the mutation back.

use crate::id::{generate_id, IdStrategy};
use crate::model::note::{Note, NoteValidationError};
use crate::query::distinct_categories;
use crate::storage::{KvStore, NoteStorage, StorageError};
use chrono::{DateTime, Utc};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NoteStoreResult<T> = Result<T, NoteStoreError>;

/// Errors surfaced by note store mutations.
#[derive(Debug)]
pub enum NoteStoreError {
    /// Content was blank after trimming; nothing was stored.
    EmptyContent,
    /// Built record failed validation; nothing was stored.
    Invalid(NoteValidationError),
    /// Flushing the collection failed; the mutation was rolled back.
    Storage(StorageError),
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note content must not be empty"),
            Self::Invalid(err) => write!(f, "invalid note: {err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyContent => None,
            Self::Invalid(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for NoteStoreError {
    fn from(value: NoteValidationError) -> Self {
        match value {
            NoteValidationError::EmptyContent => Self::EmptyContent,
            other => Self::Invalid(other),
        }
    }
}

impl From<StorageError> for NoteStoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Note collection facade over a [`NoteStorage`].
pub struct NoteStore<S: KvStore> {
    storage: NoteStorage<S>,
    notes: Vec<Note>,
    id_strategy: IdStrategy,
}

impl<S: KvStore> NoteStore<S> {
    /// Loads the persisted collection and takes ownership of `storage`.
    pub fn open(storage: NoteStorage<S>) -> Self {
        let notes = storage.load();
        info!(
            "event=store_open module=store status=ok count={} key={}",
            notes.len(),
            storage.key()
        );
        Self {
            storage,
            notes,
            id_strategy: IdStrategy::default(),
        }
    }

    /// Overrides the id strategy used for new notes.
    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    /// Creates a note stamped with the current time.
    pub fn add(&mut self, title: &str, category: &str, content: &str) -> NoteStoreResult<Note> {
        self.add_at(title, category, content, Utc::now())
    }

    /// Creates a note with an explicit creation time.
    ///
    /// # Errors
    /// - `EmptyContent` when `content` is blank; storage is not touched.
    /// - `Storage` when flushing fails; the collection is left unchanged.
    pub fn add_at(
        &mut self,
        title: &str,
        category: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> NoteStoreResult<Note> {
        if content.trim().is_empty() {
            info!("event=note_add module=store status=rejected reason=empty_content");
            return Err(NoteStoreError::EmptyContent);
        }

        let id = self.fresh_id();
        let note = Note::from_input(id, title, category, content, created_at)?;

        self.notes.insert(0, note.clone());
        if let Err(err) = self.storage.save(&self.notes) {
            self.notes.remove(0);
            error!(
                "event=note_add module=store status=error id={} error={err}",
                note.id
            );
            return Err(err.into());
        }

        info!(
            "event=note_add module=store status=ok id={} count={}",
            note.id,
            self.notes.len()
        );
        Ok(note)
    }

    /// Removes the note with `id`, if present, and flushes the collection.
    ///
    /// Removing an unknown id is a successful no-op.
    pub fn remove(&mut self, id: &str) -> NoteStoreResult<()> {
        let Some(index) = self.notes.iter().position(|note| note.id == id) else {
            info!("event=note_remove module=store status=noop id={id}");
            return Ok(());
        };

        let removed = self.notes.remove(index);
        if let Err(err) = self.storage.save(&self.notes) {
            self.notes.insert(index, removed);
            error!("event=note_remove module=store status=error id={id} error={err}");
            return Err(err.into());
        }

        info!(
            "event=note_remove module=store status=ok id={id} count={}",
            self.notes.len()
        );
        Ok(())
    }

    /// Full collection in insertion order (newest insert first).
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Distinct non-empty categories across all notes, sorted.
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.notes)
    }

    pub fn storage(&self) -> &NoteStorage<S> {
        &self.storage
    }

    pub fn into_storage(self) -> NoteStorage<S> {
        self.storage
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id(self.id_strategy);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
