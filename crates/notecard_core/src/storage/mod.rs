//! Persistence boundary for the notes widget.
//!
//! # Responsibility
//! - Define the key-value slot contract (`KvStore`) and its backends.
//! - Mirror the whole note collection into one named slot (`NoteStorage`).
//!
//! # Invariants
//! - Every read/write of persisted notes goes through `NoteStorage`.
//! - A slot write always overwrites the full previous value.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod kv;
mod notes;

pub use kv::{KvStore, MemoryKvStore, SqliteKvStore};
pub use notes::{NoteStorage, DEFAULT_STORAGE_KEY};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for slot access and note serialization.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Connection is not migrated to the schema this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    Serialize(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::Serialize(err) => write!(f, "failed to serialize notes: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
