//! Core logic for the Notecard notes widget.
//! This crate is the single source of truth for note invariants.

pub mod config;
pub mod db;
pub mod html;
pub mod id;
pub mod logging;
pub mod model;
pub mod query;
pub mod render;
pub mod storage;
pub mod store;

pub use config::{ConfigError, NotecardConfig};
pub use html::{escape_html, unescape_html};
pub use id::{generate_id, new_id, IdStrategy};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId, NoteValidationError, DEFAULT_CATEGORY, DEFAULT_TITLE};
pub use query::{distinct_categories, visible, NoteQuery};
pub use render::{ElementId, NotesWidget, RenderedView, UiEvent};
pub use storage::{
    KvStore, MemoryKvStore, NoteStorage, SqliteKvStore, StorageError, StorageResult,
    DEFAULT_STORAGE_KEY,
};
pub use store::{NoteStore, NoteStoreError, NoteStoreResult};

/// Opens the configured SQLite slot store and loads the note collection.
pub fn open_store(config: &NotecardConfig) -> StorageResult<NoteStore<SqliteKvStore>> {
    let kv = SqliteKvStore::open(&config.db_path)?;
    let storage = NoteStorage::with_key(kv, config.storage_key.as_str());
    Ok(NoteStore::open(storage).with_id_strategy(config.id_strategy))
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
