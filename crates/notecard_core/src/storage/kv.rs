//! Key-value slot backends.
//!
//! # Responsibility
//! - Provide a synchronous string slot store, the analogue of browser
//!   `localStorage`.
//! - Keep SQL details out of the note adapter.
//!
//! # Invariants
//! - `set` fully replaces any previous value for the key.
//! - `SqliteKvStore` only accepts connections migrated to the latest schema.

use super::{StorageError, StorageResult};
use crate::db::migrations::latest_version;
use crate::db::open_db;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;

/// Synchronous named-slot string store.
pub trait KvStore {
    /// Reads one slot; `None` when the key was never written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Writes one slot, overwriting prior content.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// SQLite-backed slot store over the `kv_slots` table.
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Opens (or creates) a database file and wraps it.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let conn = open_db(path)?;
        Self::try_new(conn)
    }

    /// Wraps an already migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest known migration.
    pub fn try_new(conn: Connection) -> StorageResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(StorageError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }

    /// Returns the underlying connection for diagnostics and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at)
             VALUES (?1, ?2, CAST(strftime('%s', 'now') AS INTEGER) * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local slot store. Contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    slots: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
