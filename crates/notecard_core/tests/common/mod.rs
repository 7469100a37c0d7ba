#![allow(dead_code)]

use notecard_core::{KvStore, MemoryKvStore, StorageError, StorageResult};
use rusqlite::Connection;

/// Memory slot store that counts writes and can be told to fail them.
#[derive(Default)]
pub struct ProbeKvStore {
    pub inner: MemoryKvStore,
    pub writes: usize,
    pub fail_writes: bool,
}

impl KvStore for ProbeKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::from(rusqlite::Error::InvalidQuery));
        }
        self.writes += 1;
        self.inner.set(key, value)
    }
}

pub fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
