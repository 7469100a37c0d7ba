mod common;

use common::schema_version;
use notecard_core::db::migrations::latest_version;
use notecard_core::db::{open_db, open_db_in_memory, DbError};
use notecard_core::{KvStore, SqliteKvStore};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_slot_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'kv_slots'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn reopening_database_keeps_slots_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notecard.db");

    {
        let mut store = SqliteKvStore::open(&path).unwrap();
        store.set("my_notes_v1", "[]").unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let store = SqliteKvStore::try_new(conn).unwrap();
    assert_eq!(store.get("my_notes_v1").unwrap().as_deref(), Some("[]"));
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}
