//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Persist opaque byte values in the `kv_entries` table.
//! - Keep blocking SQLite calls off the async executor threads.
//!
//! # Invariants
//! - The connection is migrated before the store is constructed.
//! - At most one statement runs at a time; the connection sits behind a mutex.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::repo::kv_store::{KeyValueStore, KvError, KvResult};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Key-value store persisted to a device-local SQLite database.
#[derive(Clone)]
pub struct SqliteKvStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteKvStore {
    /// Wraps an already migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Opens the database file at `path`, applying migrations.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        open_db(path).map(Self::new)
    }

    pub fn open_in_memory() -> DbResult<Self> {
        open_db_in_memory().map(Self::new)
    }

    async fn run<T, F>(&self, op: F) -> KvResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| KvError::Backend("sqlite connection lock poisoned".to_string()))?;
            op(&guard).map_err(KvError::from)
        })
        .await
        .map_err(|err| KvError::Backend(format!("blocking sqlite task failed: {err}")))?
    }
}

#[async_trait]
impl KeyValueStore for SqliteKvStore {
    async fn get(&self, key: &str) -> KvResult<Option<Vec<u8>>> {
        let key = key.to_string();
        self.run(move |conn| {
            conn.query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()
        })
        .await
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> KvResult<()> {
        let key = key.to_string();
        self.run(move |conn| {
            conn.execute(
                "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = (strftime('%s', 'now') * 1000);",
                params![key, value],
            )
            .map(|_| ())
        })
        .await
    }

    async fn remove(&self, key: &str) -> KvResult<()> {
        let key = key.to_string();
        self.run(move |conn| {
            conn.execute("DELETE FROM kv_entries WHERE key = ?1;", [key])
                .map(|_| ())
        })
        .await
    }
}
