//! Key-value adapter over the `collections` table.
//!
//! # Responsibility
//! - Load and save whole entity collections as JSON payloads.
//! - Keep SQL and serialization details inside the store boundary.
//!
//! # Invariants
//! - `load` never fails the caller: absent keys, unreadable rows and
//!   malformed payloads all degrade to an empty collection with a warn log.
//! - `save` replaces the full payload for a key in one statement.

use super::StoreResult;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Handle to the bootstrapped embedded store.
///
/// Constructed via [`super::open_store`] or [`super::open_store_in_memory`],
/// which guarantee migrations have been applied.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub(super) fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Loads the collection stored under `key`.
    ///
    /// Returns an empty sequence when the key is absent, the row cannot be
    /// read, or the payload does not decode as a sequence of `T`. Corrupt
    /// state is logged and dropped rather than failing startup.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let payload = match self.read_payload(key) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(
                    "event=collection_load module=store status=error key={key} error_code=store_read_failed error={err}"
                );
                return Vec::new();
            }
        };

        let Some(payload) = payload else {
            return Vec::new();
        };

        match serde_json::from_str(&payload) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "event=collection_load module=store status=error key={key} error_code=malformed_payload error={err}"
                );
                Vec::new()
            }
        }
    }

    /// Replaces the collection stored under `key` with `records`.
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) -> StoreResult<()> {
        let payload = serde_json::to_string(records)?;
        self.conn.execute(
            "INSERT INTO collections (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, payload],
        )?;
        Ok(())
    }

    fn read_payload(&self, key: &str) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM collections WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()
    }
}
