//! Key-value reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    storage::{Storage, StorageKey},
};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl Storage for super::Database {
    fn get(&self, key: StorageKey) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key.as_str()], |row| row.get::<_, String>(0))
            .optional()
            .db_context("Failed to read stored value")
    }

    fn set(&mut self, key: StorageKey, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key.as_str(), value, &now])
            .db_context("Failed to write stored value")?;
        Ok(())
    }
}
