//! Key-value reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TimeboxError},
    persistence::KeyValueStore,
};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const SELECT_UPDATED_AT_SQL: &str = "SELECT updated_at FROM kv_store WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv_store WHERE key = ?1";

impl KeyValueStore for super::Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read stored value")
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, &now])
            .db_context("Failed to write stored value")?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_VALUE_SQL, params![key])
            .db_context("Failed to remove stored value")?;
        Ok(())
    }

    fn updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_UPDATED_AT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read stored timestamp")?;

        raw.map(|text| {
            text.parse::<Timestamp>()
                .map_err(|e| TimeboxError::Configuration {
                    message: format!("Invalid timestamp stored for key '{key}': {e}"),
                })
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn test_set_get_remove() {
        let mut db = Database::in_memory().expect("Failed to open database");

        assert_eq!(db.get("k").unwrap(), None);
        db.set("k", "one").unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("one"));

        db.set("k", "two").unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("two"));

        db.remove("k").unwrap();
        assert_eq!(db.get("k").unwrap(), None);
        // Removing a missing key is fine
        db.remove("k").unwrap();
    }

    #[test]
    fn test_updated_at_tracks_writes() {
        let mut db = Database::in_memory().expect("Failed to open database");
        assert!(db.updated_at("k").unwrap().is_none());

        let before = Timestamp::now();
        db.set("k", "value").unwrap();
        let stamp = db.updated_at("k").unwrap().expect("timestamp recorded");
        assert!(stamp >= before);

        db.remove("k").unwrap();
        assert!(db.updated_at("k").unwrap().is_none());
    }

    #[test]
    fn test_keys_are_independent() {
        let mut db = Database::in_memory().expect("Failed to open database");
        db.set("a", "1").unwrap();
        db.set("b", "2").unwrap();
        db.remove("a").unwrap();

        assert_eq!(db.get("a").unwrap(), None);
        assert_eq!(db.get("b").unwrap().as_deref(), Some("2"));
    }
}
