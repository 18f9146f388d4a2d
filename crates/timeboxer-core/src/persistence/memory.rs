//! Process-local key-value store.

use std::collections::HashMap;

use jiff::Timestamp;

use super::KeyValueStore;
use crate::error::Result;

/// In-memory [`KeyValueStore`], mainly for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, (String, Timestamp)>,
}

impl MemoryStore {
    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|(value, _)| value.clone()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .insert(key.to_string(), (value.to_string(), Timestamp::now()));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        Ok(self.entries.get(key).map(|(_, stamp)| *stamp))
    }
}
