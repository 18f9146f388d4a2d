//! Saving and restoring the active plan.
//!
//! Persistence is a single JSON document stored under [`SAVE_KEY`] in a
//! [`KeyValueStore`]. The [`PersistenceAdapter`] is the only component that
//! reads or writes it: once when a session starts, once after every
//! mutation, and on reset.
//!
//! ```rust
//! use timeboxer_core::{
//!     normalizer::fallback_plan,
//!     persistence::{MemoryStore, PersistenceAdapter},
//! };
//!
//! let mut adapter = PersistenceAdapter::new(MemoryStore::default());
//! assert!(adapter.load().is_none());
//!
//! adapter.save(&fallback_plan()).unwrap();
//! assert_eq!(adapter.load(), Some(fallback_plan()));
//! ```

use jiff::Timestamp;
use log::{debug, warn};

use crate::{error::Result, models::Plan};

mod memory;


pub use memory::MemoryStore;

/// Key under which the active plan is stored.
pub const SAVE_KEY: &str = "timeboxer-save";

/// String-keyed storage of string values.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the value under `key`; removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// When the value under `key` was last written, if the store tracks it.
    fn updated_at(&self, _key: &str) -> Result<Option<Timestamp>> {
        Ok(None)
    }
}

/// Loads, saves and clears the persisted plan.
#[derive(Debug)]
pub struct PersistenceAdapter<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    /// Creates an adapter using the default [`SAVE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, SAVE_KEY)
    }

    /// Creates an adapter storing the plan under `key`.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Returns the saved plan.
    ///
    /// A missing value, a value that fails to deserialize, and a failed read
    /// all yield `None`; the latter two are logged.
    pub fn load(&self) -> Option<Plan> {
        let raw = match self.store.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read saved plan: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Plan>(&raw) {
            Ok(plan) => {
                debug!("Restored saved plan '{}'", plan.project_name);
                Some(plan)
            }
            Err(e) => {
                warn!("Ignoring corrupt saved plan under '{}': {e}", self.key);
                None
            }
        }
    }

    /// Serializes `plan` and stores it, replacing any prior value.
    pub fn save(&mut self, plan: &Plan) -> Result<()> {
        let json = serde_json::to_string(plan)?;
        self.store.set(&self.key, &json)?;
        debug!("Saved plan '{}' ({} bytes)", plan.project_name, json.len());
        Ok(())
    }

    /// Removes the stored plan.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(&self.key)?;
        debug!("Cleared saved plan");
        Ok(())
    }

    /// When the plan was last saved, if known.
    pub fn last_saved(&self) -> Option<Timestamp> {
        self.store.updated_at(&self.key).unwrap_or_else(|e| {
            warn!("Failed to read save time: {e}");
            None
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
