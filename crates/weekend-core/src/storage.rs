//! Key-value storage abstraction used for persisting planner state.
//!
//! The planner keeps four collections, each serialized to a JSON blob and
//! written under its own [`StorageKey`]. Any backend that can get and set
//! strings by key can hold them: [`crate::Database`] for durable SQLite
//! storage, or [`MemoryStorage`] for tests and short-lived sessions.

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;

/// The fixed keys the planner persists under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    SavedEvents,
    FavoritedEvents,
    WeekendPlan,
    SavedPlans,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::SavedEvents,
        StorageKey::FavoritedEvents,
        StorageKey::WeekendPlan,
        StorageKey::SavedPlans,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::SavedEvents => "saved-events",
            StorageKey::FavoritedEvents => "favorited-events",
            StorageKey::WeekendPlan => "weekend-plan",
            StorageKey::SavedPlans => "saved-plans",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable get/set of serialized blobs.
///
/// A successful `set` must be visible to the next `get` of the same key.
/// No atomicity across keys is required.
pub trait Storage {
    /// Reads the blob stored under `key`, if any.
    fn get(&self, key: StorageKey) -> Result<Option<String>>;

    /// Replaces the blob stored under `key`.
    fn set(&mut self, key: StorageKey, value: &str) -> Result<()>;
}

/// Process-local storage backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<StorageKey, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw blob, bypassing serialization.
    pub fn with_entry(mut self, key: StorageKey, value: impl Into<String>) -> Self {
        self.entries.insert(key, value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: StorageKey) -> Result<Option<String>> {
        Ok(self.entries.get(&key).cloned())
    }

    fn set(&mut self, key: StorageKey, value: &str) -> Result<()> {
        self.entries.insert(key, value.to_string());
        Ok(())
    }
}
