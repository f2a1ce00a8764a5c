//! High-level planner API for saved events and weekend plans.
//!
//! The [`Planner`] owns every piece of durable state (saved events,
//! favorited events, the active [`WeekendPlan`] and the saved plans) plus a
//! single pending notification for the caller to display. It is the only
//! writer of that state: callers read through the accessors and change
//! things through the operations in the submodules.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Callers     │    │     Planner     │    │     Storage     │
//! │  (CLI, tests,   │───▶│ (event_ops,     │───▶│ (Database,      │
//! │   embedders)    │    │  plan_ops, ...) │    │  MemoryStorage) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Creates a SQLite-backed [`Planner`] from configuration
//! - [`event_ops`]: Saved and favorited events, and edits fanned out to
//!   every copy of an event
//! - [`plan_ops`]: Day slots, theme and the long-weekend toggle
//! - [`saved_plans`]: Named snapshots of the active plan
//! - [`notify`]: The pending notification message
//!
//! ## Persistence
//!
//! Every mutation builds the new value of the collection it touches, writes
//! it to storage, and only then replaces the in-memory value. A failed write
//! returns an error and leaves the planner as it was.
//!
//! # Examples
//!
//! ```rust
//! use weekend_core::{models::Day, Catalog, MemoryStorage, Planner};
//!
//! # fn example() -> weekend_core::Result<()> {
//! let catalog = Catalog::builtin()?;
//! let mut planner = Planner::load(MemoryStorage::new());
//!
//! let hike = catalog.get("1").expect("seeded event");
//! planner.add_to_plan(hike, Day::Saturday)?;
//! planner.save_plan("Mountain weekend")?;
//!
//! assert_eq!(planner.weekend_plan().saturday.len(), 1);
//! assert_eq!(planner.saved_plans().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::{debug, warn};
use serde::Serialize;

use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::{Event, SavedPlan, WeekendPlan},
    storage::{Storage, StorageKey},
};

pub mod builder;
pub mod event_ops;
mod hydrate;
pub mod notify;
pub mod plan_ops;
pub mod saved_plans;


pub use builder::PlannerBuilder;

/// Main planner interface owning all weekend-planning state.
pub struct Planner<S: Storage = Database> {
    storage: S,
    saved_events: Vec<Event>,
    favorited_events: Vec<Event>,
    weekend_plan: WeekendPlan,
    saved_plans: Vec<SavedPlan>,
    notification: Option<String>,
}

impl<S: Storage> Planner<S> {
    /// Creates a planner from whatever `storage` holds.
    ///
    /// Keys that are missing, unreadable or malformed fall back to their
    /// defaults: no saved or favorited events, an empty regular weekend
    /// without a theme, and no saved plans.
    pub fn load(storage: S) -> Self {
        let saved_events = hydrate::collection(&storage, StorageKey::SavedEvents);
        let favorited_events = hydrate::collection(&storage, StorageKey::FavoritedEvents);
        let weekend_plan = hydrate::weekend_plan(&storage);
        let saved_plans = hydrate::collection(&storage, StorageKey::SavedPlans);

        Self {
            storage,
            saved_events,
            favorited_events,
            weekend_plan,
            saved_plans,
            notification: None,
        }
    }

    pub fn saved_events(&self) -> &[Event] {
        &self.saved_events
    }

    pub fn favorited_events(&self) -> &[Event] {
        &self.favorited_events
    }

    pub fn weekend_plan(&self) -> &WeekendPlan {
        &self.weekend_plan
    }

    pub fn saved_plans(&self) -> &[SavedPlan] {
        &self.saved_plans
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the planner and hands back its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Serializes `value` and writes it under `key`.
    fn persist<T: Serialize + ?Sized>(&mut self, key: StorageKey, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        debug!("Persisting {} ({} bytes)", key, json.len());
        self.storage.set(key, &json)
    }

    /// Writes several serialized collections as one step.
    ///
    /// When a write fails, keys already written get their in-memory value
    /// back, so storage and memory still agree with each other.
    fn persist_all(&mut self, payloads: &[(StorageKey, String)]) -> Result<()> {
        for (index, (key, json)) in payloads.iter().enumerate() {
            debug!("Persisting {} ({} bytes)", key, json.len());
            if let Err(e) = self.storage.set(*key, json) {
                for (written, _) in &payloads[..index] {
                    self.restore(*written);
                }
                return Err(e);
            }
        }
        Ok(())
    }

    /// Rewrites `key` from its in-memory value, logging on failure.
    fn restore(&mut self, key: StorageKey) {
        let json = match key {
            StorageKey::SavedEvents => serde_json::to_string(&self.saved_events),
            StorageKey::FavoritedEvents => serde_json::to_string(&self.favorited_events),
            StorageKey::WeekendPlan => serde_json::to_string(&self.weekend_plan),
            StorageKey::SavedPlans => serde_json::to_string(&self.saved_plans),
        };
        let restored = json
            .map_err(PlannerError::from)
            .and_then(|json| self.storage.set(key, &json));
        if let Err(e) = restored {
            warn!("Failed to restore {key} after an aborted update: {e}");
        }
    }

    /// Persists and installs a new weekend plan.
    fn commit_plan(&mut self, plan: WeekendPlan) -> Result<()> {
        self.persist(StorageKey::WeekendPlan, &plan)?;
        self.weekend_plan = plan;
        Ok(())
    }
}
