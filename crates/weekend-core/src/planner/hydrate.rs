//! Startup loading of planner state with per-key fallback.

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::{
    models::WeekendPlan,
    storage::{Storage, StorageKey},
};

/// Reads and parses `key`, falling back to `T::default()`.
pub(super) fn collection<T, S>(storage: &S, key: StorageKey) -> T
where
    T: DeserializeOwned + Default,
    S: Storage,
{
    let json = match storage.get(key) {
        Ok(Some(json)) => json,
        Ok(None) => {
            debug!("No stored value for {key}, using default");
            return T::default();
        }
        Err(e) => {
            warn!("Failed to read {key}, using default: {e}");
            return T::default();
        }
    };

    serde_json::from_str(&json).unwrap_or_else(|e| {
        warn!("Discarding malformed {key}: {e}");
        T::default()
    })
}

/// Loads the active plan and re-establishes the weekend-length invariant.
pub(super) fn weekend_plan<S: Storage>(storage: &S) -> WeekendPlan {
    let mut plan: WeekendPlan = collection(storage, StorageKey::WeekendPlan);
    if plan.enforce_weekend_length() {
        warn!("Stored plan had Friday/Monday events outside a long weekend; cleared them");
    }
    plan
}
