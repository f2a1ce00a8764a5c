//! Named snapshots of the active plan.

use jiff::Timestamp;
use log::info;
use uuid::Uuid;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::SavedPlan,
    storage::{Storage, StorageKey},
};

impl<S: Storage> Planner<S> {
    /// Stores a copy of the active plan under `name`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `name` is empty or only
    /// whitespace. Nothing is saved in that case.
    pub fn save_plan(&mut self, name: &str) -> Result<&SavedPlan> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::invalid_input("name").with_reason("Please enter a plan name"));
        }

        let snapshot = SavedPlan {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            saved_at: Timestamp::now(),
            plan: self.weekend_plan.clone(),
        };

        let mut plans = self.saved_plans.clone();
        plans.push(snapshot);
        self.persist(StorageKey::SavedPlans, &plans)?;
        self.saved_plans = plans;

        info!("Saved weekend plan \"{name}\"");
        self.notify(format!("Weekend plan \"{name}\" saved!"));

        let last = self.saved_plans.len() - 1;
        Ok(&self.saved_plans[last])
    }

    pub fn find_saved_plan(&self, plan_id: &str) -> Option<&SavedPlan> {
        self.saved_plans.iter().find(|p| p.id == plan_id)
    }

    /// Replaces the whole active plan with a copy of the saved plan
    /// `plan_id`, including its theme and weekend length.
    ///
    /// An unknown id changes nothing, sends no notification and returns
    /// `None`.
    pub fn load_plan(&mut self, plan_id: &str) -> Result<Option<&SavedPlan>> {
        let Some(index) = self.saved_plans.iter().position(|p| p.id == plan_id) else {
            return Ok(None);
        };

        let mut plan = self.saved_plans[index].plan.clone();
        plan.enforce_weekend_length();
        self.commit_plan(plan)?;

        let label = self.saved_plans[index].display_name().to_string();
        info!("Loaded weekend plan \"{label}\"");
        self.notify(format!("Loaded \"{label}\""));

        Ok(Some(&self.saved_plans[index]))
    }

    /// Deletes the saved plan `plan_id`.
    ///
    /// Like [`Planner::load_plan`], an unknown id changes nothing and sends no
    /// notification. Returns the deleted snapshot.
    pub fn delete_plan(&mut self, plan_id: &str) -> Result<Option<SavedPlan>> {
        let Some(index) = self.saved_plans.iter().position(|p| p.id == plan_id) else {
            return Ok(None);
        };

        let mut plans = self.saved_plans.clone();
        let removed = plans.remove(index);
        self.persist(StorageKey::SavedPlans, &plans)?;
        self.saved_plans = plans;

        info!("Deleted weekend plan \"{}\"", removed.display_name());
        self.notify("Weekend plan deleted");

        Ok(Some(removed))
    }
}
