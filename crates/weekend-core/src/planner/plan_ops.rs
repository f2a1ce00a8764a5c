//! Operations on the active weekend plan.

use log::debug;

use super::Planner;
use crate::{
    error::Result,
    models::{Day, Event, Theme},
    storage::Storage,
};

impl<S: Storage> Planner<S> {
    /// Appends `event` to `day`, after any events already planned there.
    ///
    /// The same event may appear more than once in a day; callers that want
    /// one copy per day check [`crate::WeekendPlan::contains`] first.
    ///
    /// Friday and Monday only accept events during a long weekend. Adding to
    /// them otherwise does nothing and returns `false`.
    pub fn add_to_plan(&mut self, event: &Event, day: Day) -> Result<bool> {
        if !self.weekend_plan.active_days().contains(&day) {
            debug!("Ignoring add to {}: not part of this weekend", day.as_str());
            return Ok(false);
        }

        let mut plan = self.weekend_plan.clone();
        plan.slot_mut(day).push(event.clone());
        self.commit_plan(plan)?;

        debug!("Added event {} to {}", event.id, day.as_str());
        Ok(true)
    }

    /// Clears every event from `day`. Returns the removed events.
    pub fn remove_day(&mut self, day: Day) -> Result<Vec<Event>> {
        if self.weekend_plan.slot(day).is_empty() {
            return Ok(Vec::new());
        }

        let mut plan = self.weekend_plan.clone();
        let removed = plan.slot(day).events().to_vec();
        plan.slot_mut(day).clear();
        self.commit_plan(plan)?;

        debug!("Cleared {} event(s) from {}", removed.len(), day.as_str());
        Ok(removed)
    }

    /// Removes the event `event_id` from `day`, leaving other events in place.
    /// Returns the removed event, or `None` when it was not planned that day.
    pub fn remove_event(&mut self, day: Day, event_id: &str) -> Result<Option<Event>> {
        let Some(removed) = self
            .weekend_plan
            .slot(day)
            .iter()
            .find(|e| e.has_id(event_id))
            .cloned()
        else {
            return Ok(None);
        };

        let mut plan = self.weekend_plan.clone();
        plan.slot_mut(day).remove(event_id);
        self.commit_plan(plan)?;

        debug!("Removed event {} from {}", event_id, day.as_str());
        Ok(Some(removed))
    }

    /// Sets or clears the plan theme.
    pub fn set_theme(&mut self, theme: Option<Theme>) -> Result<()> {
        let mut plan = self.weekend_plan.clone();
        plan.theme = theme;
        self.commit_plan(plan)
    }

    /// Switches between a regular and a long weekend.
    ///
    /// Leaving a long weekend clears Friday and Monday in the same write.
    /// Entering one leaves every slot as it is. Returns the new flag.
    pub fn toggle_long_weekend(&mut self) -> Result<bool> {
        let mut plan = self.weekend_plan.clone();
        plan.is_long_weekend = !plan.is_long_weekend;
        plan.enforce_weekend_length();

        let is_long_weekend = plan.is_long_weekend;
        self.commit_plan(plan)?;

        debug!("Long weekend: {is_long_weekend}");
        Ok(is_long_weekend)
    }
}
