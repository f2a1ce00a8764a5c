//! Weekend plan and saved plan snapshots.

use std::collections::BTreeSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Day, DaySlot, Event, Theme};

/// Label used for saved plans stored without a name.
pub const UNNAMED_PLAN_LABEL: &str = "Weekend plan";

/// The active weekend plan.
///
/// Friday and Monday only hold events while `is_long_weekend` is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeekendPlan {
    #[serde(default)]
    pub friday: DaySlot,

    #[serde(default)]
    pub saturday: DaySlot,

    #[serde(default)]
    pub sunday: DaySlot,

    #[serde(default)]
    pub monday: DaySlot,

    /// Four-day (Friday to Monday) plan instead of Saturday and Sunday
    #[serde(default)]
    pub is_long_weekend: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl WeekendPlan {
    pub fn slot(&self, day: Day) -> &DaySlot {
        match day {
            Day::Friday => &self.friday,
            Day::Saturday => &self.saturday,
            Day::Sunday => &self.sunday,
            Day::Monday => &self.monday,
        }
    }

    pub(crate) fn slot_mut(&mut self, day: Day) -> &mut DaySlot {
        match day {
            Day::Friday => &mut self.friday,
            Day::Saturday => &mut self.saturday,
            Day::Sunday => &mut self.sunday,
            Day::Monday => &mut self.monday,
        }
    }

    /// Whether `day` already holds an event with `id`.
    pub fn contains(&self, day: Day, id: &str) -> bool {
        self.slot(day).contains(id)
    }

    /// Days shown for the current weekend length.
    pub fn active_days(&self) -> &'static [Day] {
        if self.is_long_weekend {
            &Day::ALL
        } else {
            &Day::REGULAR
        }
    }

    /// Every planned event from Friday to Monday.
    pub fn all_events(&self) -> Vec<&Event> {
        Day::ALL.iter().flat_map(|day| self.slot(*day).iter()).collect()
    }

    /// Ids of every planned event.
    pub fn planned_ids(&self) -> BTreeSet<&str> {
        self.all_events().into_iter().map(|e| e.id.as_str()).collect()
    }

    pub fn has_events(&self) -> bool {
        Day::ALL.iter().any(|day| !self.slot(*day).is_empty())
    }

    /// Clears Friday and Monday unless this is a long weekend.
    ///
    /// Returns whether any slot was cleared.
    pub(crate) fn enforce_weekend_length(&mut self) -> bool {
        if self.is_long_weekend {
            return false;
        }
        let cleared = !self.friday.is_empty() || !self.monday.is_empty();
        self.friday.clear();
        self.monday.clear();
        cleared
    }
}

/// A named snapshot of a weekend plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    /// Unique identifier assigned when the plan was saved
    pub id: String,

    /// Name given by the user
    #[serde(default)]
    pub name: String,

    /// When the snapshot was taken (UTC)
    pub saved_at: Timestamp,

    /// Plan contents at save time
    #[serde(flatten)]
    pub plan: WeekendPlan,
}

impl SavedPlan {
    /// Name for messages, falling back to a generic label.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            UNNAMED_PLAN_LABEL
        } else {
            &self.name
        }
    }
}
