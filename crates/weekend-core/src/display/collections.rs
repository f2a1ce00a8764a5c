//! Display wrappers for lists of events and saved plans.

use std::fmt;

use crate::models::{Day, Event, SavedPlan, TimeSlot, WeekendPlan};

/// A list of events, such as a search result or the saved list.
#[derive(Debug, Clone, Default)]
pub struct Events<'a> {
    events: Vec<&'a Event>,
    empty_message: &'static str,
}

impl<'a> Events<'a> {
    pub fn new(events: impl IntoIterator<Item = &'a Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            empty_message: "No events found.",
        }
    }

    /// Replaces the line printed when there are no events.
    pub fn with_empty_message(mut self, message: &'static str) -> Self {
        self.empty_message = message;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &&'a Event> + '_ {
        self.events.iter()
    }
}

impl<'a> From<&'a [Event]> for Events<'a> {
    fn from(events: &'a [Event]) -> Self {
        Self::new(events)
    }
}

impl fmt::Display for Events<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.events.is_empty() {
            return writeln!(f, "{}", self.empty_message);
        }

        writeln!(f, "# Events ({})", self.events.len())?;
        writeln!(f)?;
        for event in &self.events {
            write!(f, "{event}")?;
        }
        Ok(())
    }
}

/// Saved plan snapshots in the order they were saved, oldest first.
#[derive(Debug, Clone, Copy)]
pub struct SavedPlans<'a>(pub &'a [SavedPlan]);

impl fmt::Display for SavedPlans<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No saved plans.");
        }

        writeln!(f, "# Saved Plans ({})", self.0.len())?;
        writeln!(f)?;
        for saved in self.0 {
            write!(f, "{saved}")?;
        }
        Ok(())
    }
}

/// Chronological view of a plan: each active day with its events ordered
/// all-day first, then morning, afternoon, and evening.
#[derive(Debug, Clone, Copy)]
pub struct Timeline<'a>(pub &'a WeekendPlan);

impl fmt::Display for Timeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Timeline")?;
        writeln!(f)?;
        for &day in self.0.active_days() {
            fmt_timeline_day(f, day, self.0)?;
        }
        Ok(())
    }
}

fn fmt_timeline_day(f: &mut fmt::Formatter<'_>, day: Day, plan: &WeekendPlan) -> fmt::Result {
    writeln!(f, "## {day}")?;
    writeln!(f)?;

    let events = plan.slot(day).timeline();
    if events.is_empty() {
        writeln!(f, "Nothing scheduled.")?;
    }
    for event in events {
        let slot = event.time_slot.unwrap_or(TimeSlot::Morning);
        writeln!(
            f,
            "- {}: **{}** at {} ({})",
            slot, event.title, event.location, event.duration
        )?;
    }
    writeln!(f)
}
