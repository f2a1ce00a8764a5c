//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it richly or print it as
//! plain text.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Day, DaySlot, Event, SavedPlan, Theme, TimeSlot, WeekendPlan};

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Event {
    /// Classifier tags joined for a metadata line, if any are set.
    fn tags(&self) -> Option<String> {
        let tags: Vec<&str> = [
            self.vibe.map(|v| v.as_str()),
            self.time_slot.map(|t| t.label()),
            self.difficulty.map(|d| d.as_str()),
            self.cost.map(|c| c.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect();

        (!tags.is_empty()).then(|| tags.join(" · "))
    }

    /// One-line form used inside plan days.
    fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** (`{}`)", self.title, self.id)?;
        if let Some(slot) = self.time_slot {
            write!(f, " · {slot}")?;
        }
        writeln!(f, " · {}", self.location)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} (`{}`)", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Location: {}", self.location)?;
        writeln!(f, "- Duration: {}", self.duration)?;
        writeln!(f, "- Rating: {:.1}/5", self.rating)?;
        if let Some(tags) = self.tags() {
            writeln!(f, "- Tags: {tags}")?;
        }

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)
    }
}

fn fmt_day(f: &mut fmt::Formatter<'_>, day: Day, slot: &DaySlot) -> fmt::Result {
    writeln!(f, "## {day}")?;
    writeln!(f)?;
    if slot.is_empty() {
        writeln!(f, "No events planned.")?;
    } else {
        for event in slot {
            event.fmt_line(f)?;
        }
    }
    writeln!(f)
}

impl fmt::Display for WeekendPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_long_weekend {
            writeln!(f, "# Long Weekend")?;
        } else {
            writeln!(f, "# Regular Weekend")?;
        }
        writeln!(f)?;

        if let Some(theme) = self.theme {
            writeln!(f, "- Theme: {} ({})", theme, theme.description())?;
        }
        writeln!(f, "- Events: {}", self.all_events().len())?;
        writeln!(f)?;

        for day in self.active_days() {
            fmt_day(f, *day, self.slot(*day))?;
        }
        Ok(())
    }
}

impl fmt::Display for SavedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} (`{}`)", self.display_name(), self.id)?;
        writeln!(f)?;
        writeln!(f, "- Saved: {}", LocalDateTime(&self.saved_at))?;
        let length = if self.plan.is_long_weekend { "long weekend" } else { "regular weekend" };
        writeln!(f, "- Length: {length}")?;
        if let Some(theme) = self.plan.theme {
            writeln!(f, "- Theme: {theme}")?;
        }
        writeln!(f, "- Events: {}", self.plan.all_events().len())?;
        writeln!(f)
    }
}
