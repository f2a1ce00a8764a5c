//! Subcommand definitions and their handlers.
//!
//! Each handler renders its result as markdown and then prints the
//! planner's pending notification, if any.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand};
use weekend_core::{
    Catalog, Cost, Day, Difficulty, Event, Events, Notice, Planner, PlannerError, SavedPlans,
    Theme, TimeSlot, Timeline, Vibe,
};

use crate::{args::Commands, renderer::TerminalRenderer};

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List every event in the catalog
    #[command(alias = "ls")]
    List,
    /// Search events by title, description, category, location or tags
    Search {
        /// Search terms; an event matches if any term matches
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show a single event
    Show {
        /// Event ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the current plan
    Show,
    /// Add an event to a day
    Add {
        /// Event ID
        event_id: String,
        /// Day to add the event to (friday, saturday, sunday, monday)
        day: Day,
    },
    /// Remove every event from a day
    RemoveDay {
        /// Day to clear
        day: Day,
    },
    /// Remove a single event from a day
    #[command(alias = "rm")]
    Remove {
        /// Day the event is planned on
        day: Day,
        /// Event ID
        event_id: String,
    },
    /// Set the plan theme, or clear it when no theme is given
    Theme {
        /// One of: lazy, adventurous, family, romantic, cultural, active,
        /// social
        theme: Option<Theme>,
    },
    /// Switch between a regular and a long weekend
    LongWeekend,
    /// Show each day's events in time-of-day order
    Timeline,
}

#[derive(Subcommand)]
pub enum PlansCommands {
    /// List saved plans
    #[command(alias = "ls")]
    List,
    /// Save a snapshot of the current plan
    Save {
        /// Name for the snapshot
        name: String,
    },
    /// Replace the current plan with a saved one
    Load {
        /// Saved plan ID
        id: String,
    },
    /// Delete a saved plan
    Delete {
        /// Saved plan ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Edit an event and update every saved, favorited or planned copy
    Edit(EditEventArgs),
}

/// Fields left out keep their current value.
#[derive(Args)]
pub struct EditEventArgs {
    /// Event ID
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub duration: Option<String>,
    #[arg(long)]
    pub rating: Option<f64>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub vibe: Option<Vibe>,
    #[arg(long)]
    pub time_slot: Option<TimeSlot>,
    #[arg(long)]
    pub difficulty: Option<Difficulty>,
    #[arg(long)]
    pub cost: Option<Cost>,
    /// Remove the vibe
    #[arg(long, conflicts_with = "vibe")]
    pub clear_vibe: bool,
    /// Remove the time slot
    #[arg(long, conflicts_with = "time_slot")]
    pub clear_time_slot: bool,
    /// Remove the difficulty
    #[arg(long, conflicts_with = "difficulty")]
    pub clear_difficulty: bool,
    /// Remove the cost
    #[arg(long, conflicts_with = "cost")]
    pub clear_cost: bool,
}

/// New value of an optional classifier: cleared, replaced, or kept.
fn classifier<T>(clear: bool, replacement: Option<T>, current: Option<T>) -> Option<T> {
    if clear {
        None
    } else {
        replacement.or(current)
    }
}

impl EditEventArgs {
    /// Builds the full replacement record from `current`.
    fn apply_to(self, current: &Event) -> Event {
        let mut event = current.clone();
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(duration) = self.duration {
            event.duration = duration;
        }
        if let Some(rating) = self.rating {
            event.rating = rating;
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        event.vibe = classifier(self.clear_vibe, self.vibe, event.vibe);
        event.time_slot = classifier(self.clear_time_slot, self.time_slot, event.time_slot);
        event.difficulty = classifier(self.clear_difficulty, self.difficulty, event.difficulty);
        event.cost = classifier(self.clear_cost, self.cost, event.cost);
        event
    }
}

pub struct Cli {
    planner: Planner,
    catalog: Catalog,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, catalog: Catalog, renderer: TerminalRenderer) -> Self {
        Self {
            planner,
            catalog,
            renderer,
        }
    }

    /// Runs one command, then prints and dismisses any notification it
    /// raised.
    pub fn run(mut self, command: Option<Commands>) -> Result<()> {
        match command {
            Some(Commands::Catalog { command }) => self.handle_catalog_command(command)?,
            Some(Commands::Save { event_id }) => self.toggle_save(&event_id)?,
            Some(Commands::Favorite { event_id }) => self.toggle_favorite(&event_id)?,
            Some(Commands::Saved) => self.renderer.render(
                &Events::from(self.planner.saved_events())
                    .with_empty_message("No saved events.")
                    .to_string(),
            )?,
            Some(Commands::Favorites) => self.renderer.render(
                &Events::from(self.planner.favorited_events())
                    .with_empty_message("No favorite events.")
                    .to_string(),
            )?,
            Some(Commands::Plan { command }) => self.handle_plan_command(command)?,
            Some(Commands::Plans { command }) => self.handle_plans_command(command)?,
            Some(Commands::Event {
                command: EventCommands::Edit(args),
            }) => self.edit_event(args)?,
            None => self.show_plan()?,
        }

        if let Some(message) = self.planner.take_notification() {
            self.renderer.render(&Notice::info(message).to_string())?;
        }
        Ok(())
    }

    fn handle_catalog_command(&self, command: CatalogCommands) -> Result<()> {
        match command {
            CatalogCommands::List => {
                self.renderer
                    .render(&Events::from(self.catalog.events()).to_string())
            }
            CatalogCommands::Search { query } => {
                let results = self.catalog.search(&query.join(" "));
                self.renderer.render(&Events::new(results).to_string())
            }
            CatalogCommands::Show { id } => {
                let event = self.find_event(&id)?;
                self.renderer.render(&event.to_string())
            }
        }
    }

    fn handle_plan_command(&mut self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Show => self.show_plan(),
            PlanCommands::Add { event_id, day } => self.add_to_plan(&event_id, day),
            PlanCommands::RemoveDay { day } => {
                let removed = self
                    .planner
                    .remove_day(day)
                    .context("Failed to clear day")?;
                self.renderer.render(
                    &Notice::info(format!("Removed {} event(s) from {day}", removed.len()))
                        .to_string(),
                )
            }
            PlanCommands::Remove { day, event_id } => {
                match self
                    .planner
                    .remove_event(day, &event_id)
                    .context("Failed to remove event")?
                {
                    Some(event) => self.renderer.render(
                        &Notice::info(format!("Removed \"{}\" from {day}", event.title))
                            .to_string(),
                    ),
                    None => self.renderer.render(
                        &Notice::warning(format!("Event {event_id} is not planned on {day}"))
                            .to_string(),
                    ),
                }
            }
            PlanCommands::Theme { theme } => {
                self.planner
                    .set_theme(theme)
                    .context("Failed to set theme")?;
                let message = match theme {
                    Some(theme) => format!("Theme set to {theme}"),
                    None => "Theme cleared".to_string(),
                };
                self.renderer.render(&Notice::info(message).to_string())
            }
            PlanCommands::LongWeekend => {
                let is_long_weekend = self
                    .planner
                    .toggle_long_weekend()
                    .context("Failed to toggle long weekend")?;
                let message = if is_long_weekend {
                    "Long weekend on: Friday and Monday are available"
                } else {
                    "Long weekend off: Friday and Monday cleared"
                };
                self.renderer.render(&Notice::info(message).to_string())
            }
            PlanCommands::Timeline => self
                .renderer
                .render(&Timeline(self.planner.weekend_plan()).to_string()),
        }
    }

    fn handle_plans_command(&mut self, command: PlansCommands) -> Result<()> {
        match command {
            PlansCommands::List => self
                .renderer
                .render(&SavedPlans(self.planner.saved_plans()).to_string()),
            PlansCommands::Save { name } => match self.planner.save_plan(&name) {
                Ok(_) => Ok(()),
                Err(PlannerError::InvalidInput { reason, .. }) => {
                    self.renderer.render(&Notice::warning(reason).to_string())
                }
                Err(e) => Err(e).context("Failed to save plan"),
            },
            PlansCommands::Load { id } => {
                let loaded = self.planner.load_plan(&id).context("Failed to load plan")?;
                if loaded.is_none() {
                    self.renderer
                        .render(&Notice::warning(format!("No saved plan {id}")).to_string())?;
                }
                Ok(())
            }
            PlansCommands::Delete { id } => {
                let deleted = self
                    .planner
                    .delete_plan(&id)
                    .context("Failed to delete plan")?;
                if deleted.is_none() {
                    self.renderer
                        .render(&Notice::warning(format!("No saved plan {id}")).to_string())?;
                }
                Ok(())
            }
        }
    }

    fn show_plan(&self) -> Result<()> {
        self.renderer
            .render(&self.planner.weekend_plan().to_string())
    }

    fn toggle_save(&mut self, event_id: &str) -> Result<()> {
        let event = self.find_event(event_id)?.clone();
        let saved = self
            .planner
            .toggle_save(&event)
            .context("Failed to update saved events")?;
        let message = if saved {
            format!("Saved \"{}\"", event.title)
        } else {
            format!("Removed \"{}\" from saved events", event.title)
        };
        self.renderer.render(&Notice::info(message).to_string())
    }

    fn toggle_favorite(&mut self, event_id: &str) -> Result<()> {
        let event = self.find_event(event_id)?.clone();
        let favorited = self
            .planner
            .toggle_favorite(&event)
            .context("Failed to update favorite events")?;
        let message = if favorited {
            format!("Added \"{}\" to favorites", event.title)
        } else {
            format!("Removed \"{}\" from favorites", event.title)
        };
        self.renderer.render(&Notice::info(message).to_string())
    }

    fn add_to_plan(&mut self, event_id: &str, day: Day) -> Result<()> {
        let event = self.find_event(event_id)?.clone();

        if self.planner.weekend_plan().contains(day, &event.id) {
            return self.renderer.render(
                &Notice::warning(format!("\"{}\" is already in {day}", event.title)).to_string(),
            );
        }

        let added = self
            .planner
            .add_to_plan(&event, day)
            .context("Failed to add event to plan")?;
        let notice = if added {
            Notice::info(format!("Added \"{}\" to {day}", event.title))
        } else {
            Notice::warning(format!(
                "{day} is only available on a long weekend; run `wk plan long-weekend` first"
            ))
        };
        self.renderer.render(&notice.to_string())
    }

    fn edit_event(&mut self, args: EditEventArgs) -> Result<()> {
        let current = self.find_event(&args.id)?.clone();
        let updated = args.apply_to(&current);

        let locations = self
            .planner
            .update_event(&current.id, &updated)
            .context("Failed to update event")?;

        let notice = if locations.is_empty() {
            Notice::warning(format!(
                "\"{}\" is not saved, favorited or planned; nothing to update",
                current.title
            ))
        } else {
            Notice::info(format!(
                "Updated \"{}\" in {} place(s)",
                updated.title,
                locations.len()
            ))
        };
        self.renderer.render(&updated.to_string())?;
        self.renderer.render(&notice.to_string())
    }

    /// Finds an event by id, preferring the planner's copy so edits show.
    fn find_event(&self, id: &str) -> Result<&Event> {
        self.planner
            .saved_events()
            .iter()
            .chain(self.planner.favorited_events())
            .chain(self.planner.weekend_plan().all_events())
            .chain(self.catalog.get(id))
            .find(|event| event.has_id(id))
            .ok_or_else(|| anyhow!("Event {id} not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_event() -> Event {
        Event {
            id: "3".to_string(),
            title: "Farmers Market".to_string(),
            description: "Local produce".to_string(),
            location: "Town Square".to_string(),
            duration: "2 hours".to_string(),
            rating: 4.2,
            image: String::new(),
            category: "Food".to_string(),
            vibe: Some(Vibe::Social),
            time_slot: Some(TimeSlot::Morning),
            difficulty: None,
            cost: Some(Cost::Free),
        }
    }

    fn edit_args(id: &str) -> EditEventArgs {
        EditEventArgs {
            id: id.to_string(),
            title: None,
            description: None,
            location: None,
            duration: None,
            rating: None,
            category: None,
            vibe: None,
            time_slot: None,
            difficulty: None,
            cost: None,
            clear_vibe: false,
            clear_time_slot: false,
            clear_difficulty: false,
            clear_cost: false,
        }
    }

    #[test]
    fn test_edit_keeps_unspecified_fields() {
        let args = EditEventArgs {
            title: Some("Night Market".to_string()),
            rating: Some(4.8),
            time_slot: Some(TimeSlot::Evening),
            ..edit_args("3")
        };

        let current = create_test_event();
        let updated = args.apply_to(&current);
        assert_eq!(updated.id, "3");
        assert_eq!(updated.title, "Night Market");
        assert!((updated.rating - 4.8).abs() < f64::EPSILON);
        assert_eq!(updated.time_slot, Some(TimeSlot::Evening));
        assert_eq!(updated.location, current.location);
        assert_eq!(updated.vibe, Some(Vibe::Social));
        assert_eq!(updated.cost, Some(Cost::Free));
    }

    #[test]
    fn test_edit_can_clear_classifiers() {
        let args = EditEventArgs {
            clear_vibe: true,
            clear_cost: true,
            ..edit_args("3")
        };

        let updated = args.apply_to(&create_test_event());
        assert_eq!(updated.vibe, None);
        assert_eq!(updated.cost, None);
        assert_eq!(updated.time_slot, Some(TimeSlot::Morning));
        assert_eq!(updated.title, "Farmers Market");
    }
}
