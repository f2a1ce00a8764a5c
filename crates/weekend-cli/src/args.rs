use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CatalogCommands, EventCommands, PlanCommands, PlansCommands};

/// Plan your weekend from the terminal
///
/// Browse the event catalog, keep lists of saved and favorite events, lay
/// out a regular or long weekend day by day, and keep named snapshots of
/// plans you like. Running `wk` without a command shows the current plan.
#[derive(Parser)]
#[command(version, about, name = "wk")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/weekend/weekend.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// JSON file with the events to plan from, instead of the built-in
    /// catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the event catalog
    #[command(alias = "c")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Save an event, or unsave it if already saved
    Save {
        /// Event ID
        event_id: String,
    },
    /// Favorite an event, or unfavorite it if already favorited
    #[command(alias = "fav")]
    Favorite {
        /// Event ID
        event_id: String,
    },
    /// List saved events
    Saved,
    /// List favorited events
    Favorites,
    /// Manage the current weekend plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage saved weekend plans
    Plans {
        #[command(subcommand)]
        command: PlansCommands,
    },
    /// Edit events wherever they are saved or planned
    #[command(alias = "e")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
}
