//! Core library for the weekend planner.
//!
//! The library owns the planner state: saved and favorited events, the
//! active weekend plan, named snapshots of past plans, and a single pending
//! notification. Every mutation is written through to a [`Storage`] backend
//! before it becomes visible, and state is rebuilt from storage on startup.
//!
//! - [`models`]: events, days, themes and plans, with their stored JSON shape
//! - [`planner`]: the [`Planner`] and its operations
//! - [`storage`] and [`db`]: key-value persistence, in memory or SQLite
//! - [`catalog`]: the read-only list of events to choose from
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use weekend_core::{Catalog, Day, PlannerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = std::env::temp_dir().join("weekend-doc");
//! let mut planner = PlannerBuilder::new()
//!     .with_database_path(Some(dir.join("weekend.db")))
//!     .build()?;
//!
//! let catalog = Catalog::builtin()?;
//! if let Some(event) = catalog.get("1") {
//!     planner.add_to_plan(event, Day::Saturday)?;
//! }
//! println!("{}", planner.weekend_plan());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod planner;
pub mod storage;

pub use catalog::Catalog;
pub use db::Database;
pub use display::{Events, LocalDateTime, Notice, SavedPlans, Timeline};
pub use error::{PlannerError, Result};
pub use models::{
    Cost, Day, DaySlot, Difficulty, Event, SavedPlan, Theme, TimeSlot, Vibe, WeekendPlan,
    UNNAMED_PLAN_LABEL,
};
pub use planner::{event_ops::EventLocation, Planner, PlannerBuilder};
pub use storage::{MemoryStorage, Storage, StorageKey};
