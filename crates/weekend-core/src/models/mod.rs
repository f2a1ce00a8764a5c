//! Data models for events and weekend plans.
//!
//! These types are the planner's wire format as well as its in-memory state:
//! every collection the [`crate::Planner`] owns is serialized to JSON with
//! serde using camelCase field names.
//!
//! - [`Event`]: a catalog activity, identified by its `id`
//! - [`DaySlot`]: the ordered events planned for one [`Day`]
//! - [`WeekendPlan`]: four day slots plus the long-weekend flag and [`Theme`]
//! - [`SavedPlan`]: a named, timestamped snapshot of a [`WeekendPlan`]
//!
//! # Examples
//!
//! ```rust
//! use weekend_core::models::{Day, WeekendPlan};
//!
//! let plan = WeekendPlan::default();
//! assert_eq!(plan.active_days(), &[Day::Saturday, Day::Sunday]);
//! assert!(!plan.has_events());
//! assert!("theme".parse::<Day>().is_err());
//! ```

pub mod day;
pub mod event;
pub mod plan;
pub mod slot;


pub use day::{Day, Theme};
pub use event::{Cost, Difficulty, Event, TimeSlot, Vibe};
pub use plan::{SavedPlan, WeekendPlan, UNNAMED_PLAN_LABEL};
pub use slot::DaySlot;
