//! Markdown formatting for planner state.
//!
//! Domain models implement [`std::fmt::Display`] directly. Lists get
//! newtype wrappers in [`collections`] so each list can choose its own
//! heading and empty message.
//!
//! ```rust
//! use weekend_core::{display::Events, Catalog};
//!
//! let catalog = Catalog::builtin()?;
//! let output = Events::new(catalog.search("pottery")).to_string();
//! assert!(output.contains("Pottery Workshop"));
//! # Ok::<(), weekend_core::PlannerError>(())
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod notice;

pub use collections::{Events, SavedPlans, Timeline};
pub use datetime::LocalDateTime;
pub use notice::Notice;
