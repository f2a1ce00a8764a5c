use std::path::Path;

use tempfile::TempDir;
use weekend_core::{Catalog, Event, Planner, PlannerBuilder};

/// Helper function to create a planner backed by a fresh database file
pub fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = open_planner(temp_dir.path());
    (temp_dir, planner)
}

/// Opens (or reopens) the planner database inside `dir`
pub fn open_planner(dir: &Path) -> Planner {
    PlannerBuilder::new()
        .with_database_path(Some(dir.join("weekend.db")))
        .build()
        .expect("Failed to create planner")
}

/// Looks up an event from the built-in catalog
pub fn catalog_event(id: &str) -> Event {
    Catalog::builtin()
        .expect("Built-in catalog should parse")
        .get(id)
        .cloned()
        .expect("Event should exist in the built-in catalog")
}
