//! Read-only catalog of events to plan from.

use std::{collections::HashSet, path::Path};

use crate::{
    error::{PlannerError, Result},
    models::Event,
};

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// An ordered, immutable list of events.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// The catalog shipped with the library.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses a JSON array of events.
    ///
    /// Fails with [`PlannerError::Configuration`] when two events share an
    /// id, since every lookup goes by id.
    pub fn from_json(json: &str) -> Result<Self> {
        let events: Vec<Event> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        if let Some(duplicate) = events.iter().find(|e| !seen.insert(e.id.as_str())) {
            return Err(PlannerError::Configuration {
                message: format!("Catalog contains event id '{}' more than once", duplicate.id),
            });
        }

        Ok(Self::new(events))
    }

    /// Reads a catalog from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| PlannerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.has_id(id))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Free-text search over the catalog.
    ///
    /// The query is split on whitespace and an event matches when any term
    /// appears in its title, description, category, location or classifiers,
    /// ignoring case. A blank query returns every event. Catalog order is kept.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let query = query.trim().to_lowercase();
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return self.events.iter().collect();
        }

        self.events
            .iter()
            .filter(|event| {
                let haystack = event.search_text();
                terms.iter().any(|term| haystack.contains(term))
            })
            .collect()
    }
}
