//! Saved and favorited events, and edits to events wherever they appear.

use log::debug;

use super::Planner;
use crate::{
    error::Result,
    models::{Day, Event},
    storage::{Storage, StorageKey},
};

/// A place in the planner's live state where copies of an event are kept.
///
/// Saved plans are not listed: they are frozen snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLocation {
    SavedEvents,
    FavoritedEvents,
    PlanDay(Day),
}

impl EventLocation {
    /// Every location an edit must reach.
    pub const ALL: [EventLocation; 6] = [
        EventLocation::SavedEvents,
        EventLocation::FavoritedEvents,
        EventLocation::PlanDay(Day::Friday),
        EventLocation::PlanDay(Day::Saturday),
        EventLocation::PlanDay(Day::Sunday),
        EventLocation::PlanDay(Day::Monday),
    ];

    /// Storage key holding this location.
    pub fn storage_key(&self) -> StorageKey {
        match self {
            EventLocation::SavedEvents => StorageKey::SavedEvents,
            EventLocation::FavoritedEvents => StorageKey::FavoritedEvents,
            EventLocation::PlanDay(_) => StorageKey::WeekendPlan,
        }
    }
}

/// Adds `event` when absent by id, removes it otherwise.
/// Returns whether the event is now a member.
fn toggle_membership(events: &mut Vec<Event>, event: &Event) -> bool {
    if events.iter().any(|e| e.has_id(&event.id)) {
        events.retain(|e| !e.has_id(&event.id));
        false
    } else {
        events.push(event.clone());
        true
    }
}

fn replace_by_id(events: &mut [Event], id: &str, updated: &Event) -> bool {
    let mut changed = false;
    for event in events.iter_mut().filter(|e| e.has_id(id)) {
        *event = updated.clone();
        changed = true;
    }
    changed
}

impl<S: Storage> Planner<S> {
    /// Saves `event`, or unsaves it when an event with the same id is
    /// already saved. Returns whether the event is saved afterwards.
    pub fn toggle_save(&mut self, event: &Event) -> Result<bool> {
        let mut saved = self.saved_events.clone();
        let now_saved = toggle_membership(&mut saved, event);

        self.persist(StorageKey::SavedEvents, &saved)?;
        self.saved_events = saved;

        debug!("Event {} saved: {}", event.id, now_saved);
        Ok(now_saved)
    }

    /// Favorites or unfavorites `event`, independently of saving.
    /// Returns whether the event is favorited afterwards.
    pub fn toggle_favorite(&mut self, event: &Event) -> Result<bool> {
        let mut favorited = self.favorited_events.clone();
        let now_favorited = toggle_membership(&mut favorited, event);

        self.persist(StorageKey::FavoritedEvents, &favorited)?;
        self.favorited_events = favorited;

        debug!("Event {} favorited: {}", event.id, now_favorited);
        Ok(now_favorited)
    }

    pub fn is_saved(&self, event_id: &str) -> bool {
        self.saved_events.iter().any(|e| e.has_id(event_id))
    }

    pub fn is_favorited(&self, event_id: &str) -> bool {
        self.favorited_events.iter().any(|e| e.has_id(event_id))
    }

    /// Replaces every live copy of the event `event_id` with `updated`.
    ///
    /// The replacement is the whole record, not a merge. Every location in
    /// [`EventLocation::ALL`] is visited; saved plans keep their old copy.
    /// All touched collections are written before any is replaced in
    /// memory, and a failed write rolls back the ones already written.
    /// Returns the locations that held the event.
    pub fn update_event(&mut self, event_id: &str, updated: &Event) -> Result<Vec<EventLocation>> {
        let mut saved = self.saved_events.clone();
        let mut favorited = self.favorited_events.clone();
        let mut plan = self.weekend_plan.clone();

        let touched: Vec<EventLocation> = EventLocation::ALL
            .into_iter()
            .filter(|location| match location {
                EventLocation::SavedEvents => replace_by_id(&mut saved, event_id, updated),
                EventLocation::FavoritedEvents => replace_by_id(&mut favorited, event_id, updated),
                EventLocation::PlanDay(day) => plan.slot_mut(*day).replace(event_id, updated),
            })
            .collect();

        let touches = |key: StorageKey| touched.iter().any(|l| l.storage_key() == key);

        let mut payloads = Vec::new();
        if touches(StorageKey::SavedEvents) {
            payloads.push((StorageKey::SavedEvents, serde_json::to_string(&saved)?));
        }
        if touches(StorageKey::FavoritedEvents) {
            payloads.push((StorageKey::FavoritedEvents, serde_json::to_string(&favorited)?));
        }
        if touches(StorageKey::WeekendPlan) {
            payloads.push((StorageKey::WeekendPlan, serde_json::to_string(&plan)?));
        }
        self.persist_all(&payloads)?;

        if touches(StorageKey::SavedEvents) {
            self.saved_events = saved;
        }
        if touches(StorageKey::FavoritedEvents) {
            self.favorited_events = favorited;
        }
        if touches(StorageKey::WeekendPlan) {
            self.weekend_plan = plan;
        }

        debug!("Updated event {} in {} location(s)", event_id, touched.len());
        Ok(touched)
    }
}
