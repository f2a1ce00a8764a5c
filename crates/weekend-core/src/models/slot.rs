//! Occupancy of a single plan day.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Event;

/// The events planned for one day, in insertion order.
///
/// A slot is always held as a sequence. On the wire an empty slot is `null`
/// and an occupied slot is an array; older data that stored a single bare
/// event object is read back as a one-event slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySlot(Vec<Event>);

impl DaySlot {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn events(&self) -> &[Event] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.0.iter()
    }

    /// Whether any event in the slot carries `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|e| e.has_id(id))
    }

    /// Appends an event, keeping earlier events in place.
    pub fn push(&mut self, event: Event) {
        self.0.push(event);
    }

    /// Removes every event carrying `id`. Returns whether anything changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|e| !e.has_id(id));
        self.0.len() != before
    }

    /// Replaces every event carrying `id` with a copy of `updated`.
    pub fn replace(&mut self, id: &str, updated: &Event) -> bool {
        let mut changed = false;
        for event in self.0.iter_mut().filter(|e| e.has_id(id)) {
            *event = updated.clone();
            changed = true;
        }
        changed
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Events ordered for a day timeline.
    ///
    /// All-day activities come first, then morning, afternoon and evening.
    /// Events without a time slot count as morning. Ties keep insertion order.
    pub fn timeline(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.0.iter().collect();
        events.sort_by_key(|e| e.time_slot.map_or(1, |slot| slot.order()));
        events
    }
}

impl From<Vec<Event>> for DaySlot {
    fn from(events: Vec<Event>) -> Self {
        Self(events)
    }
}

impl<'a> IntoIterator for &'a DaySlot {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for DaySlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            serializer.serialize_none()
        } else {
            serializer.collect_seq(&self.0)
        }
    }
}

/// Shapes a slot has been stored in over time.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSlot {
    Many(Vec<Event>),
    One(Box<Event>),
}

impl<'de> Deserialize<'de> for DaySlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let events = match Option::<StoredSlot>::deserialize(deserializer)? {
            None => Vec::new(),
            Some(StoredSlot::Many(events)) => events,
            Some(StoredSlot::One(event)) => vec![*event],
        };
        Ok(Self(events))
    }
}
