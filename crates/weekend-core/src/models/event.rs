//! Event model and its optional classifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A catalog activity that can be saved, favorited and planned.
///
/// Events are identified by `id` alone. Two values with the same id are the
/// same logical event even when their other fields differ, which is what
/// happens after an edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier of the event
    pub id: String,

    /// Short title shown in lists
    pub title: String,

    /// Longer free-text description
    pub description: String,

    /// Where the activity takes place
    pub location: String,

    /// Free-text duration such as "2-3 hours"
    pub duration: String,

    /// Rating, nominally between 1.0 and 5.0
    pub rating: f64,

    /// Image reference (URL or asset path)
    pub image: String,

    /// Free-text category such as "Outdoors"
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe: Option<Vibe>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<TimeSlot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
}

impl Event {
    /// Whether this event carries the given id.
    pub fn has_id(&self, id: &str) -> bool {
        self.id == id
    }

    /// Lowercased text blob used by catalog search.
    pub(crate) fn search_text(&self) -> String {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.category.as_str(),
            self.location.as_str(),
            self.vibe.map(|v| v.as_str()).unwrap_or_default(),
            self.time_slot.map(|t| t.as_str()).unwrap_or_default(),
            self.difficulty.map(|d| d.as_str()).unwrap_or_default(),
            self.cost.map(|c| c.as_str()).unwrap_or_default(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// Mood of an activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Happy,
    Relaxed,
    Energetic,
    Adventurous,
    Social,
    Peaceful,
    Chill,
    Inspiring,
    Fun,
    Educational,
}

impl Vibe {
    pub const ALL: [Vibe; 10] = [
        Vibe::Happy,
        Vibe::Relaxed,
        Vibe::Energetic,
        Vibe::Adventurous,
        Vibe::Social,
        Vibe::Peaceful,
        Vibe::Chill,
        Vibe::Inspiring,
        Vibe::Fun,
        Vibe::Educational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Vibe::Happy => "happy",
            Vibe::Relaxed => "relaxed",
            Vibe::Energetic => "energetic",
            Vibe::Adventurous => "adventurous",
            Vibe::Social => "social",
            Vibe::Peaceful => "peaceful",
            Vibe::Chill => "chill",
            Vibe::Inspiring => "inspiring",
            Vibe::Fun => "fun",
            Vibe::Educational => "educational",
        }
    }
}

impl FromStr for Vibe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Vibe::ALL
            .into_iter()
            .find(|v| v.as_str() == lower)
            .ok_or_else(|| format!("Invalid vibe: {s}"))
    }
}

/// Part of the day an activity fits into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    AllDay,
}

impl TimeSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
            TimeSlot::AllDay => "all-day",
        }
    }

    /// Position on a day's timeline. All-day activities lead the day.
    pub fn order(&self) -> u8 {
        match self {
            TimeSlot::AllDay => 0,
            TimeSlot::Morning => 1,
            TimeSlot::Afternoon => 2,
            TimeSlot::Evening => 3,
        }
    }

    /// Human-readable label for timelines.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
            TimeSlot::AllDay => "All Day",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(TimeSlot::Morning),
            "afternoon" => Ok(TimeSlot::Afternoon),
            "evening" => Ok(TimeSlot::Evening),
            "all-day" | "allday" | "all_day" => Ok(TimeSlot::AllDay),
            _ => Err(format!("Invalid time slot: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Challenging => "challenging",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "moderate" => Ok(Difficulty::Moderate),
            "challenging" => Ok(Difficulty::Challenging),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Cost {
    Free,
    Low,
    Medium,
    High,
}

impl Cost {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cost::Free => "free",
            Cost::Low => "low",
            Cost::Medium => "medium",
            Cost::High => "high",
        }
    }
}

impl FromStr for Cost {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Cost::Free),
            "low" => Ok(Cost::Low),
            "medium" => Ok(Cost::Medium),
            "high" => Ok(Cost::High),
            _ => Err(format!("Invalid cost: {s}")),
        }
    }
}
