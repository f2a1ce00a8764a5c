//! Plan days and themes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A day that can hold events in a weekend plan.
///
/// Only the four calendar days are representable, so plan metadata such as
/// the theme or the long-weekend flag can never be addressed as a day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Friday,
    Saturday,
    Sunday,
    Monday,
}

impl Day {
    /// All days in calendar order.
    pub const ALL: [Day; 4] = [Day::Friday, Day::Saturday, Day::Sunday, Day::Monday];

    /// Days of a regular two-day weekend.
    pub const REGULAR: [Day; 2] = [Day::Saturday, Day::Sunday];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
            Day::Monday => "monday",
        }
    }

    /// Capitalized name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
        }
    }

    /// Whether the day only exists in a long weekend.
    pub fn is_long_weekend_only(&self) -> bool {
        matches!(self, Day::Friday | Day::Monday)
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "friday" => Ok(Day::Friday),
            "saturday" => Ok(Day::Saturday),
            "sunday" => Ok(Day::Sunday),
            "monday" => Ok(Day::Monday),
            _ => Err(format!("Invalid day: {s}")),
        }
    }
}

/// Mood applied to a whole weekend plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Lazy,
    Adventurous,
    Family,
    Romantic,
    Cultural,
    Active,
    Social,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Lazy,
        Theme::Adventurous,
        Theme::Family,
        Theme::Romantic,
        Theme::Cultural,
        Theme::Active,
        Theme::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Lazy => "lazy",
            Theme::Adventurous => "adventurous",
            Theme::Family => "family",
            Theme::Romantic => "romantic",
            Theme::Cultural => "cultural",
            Theme::Active => "active",
            Theme::Social => "social",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Lazy => "Lazy Weekend",
            Theme::Adventurous => "Adventure Weekend",
            Theme::Family => "Family Weekend",
            Theme::Romantic => "Romantic Getaway",
            Theme::Cultural => "Cultural Weekend",
            Theme::Active => "Active Weekend",
            Theme::Social => "Social Weekend",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Theme::Lazy => "Slow mornings, long brunches and nowhere to be",
            Theme::Adventurous => "Trails, water and something you have never tried",
            Theme::Family => "Activities everyone from toddlers to grandparents enjoys",
            Theme::Romantic => "Quiet dinners, sunsets and time for two",
            Theme::Cultural => "Museums, galleries, theatre and local history",
            Theme::Active => "Runs, rides and plenty of fresh air",
            Theme::Social => "Markets, meetups and evenings with friends",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| format!("Invalid theme: {s}"))
    }
}
