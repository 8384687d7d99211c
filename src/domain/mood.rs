/// Mood entity and the emoji-to-value mapping
///
/// This module defines the Mood struct that records how the user felt on a
/// given day, and the fixed table that turns a mood emoji into a 1-5 value
/// for aggregation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::MoodId;

/// The neutral mood value, used as the fallback for unknown emojis and as
/// the defined average of an empty trend window.
pub const NEUTRAL_MOOD_VALUE: u8 = 3;

/// A single mood entry
///
/// At most one entry per calendar day is retained for aggregation; logging a
/// second mood on the same day replaces the first (the mood store enforces
/// this).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mood {
    /// Unique identifier for this entry
    pub id: MoodId,
    /// The emoji the user picked (e.g., "😊")
    pub emoji: String,
    /// Optional free-form note
    pub note: String,
    /// When this mood was logged
    pub timestamp: DateTime<Utc>,
}

impl Mood {
    /// Create a new mood entry
    ///
    /// The timestamp comes from the caller so logging stays deterministic
    /// under test clocks.
    pub fn new(emoji: String, note: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: MoodId::new(),
            emoji,
            note,
            timestamp,
        }
    }

    /// Create a mood from existing data (used when loading from storage)
    pub fn from_existing(
        id: MoodId,
        emoji: String,
        note: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            emoji,
            note,
            timestamp,
        }
    }

    /// The 1-5 aggregation value for this entry's emoji
    pub fn value(&self) -> u8 {
        mood_value(&self.emoji)
    }

    /// The calendar day this entry falls on
    pub fn day(&self) -> NaiveDate {
        self.timestamp.naive_utc().date()
    }
}

/// Map a mood emoji to its 1-5 aggregation value
///
/// This is a total function: any emoji outside the table maps to neutral (3),
/// it never fails.
pub fn mood_value(emoji: &str) -> u8 {
    match emoji {
        "😢" | "😭" => 1,
        "😔" | "😞" => 2,
        "😐" | "😑" => 3,
        "😊" | "🙂" => 4,
        "😄" | "😁" | "😍" => 5,
        "😴" => 3,
        "🤔" => 3,
        "😤" | "😠" => 2,
        "😌" => 4,
        _ => NEUTRAL_MOOD_VALUE,
    }
}
