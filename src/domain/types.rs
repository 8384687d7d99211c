/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like MetricKind, NotificationType,
/// and ID types that are used by Habit, Mood, Notification, and the counter
/// entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a habit
///
/// This is a wrapper around UUID to provide type safety - you can't accidentally
/// pass a habit ID where a mood ID is expected. Habits are keyed by this
/// surrogate identifier; the display name stays a plain mutable attribute, so
/// duplicate names can never make a delete or completion toggle fan out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string (useful for storage loading)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Convert to string representation
    pub fn to_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a mood entry
///
/// Moods were historically keyed by their timestamp, which breaks under
/// colliding timestamps; every entry now carries a surrogate ID instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoodId(pub Uuid);

impl MoodId {
    /// Generate a new random mood ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a mood ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Convert to string representation
    pub fn to_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for MoodId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a notification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub Uuid);

impl NotificationId {
    /// Generate a new random notification ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a notification ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Convert to string representation
    pub fn to_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// The per-day scalar metrics tracked by the counter store
///
/// Each kind has its own day-keyed value series and a single day-independent
/// goal. Water is measured in milliliters, steps as a plain count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricKind {
    /// Daily water intake in milliliters
    Water,
    /// Daily step count
    Steps,
}

impl MetricKind {
    /// Get the display name for this metric
    pub fn display_name(&self) -> &str {
        match self {
            MetricKind::Water => "Water",
            MetricKind::Steps => "Steps",
        }
    }

    /// Stable key fragment used by the persistence layer
    pub fn as_str(&self) -> &str {
        match self {
            MetricKind::Water => "water",
            MetricKind::Steps => "steps",
        }
    }

    /// Default goal when the user never configured one
    ///
    /// 2500 ml of water and 10,000 steps per day.
    pub fn default_goal(&self) -> u32 {
        match self {
            MetricKind::Water => 2500,
            MetricKind::Steps => 10_000,
        }
    }
}

/// The category of an in-app notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    /// Water intake reminders
    Hydration,
    /// Habit check-in reminders
    Habit,
    /// Mood check-in prompts
    Mood,
    /// Progress summaries (habits completed, profile updates)
    Progress,
    /// Streak milestones and other achievements
    Achievement,
}

impl NotificationType {
    /// Get the display name for this notification type
    pub fn display_name(&self) -> &str {
        match self {
            NotificationType::Hydration => "Hydration",
            NotificationType::Habit => "Habit",
            NotificationType::Mood => "Mood",
            NotificationType::Progress => "Progress",
            NotificationType::Achievement => "Achievement",
        }
    }

    /// Emoji icon shown next to notifications of this type
    pub fn icon(&self) -> &str {
        match self {
            NotificationType::Hydration => "💧",
            NotificationType::Habit => "✅",
            NotificationType::Mood => "😊",
            NotificationType::Progress => "💜",
            NotificationType::Achievement => "🔥",
        }
    }
}
