/// User profile and reminder settings
///
/// These are plain data carriers read by external collaborators: the reminder
/// scheduler reads `ReminderSettings` to decide when to fire, and the profile
/// screen reads and writes `UserProfile`. The core never schedules anything
/// itself.

use serde::{Deserialize, Serialize};

/// Settings consumed by the external reminder scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderSettings {
    /// Whether periodic hydration reminders are on
    pub hydration_reminder_enabled: bool,
    /// Minutes between hydration reminders
    pub hydration_reminder_interval_minutes: f64,
    /// Whether habit check-in reminders are on
    pub habit_reminders_enabled: bool,
    /// Whether mood check-in reminders are on
    pub mood_reminders_enabled: bool,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            hydration_reminder_enabled: false,
            hydration_reminder_interval_minutes: 60.0,
            habit_reminders_enabled: true,
            mood_reminders_enabled: false,
        }
    }
}

/// The user's profile as entered on the profile screen
///
/// All fields are free-form strings the way the user typed them; the core
/// does not interpret them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub height: String,
    pub weight: String,
    pub gender: String,
    pub primary_goal: String,
    pub target_weight: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: String::new(),
            height: String::new(),
            weight: String::new(),
            gender: String::new(),
            primary_goal: String::new(),
            target_weight: String::new(),
        }
    }
}
