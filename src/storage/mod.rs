/// Storage layer for persisting tracker data
///
/// This module handles durable persistence through a SQLite-backed key-value
/// table with JSON-encoded values. It provides load-all/replace-all
/// operations per collection; a successful replace is visible to the next
/// load on the same connection (read-your-writes, no cross-process
/// consistency).

pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use sqlite::*;

use thiserror::Error;

use crate::domain::{Habit, Mood, Notification, ReminderSettings, UserProfile};
use crate::store::CounterSnapshot;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the persistence interface for the tracker
///
/// Each collection is loaded and replaced wholesale; the stores own all
/// in-memory mutation and hand full snapshots back for persistence. This
/// trait allows swapping SQLite for another backing store while keeping the
/// same interface.
pub trait KeyValueStorage {
    /// Load all persisted habits (empty when never saved)
    fn load_habits(&self) -> Result<Vec<Habit>, StorageError>;

    /// Replace all persisted habits
    fn replace_habits(&self, habits: &[Habit]) -> Result<(), StorageError>;

    /// Load all persisted moods (empty when never saved)
    fn load_moods(&self) -> Result<Vec<Mood>, StorageError>;

    /// Replace all persisted moods
    fn replace_moods(&self, moods: &[Mood]) -> Result<(), StorageError>;

    /// Load all persisted notifications (empty when never saved)
    fn load_notifications(&self) -> Result<Vec<Notification>, StorageError>;

    /// Replace all persisted notifications
    fn replace_notifications(&self, notifications: &[Notification]) -> Result<(), StorageError>;

    /// Load the persisted counter state (empty when never saved)
    fn load_counters(&self) -> Result<CounterSnapshot, StorageError>;

    /// Replace the persisted counter state
    fn replace_counters(&self, counters: &CounterSnapshot) -> Result<(), StorageError>;

    /// Load the user profile (defaults when never saved)
    fn load_profile(&self) -> Result<UserProfile, StorageError>;

    /// Replace the user profile
    fn replace_profile(&self, profile: &UserProfile) -> Result<(), StorageError>;

    /// Load the reminder settings (defaults when never saved)
    fn load_reminder_settings(&self) -> Result<ReminderSettings, StorageError>;

    /// Replace the reminder settings
    fn replace_reminder_settings(&self, settings: &ReminderSettings) -> Result<(), StorageError>;
}
