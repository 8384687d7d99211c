/// SQLite implementation of the key-value storage interface
///
/// This module provides the concrete SQLite implementation for storing and
/// retrieving tracker data. Each collection is one row in the kv table,
/// JSON-encoded; replace-all upserts the row, load-all reads and decodes it.

use std::path::PathBuf;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{Habit, Mood, Notification, ReminderSettings, UserProfile};
use crate::storage::{migrations, KeyValueStorage, StorageError};
use crate::store::CounterSnapshot;

// Row keys for each persisted collection
const KEY_HABITS: &str = "habits";
const KEY_MOODS: &str = "moods";
const KEY_NOTIFICATIONS: &str = "notifications";
const KEY_COUNTERS: &str = "counters";
const KEY_PROFILE: &str = "user_profile";
const KEY_REMINDERS: &str = "reminder_settings";

/// SQLite-based key-value storage
///
/// This struct holds a connection to the SQLite database and implements all
/// the persistence operations defined in the KeyValueStorage trait.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance
    ///
    /// This opens the database file and runs any necessary migrations to
    /// ensure the schema is up to date.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Create an in-memory storage instance (useful for tests and dry runs)
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }

    /// Read and decode a JSON value by key; None when the key is absent
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Encode and upsert a JSON value under a key
    fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, json],
        )?;
        tracing::debug!("Persisted key: {}", key);
        Ok(())
    }
}

impl KeyValueStorage for SqliteStorage {
    fn load_habits(&self) -> Result<Vec<Habit>, StorageError> {
        Ok(self.get_json(KEY_HABITS)?.unwrap_or_default())
    }

    fn replace_habits(&self, habits: &[Habit]) -> Result<(), StorageError> {
        self.put_json(KEY_HABITS, &habits)
    }

    fn load_moods(&self) -> Result<Vec<Mood>, StorageError> {
        Ok(self.get_json(KEY_MOODS)?.unwrap_or_default())
    }

    fn replace_moods(&self, moods: &[Mood]) -> Result<(), StorageError> {
        self.put_json(KEY_MOODS, &moods)
    }

    fn load_notifications(&self) -> Result<Vec<Notification>, StorageError> {
        Ok(self.get_json(KEY_NOTIFICATIONS)?.unwrap_or_default())
    }

    fn replace_notifications(&self, notifications: &[Notification]) -> Result<(), StorageError> {
        self.put_json(KEY_NOTIFICATIONS, &notifications)
    }

    fn load_counters(&self) -> Result<CounterSnapshot, StorageError> {
        Ok(self.get_json(KEY_COUNTERS)?.unwrap_or_default())
    }

    fn replace_counters(&self, counters: &CounterSnapshot) -> Result<(), StorageError> {
        self.put_json(KEY_COUNTERS, counters)
    }

    fn load_profile(&self) -> Result<UserProfile, StorageError> {
        Ok(self.get_json(KEY_PROFILE)?.unwrap_or_default())
    }

    fn replace_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        self.put_json(KEY_PROFILE, profile)
    }

    fn load_reminder_settings(&self) -> Result<ReminderSettings, StorageError> {
        Ok(self.get_json(KEY_REMINDERS)?.unwrap_or_default())
    }

    fn replace_reminder_settings(&self, settings: &ReminderSettings) -> Result<(), StorageError> {
        self.put_json(KEY_REMINDERS, settings)
    }
}
