/// Public library interface for the wellness tracker core
///
/// This module exports the stores, the metrics facade, and the top-level
/// WellnessTracker that wires them to the persistence layer for use by the
/// CLI binary, the screens, and tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

// Internal modules
mod clock;
mod domain;
mod metrics;
mod storage;
mod store;

// Re-export public modules and types
pub use clock::{day_of, recent_days, same_day, Clock, FixedClock, SystemClock};
pub use domain::*;
pub use metrics::{DashboardSnapshot, MetricsEngine};
pub use storage::{KeyValueStorage, SqliteStorage, StorageError};
pub use store::*;

/// Errors that can occur at the tracker's outer surface
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The assembled tracker: storage, the four stores, and the metrics facade
///
/// Loads every collection from storage on open; mutations happen in memory
/// through the store handles and are written back wholesale by `persist`.
pub struct WellnessTracker {
    storage: SqliteStorage,
    clock: Arc<dyn Clock>,
    habits: Arc<Mutex<HabitStore>>,
    moods: Arc<Mutex<MoodStore>>,
    notifications: Arc<Mutex<NotificationStore>>,
    counters: Arc<Mutex<CounterStore>>,
    metrics: MetricsEngine,
    profile: Mutex<UserProfile>,
    reminders: Mutex<ReminderSettings>,
}

impl WellnessTracker {
    /// Open a tracker against the given database path using the wall clock
    pub fn open(db_path: PathBuf) -> Result<Self, TrackerError> {
        Self::open_with_clock(db_path, Arc::new(SystemClock))
    }

    /// Open a tracker with an explicit clock (tests inject a FixedClock)
    pub fn open_with_clock(
        db_path: PathBuf,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, TrackerError> {
        tracing::info!("Opening wellness tracker with database: {:?}", db_path);
        let storage = SqliteStorage::new(db_path)?;
        Self::from_storage(storage, clock)
    }

    /// Assemble a tracker around an already-open storage handle
    pub fn from_storage(
        storage: SqliteStorage,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, TrackerError> {
        let mut habit_store = HabitStore::new(clock.clone());
        habit_store.load(storage.load_habits()?);

        let mut mood_store = MoodStore::new(clock.clone());
        mood_store.load(storage.load_moods()?);

        let mut notification_store = NotificationStore::new(clock.clone());
        notification_store.load(storage.load_notifications()?);

        let mut counter_store = CounterStore::new(clock.clone());
        counter_store.load(storage.load_counters()?);

        let profile = storage.load_profile()?;
        let reminders = storage.load_reminder_settings()?;

        let habits = Arc::new(Mutex::new(habit_store));
        let moods = Arc::new(Mutex::new(mood_store));
        let notifications = Arc::new(Mutex::new(notification_store));
        let counters = Arc::new(Mutex::new(counter_store));

        let metrics = MetricsEngine::new(
            habits.clone(),
            moods.clone(),
            notifications.clone(),
            counters.clone(),
        );

        Ok(Self {
            storage,
            clock,
            habits,
            moods,
            notifications,
            counters,
            metrics,
            profile: Mutex::new(profile),
            reminders: Mutex::new(reminders),
        })
    }

    /// Write every collection back to storage
    pub fn persist(&self) -> Result<(), TrackerError> {
        self.storage
            .replace_habits(&lock(&self.habits, "habit")?.snapshot())?;
        self.storage
            .replace_moods(&lock(&self.moods, "mood")?.snapshot())?;
        self.storage
            .replace_notifications(&lock(&self.notifications, "notification")?.snapshot())?;
        self.storage
            .replace_counters(&lock(&self.counters, "counter")?.snapshot())?;
        self.storage.replace_profile(&*lock(&self.profile, "profile")?)?;
        self.storage
            .replace_reminder_settings(&*lock(&self.reminders, "reminder settings")?)?;
        tracing::debug!("Persisted all collections");
        Ok(())
    }

    /// Shared handle to the habit store
    pub fn habits(&self) -> Arc<Mutex<HabitStore>> {
        self.habits.clone()
    }

    /// Shared handle to the mood store
    pub fn moods(&self) -> Arc<Mutex<MoodStore>> {
        self.moods.clone()
    }

    /// Shared handle to the notification store
    pub fn notifications(&self) -> Arc<Mutex<NotificationStore>> {
        self.notifications.clone()
    }

    /// Shared handle to the counter store
    pub fn counters(&self) -> Arc<Mutex<CounterStore>> {
        self.counters.clone()
    }

    /// The read-side metrics facade
    pub fn metrics(&self) -> &MetricsEngine {
        &self.metrics
    }

    /// The clock this tracker reads time through
    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    /// The current user profile
    pub fn profile(&self) -> Result<UserProfile, TrackerError> {
        Ok(lock(&self.profile, "profile")?.clone())
    }

    /// Replace the user profile and push the profile-updated notification
    pub fn update_profile(&self, profile: UserProfile) -> Result<(), TrackerError> {
        *lock(&self.profile, "profile")? = profile;
        lock(&self.notifications, "notification")?.notify(
            NotificationType::Progress,
            "Profile Updated",
            "Your profile information has been successfully updated.",
        );
        Ok(())
    }

    /// The current reminder settings
    pub fn reminder_settings(&self) -> Result<ReminderSettings, TrackerError> {
        Ok(lock(&self.reminders, "reminder settings")?.clone())
    }

    /// Replace the reminder settings
    pub fn set_reminder_settings(&self, settings: ReminderSettings) -> Result<(), TrackerError> {
        *lock(&self.reminders, "reminder settings")? = settings;
        Ok(())
    }
}

/// Lock a tracker-owned mutex, mapping poisoning to an aggregation error
fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> Result<MutexGuard<'a, T>, TrackerError> {
    mutex
        .lock()
        .map_err(|_| TrackerError::Domain(DomainError::Aggregation(format!("{} state is poisoned", what))))
}
