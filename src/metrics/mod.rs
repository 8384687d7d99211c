/// Metrics facade composing the four stores into display-ready aggregates
///
/// This is a pure read-side composition: it never mutates store state, it
/// only locks, reads, and combines. The dashboard snapshot is
/// whole-or-nothing - if any sub-read fails the entire snapshot fails rather
/// than returning a partially populated result.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use crate::domain::{DomainError, MetricKind};
use crate::store::{CounterStore, HabitStore, MoodStore, NotificationStore};

/// Everything the dashboard screen needs, in one read
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub habits_completed_today: usize,
    pub habits_total: usize,
    pub current_water_ml: u32,
    pub water_goal_ml: u32,
    pub today_mood_emoji: Option<String>,
    pub step_count: u32,
    pub step_goal: u32,
    pub unread_notifications: usize,
}

/// Read-side composition over shared store handles
///
/// Each store sits behind its own mutex so a background feed (e.g. the step
/// source) and a foreground reader can never race on a read-modify-write.
pub struct MetricsEngine {
    habits: Arc<Mutex<HabitStore>>,
    moods: Arc<Mutex<MoodStore>>,
    notifications: Arc<Mutex<NotificationStore>>,
    counters: Arc<Mutex<CounterStore>>,
}

impl MetricsEngine {
    /// Create a facade over the given store handles
    pub fn new(
        habits: Arc<Mutex<HabitStore>>,
        moods: Arc<Mutex<MoodStore>>,
        notifications: Arc<Mutex<NotificationStore>>,
        counters: Arc<Mutex<CounterStore>>,
    ) -> Self {
        Self {
            habits,
            moods,
            notifications,
            counters,
        }
    }

    /// Assemble the dashboard snapshot
    ///
    /// Fails with an aggregation error when any store cannot be read; no
    /// partial snapshot is ever returned.
    pub fn dashboard_snapshot(&self) -> Result<DashboardSnapshot, DomainError> {
        let habits = lock_store(&self.habits, "habit")?;
        let moods = lock_store(&self.moods, "mood")?;
        let notifications = lock_store(&self.notifications, "notification")?;
        let counters = lock_store(&self.counters, "counter")?;

        Ok(DashboardSnapshot {
            habits_completed_today: habits.completed_today_count(),
            habits_total: habits.len(),
            current_water_ml: counters.get_today(MetricKind::Water),
            water_goal_ml: counters.goal(MetricKind::Water),
            today_mood_emoji: moods.today_mood().map(|m| m.emoji),
            step_count: counters.get_today(MetricKind::Steps),
            step_goal: counters.goal(MetricKind::Steps),
            unread_notifications: notifications.unread_count(),
        })
    }

    /// Percentage of habits completed today
    pub fn todays_completion_rate(&self) -> Result<f64, DomainError> {
        Ok(lock_store(&self.habits, "habit")?.completion_rate())
    }

    /// Integer percentage of habit completions over the last 7 days
    pub fn weekly_completion_percentage(&self) -> Result<u32, DomainError> {
        Ok(lock_store(&self.habits, "habit")?.weekly_completion_percentage())
    }

    /// Mean mood value over the last 7 days (3.0 when no entries)
    pub fn weekly_mood_average(&self) -> Result<f64, DomainError> {
        Ok(lock_store(&self.moods, "mood")?.average_mood(7))
    }

    /// Average water intake over the last 7 days, skipping empty days
    pub fn weekly_water_average(&self) -> Result<f64, DomainError> {
        Ok(lock_store(&self.counters, "counter")?.weekly_average(MetricKind::Water))
    }

    /// Number of unread notifications
    pub fn unread_notifications(&self) -> Result<usize, DomainError> {
        Ok(lock_store(&self.notifications, "notification")?.unread_count())
    }
}

/// Lock a store for reading, mapping a poisoned mutex to an aggregation error
fn lock_store<'a, T>(
    store: &'a Mutex<T>,
    what: &str,
) -> Result<MutexGuard<'a, T>, DomainError> {
    store
        .lock()
        .map_err(|_| DomainError::Aggregation(format!("{} store is poisoned", what)))
}
