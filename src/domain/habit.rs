/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents something the
/// user checks in on daily, along with validation, the completion set, and
/// the streak computation that derives from it.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitId};

/// Upper bound on backward probes when recomputing a streak.
///
/// The walk starts at today (31 probes covers a full month of history);
/// anything older no longer contributes to the displayed streak.
pub const STREAK_PROBE_LIMIT: u32 = 31;

/// A habit the user wants to check in on every day
///
/// Each habit keeps the set of calendar days it was completed on, plus a
/// derived `streak` field that is recomputed after every completion toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Optional free-form description
    pub description: String,
    /// Current consecutive-day streak, derived from `completion_dates`
    pub streak: u32,
    /// Calendar days on which this habit was completed
    pub completion_dates: BTreeSet<NaiveDate>,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// The creation instant comes from the caller (the store threads its
    /// clock through) so habit creation is deterministic under test clocks.
    pub fn new(
        name: String,
        description: String,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        Ok(Self {
            id: HabitId::new(),
            name,
            description,
            streak: 0,
            completion_dates: BTreeSet::new(),
            created_at,
        })
    }

    /// Create a habit from existing data (used when loading from storage)
    ///
    /// This constructor assumes data is already validated and is mainly used
    /// by the storage layer when loading habits.
    pub fn from_existing(
        id: HabitId,
        name: String,
        description: String,
        streak: u32,
        completion_dates: BTreeSet<NaiveDate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            streak,
            completion_dates,
            created_at,
        }
    }

    /// Check whether this habit was completed on the given day
    pub fn is_completed(&self, day: NaiveDate) -> bool {
        self.completion_dates.contains(&day)
    }

    /// Add or remove a day from the completion set and refresh the streak
    ///
    /// Both directions are idempotent: completing an already-completed day
    /// or un-completing an absent one leaves the set (and streak) unchanged.
    pub fn set_completed(&mut self, day: NaiveDate, completed: bool, today: NaiveDate) {
        if completed {
            self.completion_dates.insert(day);
        } else {
            self.completion_dates.remove(&day);
        }
        self.recompute_streak(today);
    }

    /// Recompute the derived streak field from the completion set
    ///
    /// Walks backward from `today` with a one-day grace: if today itself is
    /// not completed the probe skips to yesterday without breaking the run,
    /// so an unbroken run ending yesterday still reports its full length.
    /// Completing today is only required to extend the streak, not to keep
    /// displaying it.
    pub fn recompute_streak(&mut self, today: NaiveDate) {
        let mut probe = today;
        let mut streak = 0;

        for step in 0..STREAK_PROBE_LIMIT {
            if self.completion_dates.contains(&probe) {
                streak += 1;
            } else if step == 0 {
                // Grace day: today not completed yet, keep walking from yesterday
            } else {
                break;
            }
            probe -= Duration::days(1);
        }

        self.streak = streak;
    }

    /// Count completed days among the `window` most recent calendar days
    ///
    /// The window is today-inclusive, walking backward; used by the weekly
    /// completion percentage.
    pub fn completed_in_window(&self, today: NaiveDate, window: u32) -> u32 {
        let mut probe = today;
        let mut completed = 0;

        for _ in 0..window {
            if self.completion_dates.contains(&probe) {
                completed += 1;
            }
            probe -= Duration::days(1);
        }

        completed
    }

    /// Validate habit name according to business rules
    pub(crate) fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::Validation {
                message: "Habit name cannot be empty".to_string(),
            });
        }

        if trimmed.len() > 100 {
            return Err(DomainError::Validation {
                message: "Habit name cannot be longer than 100 characters".to_string(),
            });
        }

        Ok(())
    }
}
