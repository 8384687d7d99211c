/// Habit store: the habit collection and its derived completion metrics
///
/// Owns streak recomputation and the completion-rate aggregates read by the
/// dashboard and the habit screen. All operations are keyed by the habit's
/// surrogate ID; names are plain display attributes.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::domain::{DomainError, Habit, HabitId};

/// In-memory collection of habits with derived streaks
pub struct HabitStore {
    clock: Arc<dyn Clock>,
    habits: Vec<Habit>,
}

impl HabitStore {
    /// Create an empty store reading time through the given clock
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            habits: Vec::new(),
        }
    }

    /// Create a new habit
    ///
    /// Fails with a validation error when the trimmed name is empty; the
    /// store is left unchanged in that case. Duplicate names are allowed.
    pub fn add(&mut self, name: &str, description: &str) -> Result<HabitId, DomainError> {
        let habit = Habit::new(name.to_string(), description.to_string(), self.clock.now())?;
        let id = habit.id.clone();
        tracing::debug!("Added habit: {} ({})", habit.name, id.to_string());
        self.habits.push(habit);
        Ok(id)
    }

    /// Remove a habit by ID
    ///
    /// Idempotent: returns whether a habit was actually removed.
    pub fn remove(&mut self, id: &HabitId) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| &h.id != id);
        let removed = self.habits.len() < before;
        if removed {
            tracing::debug!("Removed habit {}", id.to_string());
        }
        removed
    }

    /// Add or remove a day from a habit's completion set and refresh its streak
    pub fn set_completion(
        &mut self,
        id: &HabitId,
        completed: bool,
        day: NaiveDate,
    ) -> Result<(), DomainError> {
        let today = self.clock.today();
        let habit = self
            .habits
            .iter_mut()
            .find(|h| &h.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("habit {}", id.to_string())))?;
        habit.set_completed(day, completed, today);
        Ok(())
    }

    /// Mark a habit completed for today
    pub fn mark_completed_today(&mut self, id: &HabitId) -> Result<(), DomainError> {
        let today = self.clock.today();
        self.set_completion(id, true, today)
    }

    /// Remove today's completion from a habit
    pub fn mark_incomplete_today(&mut self, id: &HabitId) -> Result<(), DomainError> {
        let today = self.clock.today();
        self.set_completion(id, false, today)
    }

    /// Look up a habit by ID
    pub fn get(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| &h.id == id)
    }

    /// All habits whose name matches exactly
    ///
    /// Duplicate names are legal, so this can return more than one habit;
    /// callers that only hold a name decide which match they meant.
    pub fn find_by_name(&self, name: &str) -> Vec<&Habit> {
        self.habits.iter().filter(|h| h.name == name).collect()
    }

    /// A cloned snapshot of all habits, in insertion order
    pub fn habits(&self) -> Vec<Habit> {
        self.habits.clone()
    }

    /// Number of habits in the store
    pub fn len(&self) -> usize {
        self.habits.len()
    }

    /// Whether the store holds no habits
    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// How many habits are completed today
    pub fn completed_today_count(&self) -> usize {
        let today = self.clock.today();
        self.habits.iter().filter(|h| h.is_completed(today)).count()
    }

    /// Percentage of habits completed today (0.0 for an empty store)
    pub fn completion_rate(&self) -> f64 {
        if self.habits.is_empty() {
            return 0.0;
        }
        let completed = self.completed_today_count();
        (completed as f64 / self.habits.len() as f64) * 100.0
    }

    /// Integer percentage of completions over the last 7 days, across all habits
    ///
    /// Sums each habit's completed days in the 7-day window (today inclusive)
    /// and floor-divides by `habits * 7`. Zero when the store is empty.
    pub fn weekly_completion_percentage(&self) -> u32 {
        if self.habits.is_empty() {
            return 0;
        }

        let today = self.clock.today();
        let total_days = 7u32;
        let total_completions: u32 = self
            .habits
            .iter()
            .map(|h| h.completed_in_window(today, total_days))
            .sum();

        let max_possible = self.habits.len() as u32 * total_days;
        (total_completions * 100) / max_possible
    }

    /// The largest current streak across all habits (the "day streak" stat)
    pub fn longest_current_streak(&self) -> u32 {
        self.habits.iter().map(|h| h.streak).max().unwrap_or(0)
    }

    /// Replace the collection with loaded data
    ///
    /// Streaks are recomputed against the current clock so stale persisted
    /// values cannot survive a load across midnight.
    pub fn load(&mut self, habits: Vec<Habit>) {
        let today = self.clock.today();
        self.habits = habits;
        for habit in &mut self.habits {
            habit.recompute_streak(today);
        }
        tracing::debug!("Loaded {} habits", self.habits.len());
    }

    /// The collection as it should be persisted
    pub fn snapshot(&self) -> Vec<Habit> {
        self.habits.clone()
    }
}
