/// Counter store: per-day scalar metrics (water, steps) and their goals
///
/// Values are keyed by (metric kind, calendar day); goals are a single
/// day-independent scalar per kind. Reading an unset day yields 0, never an
/// error. An explicitly cleared day keeps a stored 0, which is distinct from
/// "unset" in storage but excluded from weekly averaging like any other
/// non-positive value.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::{recent_days, Clock};
use crate::domain::{DomainError, MetricKind};

/// One persisted per-day counter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterValue {
    pub kind: MetricKind,
    pub day: NaiveDate,
    pub value: u32,
}

/// One persisted goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterGoal {
    pub kind: MetricKind,
    pub goal: u32,
}

/// The counter store's full persistable state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub values: Vec<CounterValue>,
    pub goals: Vec<CounterGoal>,
}

/// In-memory per-day counters with goals
pub struct CounterStore {
    clock: Arc<dyn Clock>,
    values: BTreeMap<MetricKind, BTreeMap<NaiveDate, u32>>,
    goals: BTreeMap<MetricKind, u32>,
}

impl CounterStore {
    /// Create an empty store reading time through the given clock
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            values: BTreeMap::new(),
            goals: BTreeMap::new(),
        }
    }

    /// The value recorded for a day, 0 when unset
    pub fn get(&self, kind: MetricKind, day: NaiveDate) -> u32 {
        self.values
            .get(&kind)
            .and_then(|days| days.get(&day))
            .copied()
            .unwrap_or(0)
    }

    /// Today's value, 0 when unset
    pub fn get_today(&self, kind: MetricKind) -> u32 {
        self.get(kind, self.clock.today())
    }

    /// Record a value for a day, overwriting any previous value
    pub fn set(&mut self, kind: MetricKind, day: NaiveDate, value: u32) {
        self.values.entry(kind).or_default().insert(day, value);
    }

    /// Record today's value
    pub fn set_today(&mut self, kind: MetricKind, value: u32) {
        let today = self.clock.today();
        self.set(kind, today, value);
    }

    /// Add to a day's value (saturating)
    pub fn increment(&mut self, kind: MetricKind, day: NaiveDate, delta: u32) {
        let entry = self.values.entry(kind).or_default().entry(day).or_insert(0);
        *entry = entry.saturating_add(delta);
    }

    /// Add to today's value
    pub fn increment_today(&mut self, kind: MetricKind, delta: u32) {
        let today = self.clock.today();
        self.increment(kind, today, delta);
    }

    /// Reset a day to an explicit zero
    ///
    /// The zero stays stored: a cleared day still "has data", unlike an
    /// unset one.
    pub fn clear(&mut self, kind: MetricKind, day: NaiveDate) {
        self.set(kind, day, 0);
    }

    /// Reset today to an explicit zero
    pub fn clear_today(&mut self, kind: MetricKind) {
        let today = self.clock.today();
        self.clear(kind, today);
    }

    /// The goal for a metric; the built-in default when never configured
    pub fn goal(&self, kind: MetricKind) -> u32 {
        self.goals
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_goal())
    }

    /// Set the goal for a metric
    ///
    /// A zero goal is representable; it surfaces as a division-by-zero error
    /// from `progress_percent` rather than being rejected here.
    pub fn set_goal(&mut self, kind: MetricKind, goal: u32) {
        self.goals.insert(kind, goal);
    }

    /// A day's value as a rounded percentage of the goal
    ///
    /// Fails with `DivisionByZero` when the goal is 0 instead of producing
    /// infinity.
    pub fn progress_percent(&self, kind: MetricKind, day: NaiveDate) -> Result<u32, DomainError> {
        let goal = self.goal(kind);
        if goal == 0 {
            return Err(DomainError::DivisionByZero(format!(
                "{} goal is zero",
                kind.display_name()
            )));
        }
        let value = self.get(kind, day);
        Ok(((f64::from(value) / f64::from(goal)) * 100.0).round() as u32)
    }

    /// Today's progress percentage
    pub fn progress_percent_today(&self, kind: MetricKind) -> Result<u32, DomainError> {
        self.progress_percent(kind, self.clock.today())
    }

    /// Average over the 7 most recent days, counting only days with a
    /// positive value
    ///
    /// A day explicitly cleared to 0 is excluded, matching the product's
    /// observed behavior; 0.0 when no day in the window is positive.
    pub fn weekly_average(&self, kind: MetricKind) -> f64 {
        let today = self.clock.today();
        let mut total: u64 = 0;
        let mut days_with_data: u32 = 0;

        for day in recent_days(today, 7) {
            let value = self.get(kind, day);
            if value > 0 {
                total += u64::from(value);
                days_with_data += 1;
            }
        }

        if days_with_data == 0 {
            0.0
        } else {
            total as f64 / f64::from(days_with_data)
        }
    }

    /// Drop every stored per-day value for a metric
    ///
    /// Goals survive; this is the "start the history over" maintenance
    /// operation.
    pub fn reset_daily(&mut self, kind: MetricKind) {
        self.values.remove(&kind);
        tracing::debug!("Reset daily values for {}", kind.display_name());
    }

    /// Replace the store's state with loaded data
    pub fn load(&mut self, snapshot: CounterSnapshot) {
        self.values.clear();
        self.goals.clear();
        for entry in snapshot.values {
            self.values
                .entry(entry.kind)
                .or_default()
                .insert(entry.day, entry.value);
        }
        for goal in snapshot.goals {
            self.goals.insert(goal.kind, goal.goal);
        }
    }

    /// The store's state as it should be persisted
    pub fn snapshot(&self) -> CounterSnapshot {
        let values = self
            .values
            .iter()
            .flat_map(|(kind, days)| {
                days.iter().map(|(day, value)| CounterValue {
                    kind: *kind,
                    day: *day,
                    value: *value,
                })
            })
            .collect();
        let goals = self
            .goals
            .iter()
            .map(|(kind, goal)| CounterGoal {
                kind: *kind,
                goal: *goal,
            })
            .collect();
        CounterSnapshot { values, goals }
    }
}
