/// Clock capability and calendar-day arithmetic
///
/// Every time-dependent computation in the stores (streak walks, retention
/// windows, day bucketing) reads the current instant through a Clock handle
/// instead of the system clock directly, so the logic is deterministically
/// testable without mocking time.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Source of the current instant
///
/// Stores hold an `Arc<dyn Clock>` and read all "now"/"today" decisions
/// through it.
pub trait Clock: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar day
    fn today(&self) -> NaiveDate {
        self.now().naive_utc().date()
    }
}

/// The wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A settable clock for deterministic tests
///
/// Interior mutability lets tests advance time through a shared
/// `Arc<FixedClock>` while the stores keep reading it.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock frozen at the given instant
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Create a shared clock frozen at midday on the given date
    ///
    /// Midday keeps day arithmetic well away from midnight boundaries.
    pub fn at_midday(date: NaiveDate) -> Arc<Self> {
        let noon = date.and_hms_opt(12, 0, 0).expect("valid time of day").and_utc();
        Arc::new(Self::new(noon))
    }

    /// Move the clock to a new instant
    pub fn set(&self, now: DateTime<Utc>) {
        *self.lock() = now;
    }

    /// Advance the clock by a duration
    pub fn advance(&self, duration: Duration) {
        let mut now = self.lock();
        *now += duration;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        // A poisoned test clock still holds a valid instant
        self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.lock()
    }
}

/// The calendar day an instant falls on
pub fn day_of(instant: DateTime<Utc>) -> NaiveDate {
    instant.naive_utc().date()
}

/// Whether two instants fall on the same calendar day
pub fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    day_of(a) == day_of(b)
}

/// The `n` most recent calendar days: today, today-1, ... today-(n-1)
pub fn recent_days(today: NaiveDate, n: u32) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(n as usize);
    let mut probe = today;
    for _ in 0..n {
        days.push(probe);
        probe -= Duration::days(1);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let clock = FixedClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::days(2));
        assert_eq!(clock.now(), start + Duration::days(2));
    }

    #[test]
    fn test_same_day_across_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let before = date.and_hms_opt(23, 59, 0).unwrap().and_utc();
        let after = before + Duration::minutes(2);
        assert!(!same_day(before, after));
    }

    #[test]
    fn test_recent_days_ordering() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let days = recent_days(today, 3);
        assert_eq!(
            days,
            vec![
                today,
                NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            ]
        );
    }
}
