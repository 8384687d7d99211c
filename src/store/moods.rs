/// Mood store: same-day replacement, retention, and trend reads
///
/// Owns the one-mood-per-day invariant and the 30-day sliding retention
/// window, both enforced at write time.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::clock::{day_of, Clock};
use crate::domain::{Mood, MoodId, NEUTRAL_MOOD_VALUE};

/// Entries older than this many days (from the most recent write) are dropped
pub const MOOD_RETENTION_DAYS: i64 = 30;

/// In-memory collection of mood entries
pub struct MoodStore {
    clock: Arc<dyn Clock>,
    moods: Vec<Mood>,
}

impl MoodStore {
    /// Create an empty store reading time through the given clock
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            moods: Vec::new(),
        }
    }

    /// Log a mood for now
    ///
    /// If an entry already exists for today it is replaced in place, keeping
    /// no history of the overwritten value.
    pub fn log(&mut self, emoji: &str, note: &str) -> MoodId {
        let now = self.clock.now();
        self.log_at(emoji, note, now)
    }

    /// Log a mood for an explicit instant
    ///
    /// The same-day replacement scans against the entry's own calendar day;
    /// the retention filter always runs against the clock's "now" (write-time
    /// evaluation, not read-time).
    pub fn log_at(&mut self, emoji: &str, note: &str, timestamp: DateTime<Utc>) -> MoodId {
        let mood = Mood::new(emoji.to_string(), note.to_string(), timestamp);
        let id = mood.id.clone();
        let day = day_of(timestamp);

        if let Some(existing) = self.moods.iter_mut().find(|m| m.day() == day) {
            tracing::debug!("Replacing mood for {}", day);
            *existing = mood;
        } else {
            self.moods.push(mood);
        }

        let cutoff = self.clock.now() - Duration::days(MOOD_RETENTION_DAYS);
        self.moods.retain(|m| m.timestamp > cutoff);

        id
    }

    /// The `n` most recent entries, newest first
    pub fn recent_moods(&self, n: usize) -> Vec<Mood> {
        let mut moods = self.moods.clone();
        moods.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        moods.truncate(n);
        moods
    }

    /// Today's mood, if one was logged
    ///
    /// Among entries on today's calendar day, the one with the latest
    /// timestamp wins.
    pub fn today_mood(&self) -> Option<Mood> {
        let today = self.clock.today();
        self.moods
            .iter()
            .filter(|m| m.day() == today)
            .max_by_key(|m| m.timestamp)
            .cloned()
    }

    /// Entries from the last `days` days, oldest first
    pub fn trend(&self, days: i64) -> Vec<Mood> {
        let start = self.clock.now() - Duration::days(days);
        let mut moods: Vec<Mood> = self
            .moods
            .iter()
            .filter(|m| m.timestamp >= start)
            .cloned()
            .collect();
        moods.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        moods
    }

    /// Mean mood value over the trend window; neutral (3.0) when empty
    pub fn average_mood(&self, days: i64) -> f64 {
        let moods = self.trend(days);
        if moods.is_empty() {
            return f64::from(NEUTRAL_MOOD_VALUE);
        }
        let total: u32 = moods.iter().map(|m| u32::from(m.value())).sum();
        f64::from(total) / moods.len() as f64
    }

    /// Rewrite an entry's emoji and note
    ///
    /// Silent no-op when the ID is absent; returns whether an edit applied.
    pub fn edit(&mut self, id: &MoodId, emoji: &str, note: &str) -> bool {
        match self.moods.iter_mut().find(|m| &m.id == id) {
            Some(mood) => {
                mood.emoji = emoji.to_string();
                mood.note = note.to_string();
                true
            }
            None => false,
        }
    }

    /// Delete an entry by ID
    ///
    /// Idempotent: deleting an absent ID is a no-op.
    pub fn remove(&mut self, id: &MoodId) -> bool {
        let before = self.moods.len();
        self.moods.retain(|m| &m.id != id);
        self.moods.len() < before
    }

    /// A cloned snapshot of all retained entries
    pub fn moods(&self) -> Vec<Mood> {
        self.moods.clone()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.moods.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }

    /// Replace the collection with loaded data
    pub fn load(&mut self, moods: Vec<Mood>) {
        self.moods = moods;
        tracing::debug!("Loaded {} moods", self.moods.len());
    }

    /// The collection as it should be persisted
    pub fn snapshot(&self) -> Vec<Mood> {
        self.moods.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_at(date: NaiveDate) -> (MoodStore, Arc<FixedClock>) {
        let clock = FixedClock::at_midday(date);
        (MoodStore::new(clock.clone()), clock)
    }

    #[test]
    fn test_same_day_log_replaces() {
        let (mut store, _clock) = store_at(day(2024, 3, 10));
        store.log("😐", "meh");
        store.log("😄", "much better");

        assert_eq!(store.len(), 1);
        let today = store.today_mood().unwrap();
        assert_eq!(today.emoji, "😄");
        assert_eq!(today.note, "much better");
    }

    #[test]
    fn test_retention_drops_old_entries() {
        let (mut store, clock) = store_at(day(2024, 2, 1));
        store.log("😊", "");

        // 40 days later a new write evicts the old entry
        clock.advance(Duration::days(40));
        store.log("😐", "");

        assert_eq!(store.len(), 1);
        assert_eq!(store.moods()[0].emoji, "😐");
    }

    #[test]
    fn test_retention_is_write_time_only() {
        let (mut store, clock) = store_at(day(2024, 2, 1));
        store.log("😊", "");

        // Reads after the window passes still see the stale entry
        clock.advance(Duration::days(40));
        assert_eq!(store.len(), 1);
        assert_eq!(store.recent_moods(10).len(), 1);
    }

    #[test]
    fn test_average_mood_empty_window_is_neutral() {
        let (store, _clock) = store_at(day(2024, 3, 10));
        assert_eq!(store.average_mood(7), 3.0);
    }

    #[test]
    fn test_average_mood_over_window() {
        let (mut store, clock) = store_at(day(2024, 3, 8));
        store.log("😢", ""); // 1
        clock.advance(Duration::days(1));
        store.log("😄", ""); // 5
        clock.advance(Duration::days(1));
        store.log("😐", ""); // 3

        assert_eq!(store.average_mood(7), 3.0);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_trend_ascending_and_bounded() {
        let (mut store, clock) = store_at(day(2024, 3, 1));
        store.log("😢", "");
        clock.advance(Duration::days(8));
        store.log("😊", "");
        clock.advance(Duration::days(1));
        store.log("😄", "");

        let trend = store.trend(7);
        assert_eq!(trend.len(), 2);
        assert!(trend[0].timestamp < trend[1].timestamp);
        assert_eq!(trend[0].emoji, "😊");
    }

    #[test]
    fn test_edit_and_remove_are_idempotent() {
        let (mut store, _clock) = store_at(day(2024, 3, 10));
        let id = store.log("😐", "");

        assert!(store.edit(&id, "🙂", "upgraded"));
        assert_eq!(store.moods()[0].emoji, "🙂");

        let missing = MoodId::new();
        assert!(!store.edit(&missing, "😄", ""));
        assert!(!store.remove(&missing));

        assert!(store.remove(&id));
        assert!(!store.remove(&id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_recent_moods_newest_first() {
        let (mut store, clock) = store_at(day(2024, 3, 8));
        store.log("😢", "");
        clock.advance(Duration::days(1));
        store.log("😐", "");
        clock.advance(Duration::days(1));
        store.log("😄", "");

        let recent = store.recent_moods(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].emoji, "😄");
        assert_eq!(recent[1].emoji, "😐");
    }
}
