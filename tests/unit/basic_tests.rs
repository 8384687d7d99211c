/// Unit tests covering the stores' core invariants against a fixed clock
use wellness_tracker::*;

use chrono::{Duration, NaiveDate};
use std::sync::Arc;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[cfg(test)]
mod streak_tests {
    use super::*;

    fn habit_store() -> (HabitStore, Arc<FixedClock>) {
        let clock = FixedClock::at_midday(day(2024, 3, 10));
        (HabitStore::new(clock.clone()), clock)
    }

    #[test]
    fn test_completion_toggle_round_trip_is_idempotent() {
        let (mut store, clock) = habit_store();
        let id = store.add("Journaling", "").unwrap();
        let today = clock.today();
        store.set_completion(&id, true, today - Duration::days(1)).unwrap();
        store.set_completion(&id, true, today - Duration::days(2)).unwrap();
        let before = store.get(&id).unwrap().streak;

        store.set_completion(&id, true, today).unwrap();
        store.set_completion(&id, false, today).unwrap();

        assert_eq!(store.get(&id).unwrap().streak, before);
    }

    #[test]
    fn test_three_consecutive_days_give_streak_three() {
        let (mut store, clock) = habit_store();
        let id = store.add("Run", "").unwrap();
        let today = clock.today();

        for offset in 0..3 {
            store
                .set_completion(&id, true, today - Duration::days(offset))
                .unwrap();
        }

        assert_eq!(store.get(&id).unwrap().streak, 3);
    }

    #[test]
    fn test_gap_yesterday_resets_streak_to_one() {
        let (mut store, clock) = habit_store();
        let id = store.add("Run", "").unwrap();
        let today = clock.today();

        store.set_completion(&id, true, today).unwrap();
        store
            .set_completion(&id, true, today - Duration::days(2))
            .unwrap();

        assert_eq!(store.get(&id).unwrap().streak, 1);
    }

    #[test]
    fn test_grace_rule_keeps_yesterdays_streak() {
        let (mut store, clock) = habit_store();
        let id = store.add("Run", "").unwrap();
        let today = clock.today();

        store
            .set_completion(&id, true, today - Duration::days(1))
            .unwrap();

        assert_eq!(store.get(&id).unwrap().streak, 1);
    }

    #[test]
    fn test_streak_survives_midnight_then_extends() {
        let (mut store, clock) = habit_store();
        let id = store.add("Run", "").unwrap();
        store.mark_completed_today(&id).unwrap();
        assert_eq!(store.get(&id).unwrap().streak, 1);

        // The next morning the streak still shows 1 (grace), and completing
        // extends it to 2
        clock.advance(Duration::days(1));
        store.mark_completed_today(&id).unwrap();
        assert_eq!(store.get(&id).unwrap().streak, 2);
    }

    #[test]
    fn test_completion_rate_of_empty_store_is_zero() {
        let (store, _clock) = habit_store();
        let rate = store.completion_rate();
        assert_eq!(rate, 0.0);
        assert!(!rate.is_nan());
    }
}

#[cfg(test)]
mod mood_tests {
    use super::*;

    fn mood_store() -> (MoodStore, Arc<FixedClock>) {
        let clock = FixedClock::at_midday(day(2024, 3, 10));
        (MoodStore::new(clock.clone()), clock)
    }

    #[test]
    fn test_second_same_day_log_wins() {
        let (mut store, _clock) = mood_store();
        store.log("😔", "rough morning");
        store.log("😊", "better afternoon");

        assert_eq!(store.len(), 1);
        let today = store.today_mood().unwrap();
        assert_eq!(today.emoji, "😊");
        assert_eq!(today.note, "better afternoon");
    }

    #[test]
    fn test_average_mood_defaults_to_neutral() {
        let (store, _clock) = mood_store();
        assert_eq!(store.average_mood(7), 3.0);
    }

    #[test]
    fn test_thirty_day_retention_at_write_time() {
        let (mut store, clock) = mood_store();
        store.log("😊", "");
        clock.advance(Duration::days(31));

        // The stale entry survives reads but not the next write
        assert_eq!(store.len(), 1);
        store.log("😐", "");
        assert_eq!(store.len(), 1);
        assert_eq!(store.moods()[0].emoji, "😐");
    }

    #[test]
    fn test_distinct_days_accumulate() {
        let (mut store, clock) = mood_store();
        store.log("😢", "");
        clock.advance(Duration::days(1));
        store.log("😄", "");

        assert_eq!(store.len(), 2);
        assert_eq!(store.average_mood(7), 3.0);
    }
}

#[cfg(test)]
mod notification_tests {
    use super::*;

    #[test]
    fn test_fifty_five_pushes_keep_fifty_newest() {
        let clock = FixedClock::at_midday(day(2024, 3, 10));
        let mut store = NotificationStore::new(clock);

        for i in 0..55 {
            store.notify(NotificationType::Progress, &format!("n{}", i), "");
        }

        let feed = store.notifications();
        assert_eq!(feed.len(), 50);
        assert_eq!(feed[0].title, "n54");
        assert_eq!(feed[49].title, "n5");
        // Newest-first throughout
        for pair in feed.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_unread_count_tracks_transitions() {
        let clock = FixedClock::at_midday(day(2024, 3, 10));
        let mut store = NotificationStore::new(clock);
        let id = store.notify(NotificationType::Hydration, "drink", "");
        store.notify(NotificationType::Mood, "log", "");

        assert_eq!(store.unread_count(), 2);
        store.mark_read(&id);
        assert_eq!(store.unread_count(), 1);
        store.mark_all_read();
        assert_eq!(store.unread_count(), 0);
    }
}

#[cfg(test)]
mod counter_tests {
    use super::*;

    fn counter_store() -> CounterStore {
        CounterStore::new(FixedClock::at_midday(day(2024, 3, 10)))
    }

    #[test]
    fn test_weekly_average_skips_empty_days() {
        let mut store = counter_store();
        let today = day(2024, 3, 10);

        // Water over 7 days walking backward: [0, 500, 0, 250, 0, 0, 0]
        store.clear(MetricKind::Water, today);
        store.set(MetricKind::Water, today - Duration::days(1), 500);
        store.clear(MetricKind::Water, today - Duration::days(2));
        store.set(MetricKind::Water, today - Duration::days(3), 250);

        assert_eq!(store.weekly_average(MetricKind::Water), 375.0);
    }

    #[test]
    fn test_weekly_average_includes_single_unit_day() {
        let mut store = counter_store();
        store.set(MetricKind::Water, day(2024, 3, 9), 1);
        assert_eq!(store.weekly_average(MetricKind::Water), 1.0);
    }

    #[test]
    fn test_progress_percent_half_of_goal() {
        let mut store = counter_store();
        store.set_goal(MetricKind::Water, 2500);
        store.set_today(MetricKind::Water, 1250);

        assert_eq!(store.progress_percent_today(MetricKind::Water).unwrap(), 50);
    }

    #[test]
    fn test_progress_percent_zero_goal_errors() {
        let mut store = counter_store();
        store.set_goal(MetricKind::Water, 0);
        store.set_today(MetricKind::Water, 1250);

        assert!(matches!(
            store.progress_percent_today(MetricKind::Water),
            Err(DomainError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_unset_day_reads_zero_without_error() {
        let store = counter_store();
        assert_eq!(store.get(MetricKind::Steps, day(2020, 1, 1)), 0);
    }
}
