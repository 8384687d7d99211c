/// Integration tests: persistence round trips and the assembled tracker
use wellness_tracker::*;

use chrono::NaiveDate;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn test_clock() -> Arc<FixedClock> {
    FixedClock::at_midday(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
}

#[cfg(test)]
mod tracker_tests {
    use super::*;

    #[test]
    fn test_open_empty_database() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let tracker =
            WellnessTracker::open_with_clock(temp_file.path().to_path_buf(), test_clock())
                .expect("Failed to open tracker");

        let snapshot = tracker.metrics().dashboard_snapshot().unwrap();
        assert_eq!(snapshot.habits_total, 0);
        assert_eq!(snapshot.water_goal_ml, 2500);
        assert_eq!(snapshot.step_goal, 10_000);
    }

    #[test]
    fn test_persist_and_reopen_round_trip() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        {
            let tracker = WellnessTracker::open_with_clock(db_path.clone(), test_clock())
                .expect("Failed to open tracker");

            {
                let habits = tracker.habits();
                let mut habits = habits.lock().unwrap();
                let id = habits.add("Meditate", "10 minutes").unwrap();
                habits.mark_completed_today(&id).unwrap();
            }
            {
                let moods = tracker.moods();
                moods.lock().unwrap().log("😊", "good day");
            }
            {
                let counters = tracker.counters();
                let mut counters = counters.lock().unwrap();
                counters.increment_today(MetricKind::Water, 750);
                counters.set_goal(MetricKind::Steps, 8000);
            }

            tracker.persist().expect("Failed to persist");
        }

        let reopened = WellnessTracker::open_with_clock(db_path, test_clock())
            .expect("Failed to reopen tracker");
        let snapshot = reopened.metrics().dashboard_snapshot().unwrap();

        assert_eq!(snapshot.habits_total, 1);
        assert_eq!(snapshot.habits_completed_today, 1);
        assert_eq!(snapshot.current_water_ml, 750);
        assert_eq!(snapshot.step_goal, 8000);
        assert_eq!(snapshot.today_mood_emoji, Some("😊".to_string()));

        let habits = reopened.habits();
        let habits = habits.lock().unwrap();
        assert_eq!(habits.habits()[0].streak, 1);
    }

    #[test]
    fn test_profile_update_pushes_notification() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let tracker =
            WellnessTracker::open_with_clock(temp_file.path().to_path_buf(), test_clock())
                .expect("Failed to open tracker");

        let mut profile = tracker.profile().unwrap();
        assert_eq!(profile.name, "User");
        profile.name = "Avery".to_string();
        profile.primary_goal = "Sleep more".to_string();
        tracker.update_profile(profile).unwrap();

        assert_eq!(tracker.profile().unwrap().name, "Avery");

        let notifications = tracker.notifications();
        let notifications = notifications.lock().unwrap();
        let feed = notifications.notifications();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].kind, NotificationType::Progress);
        assert_eq!(feed[0].title, "Profile Updated");
        assert!(!feed[0].is_read);
    }

    #[test]
    fn test_reminder_settings_round_trip() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        {
            let tracker = WellnessTracker::open_with_clock(db_path.clone(), test_clock())
                .expect("Failed to open tracker");
            let mut settings = tracker.reminder_settings().unwrap();
            settings.hydration_reminder_enabled = true;
            settings.hydration_reminder_interval_minutes = 45.0;
            tracker.set_reminder_settings(settings).unwrap();
            tracker.persist().unwrap();
        }

        let reopened = WellnessTracker::open_with_clock(db_path, test_clock())
            .expect("Failed to reopen tracker");
        let settings = reopened.reminder_settings().unwrap();
        assert!(settings.hydration_reminder_enabled);
        assert_eq!(settings.hydration_reminder_interval_minutes, 45.0);
    }
}

#[cfg(test)]
mod storage_tests {
    use super::*;

    #[test]
    fn test_storage_interface() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path().to_path_buf())
            .expect("Failed to create storage");

        // Storage implements the KeyValueStorage trait
        let _: &dyn KeyValueStorage = &storage;
    }

    #[test]
    fn test_notification_feed_round_trip() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path().to_path_buf())
            .expect("Failed to create storage");

        let clock = test_clock();
        let mut store = NotificationStore::new(clock.clone());
        store.seed_samples();
        storage.replace_notifications(&store.snapshot()).unwrap();

        let mut reloaded = NotificationStore::new(clock);
        reloaded.load(storage.load_notifications().unwrap());

        assert_eq!(reloaded.len(), 5);
        assert_eq!(reloaded.unread_count(), 3);
        assert_eq!(reloaded.notifications(), store.notifications());
    }

    #[test]
    fn test_replace_all_is_read_your_writes() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path().to_path_buf())
            .expect("Failed to create storage");

        let snapshot = CounterSnapshot {
            values: vec![CounterValue {
                kind: MetricKind::Water,
                day: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
                value: 500,
            }],
            goals: vec![CounterGoal {
                kind: MetricKind::Water,
                goal: 3000,
            }],
        };

        storage.replace_counters(&snapshot).unwrap();
        assert_eq!(storage.load_counters().unwrap(), snapshot);

        storage.replace_counters(&CounterSnapshot::default()).unwrap();
        assert_eq!(storage.load_counters().unwrap(), CounterSnapshot::default());
    }
}
