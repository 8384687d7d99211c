/// Notification store: the capped, newest-first in-app feed
///
/// Insertion is always at the front; when the feed overflows its cap the
/// oldest entries fall off the end. Ordering is never re-sorted after
/// insertion.

use std::sync::Arc;

use chrono::Duration;

use crate::clock::Clock;
use crate::domain::{Notification, NotificationId, NotificationType};

/// Maximum number of notifications retained in the feed
pub const MAX_NOTIFICATIONS: usize = 50;

/// In-memory notification feed
pub struct NotificationStore {
    clock: Arc<dyn Clock>,
    notifications: Vec<Notification>,
}

impl NotificationStore {
    /// Create an empty store reading time through the given clock
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            notifications: Vec::new(),
        }
    }

    /// Insert a notification at the front of the feed
    ///
    /// When the feed exceeds the cap, the oldest entry (highest index) is
    /// dropped.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
        if self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.truncate(MAX_NOTIFICATIONS);
        }
    }

    /// Build and push an unread notification stamped with the current instant
    pub fn notify(
        &mut self,
        kind: NotificationType,
        title: &str,
        message: &str,
    ) -> NotificationId {
        let notification =
            Notification::new(kind, title.to_string(), message.to_string(), self.clock.now());
        let id = notification.id.clone();
        tracing::debug!("Pushed {} notification: {}", kind.display_name(), title);
        self.push(notification);
        id
    }

    /// Mark the first entry with the given ID as read
    ///
    /// Silent no-op when the ID is absent; returns whether anything changed.
    pub fn mark_read(&mut self, id: &NotificationId) -> bool {
        match self.notifications.iter_mut().find(|n| &n.id == id) {
            Some(notification) => {
                notification.is_read = true;
                true
            }
            None => false,
        }
    }

    /// Mark every entry as read
    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
    }

    /// Number of unread entries
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// A cloned snapshot of the feed, newest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.clone()
    }

    /// Number of entries in the feed
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Whether the feed is empty
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Replace the feed with a demo sample, one entry per notification type
    ///
    /// Timestamps are back-dated relative to the clock so the feed reads
    /// naturally; the two oldest entries start out read.
    pub fn seed_samples(&mut self) {
        let now = self.clock.now();
        let mut samples = vec![
            Notification::new(
                NotificationType::Hydration,
                "Hydration Reminder".to_string(),
                "Time to drink some water! You're 250ml behind your goal.".to_string(),
                now - Duration::minutes(5),
            ),
            Notification::new(
                NotificationType::Habit,
                "Habit Reminder".to_string(),
                "Don't forget your evening walk! Keep your streak going.".to_string(),
                now - Duration::hours(2),
            ),
            Notification::new(
                NotificationType::Mood,
                "Mood Check-in".to_string(),
                "How are you feeling today? Take a moment to log your mood.".to_string(),
                now - Duration::hours(4),
            ),
            Notification::new(
                NotificationType::Progress,
                "Great Progress!".to_string(),
                "You've completed 6 out of 8 habits today. Keep it up!".to_string(),
                now - Duration::days(1),
            ),
            Notification::new(
                NotificationType::Achievement,
                "Streak Achievement".to_string(),
                "Congratulations! You've reached a 7-day streak for meditation.".to_string(),
                now - Duration::days(2),
            ),
        ];
        samples[3].is_read = true;
        samples[4].is_read = true;

        self.notifications = samples;
        tracing::debug!("Seeded {} sample notifications", self.notifications.len());
    }

    /// Replace the feed with loaded data
    ///
    /// The cap is re-applied in case persisted data predates it.
    pub fn load(&mut self, notifications: Vec<Notification>) {
        self.notifications = notifications;
        if self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.truncate(MAX_NOTIFICATIONS);
        }
        tracing::debug!("Loaded {} notifications", self.notifications.len());
    }

    /// The feed as it should be persisted
    pub fn snapshot(&self) -> Vec<Notification> {
        self.notifications.clone()
    }
}
