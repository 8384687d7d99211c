/// Notification entity for the in-app feed
///
/// This module defines the Notification struct shown in the notification
/// screen. Entries are produced by the stores and the profile flow; the
/// notification store caps the feed at its 50 most recent entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{NotificationId, NotificationType};

/// A single entry in the in-app notification feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier for this notification
    pub id: NotificationId,
    /// What kind of notification this is
    pub kind: NotificationType,
    /// Short headline (e.g., "Hydration Reminder")
    pub title: String,
    /// Body text shown under the title
    pub message: String,
    /// When this notification was produced
    pub timestamp: DateTime<Utc>,
    /// Whether the user has seen this notification
    pub is_read: bool,
}

impl Notification {
    /// Create a new unread notification
    pub fn new(
        kind: NotificationType,
        title: String,
        message: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title,
            message,
            timestamp,
            is_read: false,
        }
    }

    /// Create a notification from existing data (used when loading from storage)
    pub fn from_existing(
        id: NotificationId,
        kind: NotificationType,
        title: String,
        message: String,
        timestamp: DateTime<Utc>,
        is_read: bool,
    ) -> Self {
        Self {
            id,
            kind,
            title,
            message,
            timestamp,
            is_read,
        }
    }

    /// Emoji icon for this notification's type
    pub fn icon(&self) -> &str {
        self.kind.icon()
    }
}
