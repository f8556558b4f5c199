//! Notifications
//!
//! A small queue of transient, non-blocking messages (toasts). Producers push
//! and move on; the view renders whatever is queued and dismisses entries on
//! its own schedule.

use std::collections::VecDeque;

/// Maximum number of notifications kept at once; the oldest is dropped first.
pub const MAX_NOTIFICATIONS: usize = 5;

/// Identifier of a queued notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

/// A queued message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifier used to dismiss this notification.
    pub id: NotificationId,

    /// Message text.
    pub message: String,
}

/// Bounded FIFO of notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    queue: VecDeque<Notification>,
    next_id: u64,
}

impl Notifications {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `message`, returning its id.
    pub fn push(&mut self, message: impl Into<String>) -> NotificationId {
        let id = NotificationId(self.next_id);

        self.next_id = self.next_id.saturating_add(1);

        if self.queue.len() >= MAX_NOTIFICATIONS {
            self.queue.pop_front();
        }

        self.queue.push_back(Notification {
            id,
            message: message.into(),
        });

        id
    }

    /// Remove the notification with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.queue.retain(|notification| notification.id != id);
    }

    /// Queued notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    /// Number of queued notifications.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
