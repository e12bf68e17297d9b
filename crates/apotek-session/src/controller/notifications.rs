//! # Notifications Page Controller
//!
//! Session state for the notifications page: a thin stateful wrapper over
//! [`NotificationFeed`] plus the toast acknowledgments for bulk actions.
//!
//! Unlike the other pages there is no gateway here: notifications are
//! seeded in-memory sample data with no persistence; they do not survive
//! a session restart.

use tracing::debug;

use crate::toast::ToastFeed;
use apotek_core::{Notification, NotificationFeed};

/// Session state for the notifications page.
pub struct NotificationsState {
    feed: NotificationFeed,
    toasts: ToastFeed,
}

impl NotificationsState {
    /// Starts from the seeded sample feed (what a fresh session shows).
    pub fn new() -> Self {
        Self::with_feed(NotificationFeed::seeded())
    }

    /// Starts from an explicit feed.
    pub fn with_feed(feed: NotificationFeed) -> Self {
        NotificationsState {
            feed,
            toasts: ToastFeed::new(),
        }
    }

    /// All entries, as seeded/pushed.
    pub fn notifications(&self) -> &[Notification] {
        self.feed.items()
    }

    /// Count of entries not yet acknowledged.
    pub fn unread_count(&self) -> usize {
        self.feed.unread_count()
    }

    /// Marks one entry as read. No toast; the row restyles in place.
    pub fn mark_read(&mut self, id: &str) -> bool {
        debug!(id = %id, "Marking notification read");
        self.feed.mark_read(id)
    }

    /// Marks every entry as read and acknowledges with one toast.
    pub fn mark_all_read(&mut self) -> usize {
        let transitioned = self.feed.mark_all_read();
        debug!(transitioned, "Marked all notifications read");
        self.toasts.success("All notifications marked as read", "");
        transitioned
    }

    /// Deletes one entry; acknowledges with one toast when something was
    /// actually removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.feed.delete(id);
        if removed {
            debug!(id = %id, "Notification deleted");
            self.toasts.success("Notification deleted", "");
        }
        removed
    }

    /// The acknowledgment feed.
    pub fn toasts(&self) -> &ToastFeed {
        &self.toasts
    }

    /// Mutable access so a presentation layer can drain the feed.
    pub fn toasts_mut(&mut self) -> &mut ToastFeed {
        &mut self.toasts
    }
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
