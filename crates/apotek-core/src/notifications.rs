//! # Notification Feed
//!
//! In-memory feed of inventory notifications.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Session start ──► NotificationFeed::seeded() (sample entries)      │
//! │                                                                     │
//! │  mark_read(id) ─────► entry.read = true                             │
//! │  mark_all_read() ───► every entry read                              │
//! │  delete(id) ────────► entry removed                                 │
//! │  push(entry) ───────► appended                                      │
//! │                                                                     │
//! │  Nothing here is persisted: the feed does not survive a reload.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{Notification, NotificationKind};

/// The in-memory notification feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    /// Creates an empty feed.
    pub fn new() -> Self {
        NotificationFeed { items: Vec::new() }
    }

    /// Creates a feed populated with the sample entries a fresh session
    /// starts from.
    pub fn seeded() -> Self {
        let entry = |id: &str, kind, title: &str, message: &str, timestamp: &str, read| {
            Notification {
                id: id.to_string(),
                kind,
                title: title.to_string(),
                message: message.to_string(),
                timestamp: timestamp.to_string(),
                read,
            }
        };

        NotificationFeed {
            items: vec![
                entry(
                    "1",
                    NotificationKind::LowStock,
                    "Low Stock Alert",
                    "Amoxicillin 250mg stock is running low (3 units remaining)",
                    "2 hours ago",
                    false,
                ),
                entry(
                    "2",
                    NotificationKind::Expiring,
                    "Expiring Soon",
                    "Ibuprofen 400mg will expire in 27 days",
                    "5 hours ago",
                    false,
                ),
                entry(
                    "3",
                    NotificationKind::Success,
                    "Stock Updated",
                    "Paracetamol 500mg stock increased by 50 units",
                    "1 day ago",
                    true,
                ),
                entry(
                    "4",
                    NotificationKind::LowStock,
                    "Low Stock Alert",
                    "Vitamin C 1000mg stock is running low (8 units remaining)",
                    "1 day ago",
                    true,
                ),
                entry(
                    "5",
                    NotificationKind::Expiring,
                    "Expiring Soon",
                    "Cetirizine 10mg will expire in 32 days",
                    "2 days ago",
                    true,
                ),
            ],
        }
    }

    /// All entries, newest first as seeded/pushed.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count of entries not yet acknowledged.
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Marks one entry as read.
    ///
    /// Returns `false` when no entry has that id (already-read entries
    /// still return `true`).
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    /// Marks every entry as read; returns how many transitioned.
    pub fn mark_all_read(&mut self) -> usize {
        let mut transitioned = 0;
        for n in &mut self.items {
            if !n.read {
                n.read = true;
                transitioned += 1;
            }
        }
        transitioned
    }

    /// Removes one entry by id; returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Appends an entry to the feed.
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_feed_shape() {
        let feed = NotificationFeed::seeded();
        assert_eq!(feed.len(), 5);
        assert_eq!(feed.unread_count(), 2);
        assert_eq!(feed.items()[0].kind, NotificationKind::LowStock);
    }

    #[test]
    fn test_mark_read() {
        let mut feed = NotificationFeed::seeded();
        assert!(feed.mark_read("1"));
        assert_eq!(feed.unread_count(), 1);

        // Marking an already-read entry is a no-op but still succeeds
        assert!(feed.mark_read("1"));
        assert_eq!(feed.unread_count(), 1);

        assert!(!feed.mark_read("no-such-id"));
    }

    #[test]
    fn test_mark_all_read() {
        let mut feed = NotificationFeed::seeded();
        assert_eq!(feed.mark_all_read(), 2);
        assert_eq!(feed.unread_count(), 0);
        // Second pass transitions nothing
        assert_eq!(feed.mark_all_read(), 0);
    }

    #[test]
    fn test_delete() {
        let mut feed = NotificationFeed::seeded();
        assert!(feed.delete("3"));
        assert_eq!(feed.len(), 4);
        assert!(!feed.delete("3"));
        assert_eq!(feed.len(), 4);
    }
}
