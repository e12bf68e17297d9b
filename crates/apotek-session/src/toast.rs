//! # Toast Feed
//!
//! The acknowledgment channel every controller writes to.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  One toast per operation outcome:                                   │
//! │                                                                     │
//! │    save ok      ──► default      "Medicine Updated" / "... Added"   │
//! │    remove ok    ──► destructive  "Medicine Deleted"                 │
//! │    any failure  ──► destructive  "Error" + reason                   │
//! │                                                                     │
//! │  Exactly one entry per outcome: a failed remote call records one    │
//! │  destructive toast, never zero, never two.                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A presentation layer drains this feed into transient notifications;
//! nothing here is persisted.

use serde::{Deserialize, Serialize};

// =============================================================================
// Toast
// =============================================================================

/// Visual variant of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    /// Neutral/positive acknowledgment.
    Default,
    /// Failure, or a destructive action's acknowledgment (deletes).
    Destructive,
}

/// One user-visible acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    /// Supporting detail; may be empty for short acknowledgments.
    pub description: String,
    pub variant: ToastVariant,
}

// =============================================================================
// Toast Feed
// =============================================================================

/// An append-only feed of toasts for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastFeed {
    toasts: Vec<Toast>,
}

impl ToastFeed {
    /// Creates an empty feed.
    pub fn new() -> Self {
        ToastFeed { toasts: Vec::new() }
    }

    /// Records a neutral/positive acknowledgment.
    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.toasts.push(Toast {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        });
    }

    /// Records a destructive acknowledgment (failures and deletions).
    pub fn destructive(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.toasts.push(Toast {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        });
    }

    /// All recorded toasts, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// The most recent toast, if any.
    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Count of destructive entries (failures plus delete acknowledgments).
    pub fn destructive_count(&self) -> usize {
        self.toasts
            .iter()
            .filter(|t| t.variant == ToastVariant::Destructive)
            .count()
    }

    /// Drains the feed, handing the toasts to a presentation layer.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_records_in_order() {
        let mut feed = ToastFeed::new();
        feed.success("Medicine Added", "Paracetamol 500mg has been added.");
        feed.destructive("Error", "Failed to delete medicine");

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.toasts()[0].variant, ToastVariant::Default);
        assert_eq!(feed.last().unwrap().title, "Error");
        assert_eq!(feed.destructive_count(), 1);
    }

    #[test]
    fn test_drain_empties_the_feed() {
        let mut feed = ToastFeed::new();
        feed.success("Stock Added", "Added 10 units to Paracetamol 500mg");

        let drained = feed.drain();
        assert_eq!(drained.len(), 1);
        assert!(feed.is_empty());
    }
}
