//! # Classification Module
//!
//! Derived display classification: stock status, expiry status, and the
//! badge-variant mapping used by every list surface.
//!
//! ## Classification Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Stock (units)          Expiry (whole days until expiry)            │
//! │  ─────────────          ────────────────────────────────            │
//! │  0        Out of Stock  d < 0          Expired                      │
//! │  1..=9    Low Stock     0 <= d < 90    Expiring in d days           │
//! │  >= 10    In Stock      d >= 90        (no badge)                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Thresholds are the fixed constants [`LOW_STOCK_THRESHOLD`] and
//! [`EXPIRY_WARNING_DAYS`]; they are not configurable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::NotificationKind;
use crate::{EXPIRY_WARNING_DAYS, LOW_STOCK_THRESHOLD};

// =============================================================================
// Badge Variant
// =============================================================================

/// Visual weight of a status badge.
///
/// This is the full vocabulary the presentation layer styles against;
/// classification maps every status onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Default,
    Success,
    Warning,
    Destructive,
    Outline,
}

// =============================================================================
// Stock Status
// =============================================================================

/// Stock-level classification of a medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Classifies a stock level.
    ///
    /// ## Example
    /// ```rust
    /// use apotek_core::classify::StockStatus;
    ///
    /// assert_eq!(StockStatus::of(0), StockStatus::OutOfStock);
    /// assert_eq!(StockStatus::of(9), StockStatus::LowStock);
    /// assert_eq!(StockStatus::of(10), StockStatus::InStock);
    /// ```
    pub fn of(stock: i64) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Display label for the stock badge.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    /// Badge variant for the stock badge.
    pub fn badge(&self) -> BadgeVariant {
        match self {
            StockStatus::OutOfStock => BadgeVariant::Destructive,
            StockStatus::LowStock => BadgeVariant::Warning,
            StockStatus::InStock => BadgeVariant::Success,
        }
    }

    /// True when the level needs restocking attention (low or out).
    pub fn needs_attention(&self) -> bool {
        !matches!(self, StockStatus::InStock)
    }
}

// =============================================================================
// Expiry Status
// =============================================================================

/// Expiry classification of a medicine, relative to a given "today".
///
/// Callers pass `today` explicitly; this crate never reads a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ExpiryStatus {
    /// Expiry date has passed.
    Expired,
    /// Expiry date is within the warning window.
    Expiring { days_left: i64 },
    /// Expiry date is at or beyond the warning horizon; no badge shown.
    Fresh,
}

/// Whole days from `today` until `expiry` (negative once past).
#[inline]
pub fn days_until_expiry(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

impl ExpiryStatus {
    /// Classifies an expiry date against `today`.
    ///
    /// ## Example
    /// ```rust
    /// use apotek_core::classify::ExpiryStatus;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    /// let soon = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();
    /// assert_eq!(
    ///     ExpiryStatus::of(soon, today),
    ///     ExpiryStatus::Expiring { days_left: 27 }
    /// );
    /// ```
    pub fn of(expiry: NaiveDate, today: NaiveDate) -> Self {
        let days = days_until_expiry(expiry, today);
        if days < 0 {
            ExpiryStatus::Expired
        } else if days < EXPIRY_WARNING_DAYS {
            ExpiryStatus::Expiring { days_left: days }
        } else {
            ExpiryStatus::Fresh
        }
    }

    /// Display label for the expiry badge, `None` when no badge is shown.
    pub fn label(&self) -> Option<String> {
        match self {
            ExpiryStatus::Expired => Some("Expired".to_string()),
            ExpiryStatus::Expiring { days_left } => {
                Some(format!("Expiring in {days_left} days"))
            }
            ExpiryStatus::Fresh => None,
        }
    }

    /// Badge variant for the expiry badge, `None` when no badge is shown.
    pub fn badge(&self) -> Option<BadgeVariant> {
        match self {
            ExpiryStatus::Expired => Some(BadgeVariant::Destructive),
            ExpiryStatus::Expiring { .. } => Some(BadgeVariant::Warning),
            ExpiryStatus::Fresh => None,
        }
    }
}

// =============================================================================
// Notification Badges
// =============================================================================

impl NotificationKind {
    /// Badge variant for a notification entry.
    ///
    /// Unrecognized kinds fall back to the neutral default styling.
    pub fn badge(&self) -> BadgeVariant {
        match self {
            NotificationKind::LowStock => BadgeVariant::Warning,
            NotificationKind::Expiring => BadgeVariant::Outline,
            NotificationKind::Expired => BadgeVariant::Destructive,
            NotificationKind::Success => BadgeVariant::Success,
            NotificationKind::Other => BadgeVariant::Default,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
