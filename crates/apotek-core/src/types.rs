//! # Domain Types
//!
//! Core domain types for the Apotek inventory system.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │    Medicine     │   │    Category     │   │    Supplier     │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  id (store)     │   │  id (store)     │   │  id (store)     │    │
//! │  │  name           │   │  name           │   │  name           │    │
//! │  │  category ──────┼──►│  color (#hex)   │   │  contact        │    │
//! │  │  stock          │   └─────────────────┘   │  email          │    │
//! │  │  price_idr      │                         │  address        │    │
//! │  │  expiry_date    │   ┌─────────────────┐   └─────────────────┘    │
//! │  │  supplier ──────┼──►│  Notification   │            ▲             │
//! │  └─────────────────┘   │  kind, title,   │            │             │
//! │                        │  message, read  │    (by name string)      │
//! │                        └─────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name-String References
//! A medicine references its category and supplier **by name string**, not
//! by id. Renaming a category therefore orphans the association for every
//! medicine still carrying the old name; the store performs no cascade.
//!
//! ## Draft Pattern
//! Every user-editable entity has a `*Draft` carrying an optional `id`:
//! `Some(id)` means update-by-identifier, `None` means insert (the store
//! assigns a fresh id; the client never generates one).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Rupiah;

// =============================================================================
// Medicine
// =============================================================================

/// A medicine row as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Medicine {
    /// Unique identifier, assigned by the store on insert.
    pub id: String,

    /// Display name, e.g. "Paracetamol 500mg".
    pub name: String,

    /// Category reference by name string (see module docs).
    pub category: String,

    /// Units on hand. Never negative.
    pub stock: i64,

    /// Unit price in whole rupiah.
    pub price_idr: i64,

    /// Calendar expiry date.
    pub expiry_date: NaiveDate,

    /// Supplier reference by name string (see module docs).
    pub supplier: String,
}

impl Medicine {
    /// Returns the unit price as a Rupiah value.
    #[inline]
    pub fn price(&self) -> Rupiah {
        Rupiah::from_idr(self.price_idr)
    }

    /// Total value of the units on hand (stock × unit price).
    #[inline]
    pub fn stock_value(&self) -> Rupiah {
        Rupiah::from_idr(self.price_idr * self.stock)
    }
}

/// Editable medicine fields from the entry form.
///
/// `id: Some(_)` updates the existing row; `id: None` inserts a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineDraft {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub price_idr: i64,
    pub expiry_date: NaiveDate,
    pub supplier: String,
}

impl MedicineDraft {
    /// Overwrites a row's editable fields with the draft's (draft wins on
    /// every key; the row keeps its identifier).
    pub fn apply_to(&self, medicine: &mut Medicine) {
        medicine.name = self.name.clone();
        medicine.category = self.category.clone();
        medicine.stock = self.stock;
        medicine.price_idr = self.price_idr;
        medicine.expiry_date = self.expiry_date;
        medicine.supplier = self.supplier.clone();
    }
}

// =============================================================================
// Category
// =============================================================================

/// A medicine category row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    /// Unique identifier, assigned by the store on insert.
    pub id: String,

    /// Category name; the string medicines reference.
    pub name: String,

    /// Display color as a hex string, e.g. "#3B82F6".
    pub color: String,
}

/// Editable category fields from the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub id: Option<String>,
    pub name: String,
    pub color: String,
}

/// A category together with its derived medicine count.
///
/// The count is computed client-side from the medicines collection and is
/// never persisted. It is consistent immediately after a full `load()` and
/// may go stale after a save/remove until the next `load()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWithCount {
    pub category: Category,

    /// Count of medicines whose `category` field string-equals this
    /// category's name at derivation time.
    pub medicine_count: usize,
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Supplier {
    /// Unique identifier, assigned by the store on insert.
    pub id: String,

    /// Supplier name; the string medicines reference.
    pub name: String,

    /// Contact phone string, e.g. "+62 812-3456-7890".
    pub contact: String,

    /// Contact email address.
    pub email: String,

    /// Postal address, free text.
    pub address: String,
}

/// Editable supplier fields from the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub id: Option<String>,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
}

impl SupplierDraft {
    /// Overwrites a row's editable fields with the draft's.
    pub fn apply_to(&self, supplier: &mut Supplier) {
        supplier.name = self.name.clone();
        supplier.contact = self.contact.clone();
        supplier.email = self.email.clone();
        supplier.address = self.address.clone();
    }
}

/// A supplier together with its derived medicine count.
///
/// Same derivation and staleness rules as [`CategoryWithCount`], keyed on
/// the supplier name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierWithCount {
    pub supplier: Supplier,
    pub medicine_count: usize,
}

// =============================================================================
// Notification
// =============================================================================

/// The kind of an inventory notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Stock fell below the low-stock threshold.
    LowStock,
    /// Expiry date is inside the warning window.
    Expiring,
    /// Expiry date has passed.
    Expired,
    /// A mutation completed (e.g. stock replenished).
    Success,
    /// Catch-all for kinds this build doesn't know; rendered with the
    /// default badge.
    #[serde(other)]
    Other,
}

/// An inventory notification.
///
/// Notifications live only in memory for the current session; they are
/// never persisted and do not survive a reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,

    /// Human-readable relative timestamp, e.g. "2 hours ago".
    pub timestamp: String,

    /// Whether the user has acknowledged this entry.
    pub read: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn med() -> Medicine {
        Medicine {
            id: "m-1".to_string(),
            name: "Paracetamol 500mg".to_string(),
            category: "Pain Relief".to_string(),
            stock: 12,
            price_idr: 5_000,
            expiry_date: NaiveDate::from_ymd_opt(2027, 1, 31).unwrap(),
            supplier: "PT Pharma Indo".to_string(),
        }
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(med().stock_value(), Rupiah::from_idr(60_000));
    }

    #[test]
    fn test_draft_apply_overwrites_every_editable_field() {
        let mut m = med();
        let draft = MedicineDraft {
            id: Some("m-1".to_string()),
            name: "Paracetamol 650mg".to_string(),
            category: "Analgesic".to_string(),
            stock: 30,
            price_idr: 6_500,
            expiry_date: NaiveDate::from_ymd_opt(2028, 6, 1).unwrap(),
            supplier: "CV Medika Jaya".to_string(),
        };
        draft.apply_to(&mut m);

        assert_eq!(m.id, "m-1"); // identifier untouched
        assert_eq!(m.name, "Paracetamol 650mg");
        assert_eq!(m.category, "Analgesic");
        assert_eq!(m.stock, 30);
        assert_eq!(m.price_idr, 6_500);
        assert_eq!(m.supplier, "CV Medika Jaya");
    }

    #[test]
    fn test_notification_kind_snake_case_wire_format() {
        let json = serde_json::to_string(&NotificationKind::LowStock).unwrap();
        assert_eq!(json, "\"low_stock\"");

        let parsed: NotificationKind = serde_json::from_str("\"expiring\"").unwrap();
        assert_eq!(parsed, NotificationKind::Expiring);
    }

    #[test]
    fn test_unrecognized_notification_kind_falls_back() {
        let parsed: NotificationKind = serde_json::from_str("\"recall\"").unwrap();
        assert_eq!(parsed, NotificationKind::Other);
    }
}
