//! # Dashboard Statistics
//!
//! Stat tiles and attention lists derived from already-fetched mirrors.
//!
//! ## Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  medicines mirror ──┬──► total_medicines                            │
//! │                     ├──► low_stock_items (stock < threshold,        │
//! │                     │    out-of-stock included)                     │
//! │                     ├──► inventory_value (Σ stock × price)          │
//! │                     ├──► low_stock_medicines() list                 │
//! │                     └──► expiring_soon() list                       │
//! │  categories mirror ────► total_categories                           │
//! │                                                                     │
//! │  Pure functions over mirrors: no gateway call happens here, so      │
//! │  the numbers are as fresh as the last load().                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use apotek_core::classify::{ExpiryStatus, StockStatus};
use apotek_core::{Category, Medicine, Rupiah};

/// The stat-tile numbers shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Total medicine rows.
    pub total_medicines: usize,

    /// Medicines under the low-stock threshold, out-of-stock included —
    /// both need restocking attention.
    pub low_stock_items: usize,

    /// Total category rows.
    pub total_categories: usize,

    /// Total value of the units on hand across all medicines.
    pub inventory_value: Rupiah,
}

impl DashboardStats {
    /// Derives the stat tiles in one pass over the mirrors.
    pub fn derive(medicines: &[Medicine], categories: &[Category]) -> Self {
        let mut low_stock_items = 0;
        let mut inventory_value = Rupiah::zero();

        for m in medicines {
            if StockStatus::of(m.stock).needs_attention() {
                low_stock_items += 1;
            }
            inventory_value += m.stock_value();
        }

        DashboardStats {
            total_medicines: medicines.len(),
            low_stock_items,
            total_categories: categories.len(),
            inventory_value,
        }
    }
}

/// Medicines needing restocking attention, lowest stock first.
pub fn low_stock_medicines(medicines: &[Medicine]) -> Vec<&Medicine> {
    let mut list: Vec<&Medicine> = medicines
        .iter()
        .filter(|m| StockStatus::of(m.stock).needs_attention())
        .collect();
    list.sort_by_key(|m| m.stock);
    list
}

/// Medicines inside the expiry warning window, soonest first, paired with
/// their whole days left. Expired medicines are not in this list; they get
/// the destructive badge in the table instead.
pub fn expiring_soon(medicines: &[Medicine], today: NaiveDate) -> Vec<(&Medicine, i64)> {
    let mut list: Vec<(&Medicine, i64)> = medicines
        .iter()
        .filter_map(|m| match ExpiryStatus::of(m.expiry_date, today) {
            ExpiryStatus::Expiring { days_left } => Some((m, days_left)),
            _ => None,
        })
        .collect();
    list.sort_by_key(|(_, days_left)| *days_left);
    list
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{category, medicine};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_derive_stat_tiles() {
        let medicines = vec![
            medicine("m-1", "Paracetamol 500mg", "Pain Relief", 0),
            medicine("m-2", "Amoxicillin 250mg", "Antibiotic", 3),
            medicine("m-3", "Vitamin C 1000mg", "Vitamin", 40),
        ];
        let categories = vec![
            category("c-1", "Pain Relief", "#3B82F6"),
            category("c-2", "Antibiotic", "#10B981"),
        ];

        let stats = DashboardStats::derive(&medicines, &categories);
        assert_eq!(stats.total_medicines, 3);
        assert_eq!(stats.low_stock_items, 2); // out-of-stock counts too
        assert_eq!(stats.total_categories, 2);
        // each test medicine is priced at 5,000
        assert_eq!(stats.inventory_value, Rupiah::from_idr(43 * 5_000));
    }

    #[test]
    fn test_low_stock_list_sorted_lowest_first() {
        let medicines = vec![
            medicine("m-1", "Vitamin C 1000mg", "Vitamin", 8),
            medicine("m-2", "Amoxicillin 250mg", "Antibiotic", 3),
            medicine("m-3", "Paracetamol 500mg", "Pain Relief", 40),
        ];

        let list = low_stock_medicines(&medicines);
        let names: Vec<_> = list.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Amoxicillin 250mg", "Vitamin C 1000mg"]);
    }

    #[test]
    fn test_expiring_soon_sorted_and_bounded() {
        let today = d(2026, 8, 7);
        let mut soon = medicine("m-1", "Ibuprofen 400mg", "Pain Relief", 40);
        soon.expiry_date = d(2026, 9, 3); // 27 days
        let mut later = medicine("m-2", "Cetirizine 10mg", "Allergy", 18);
        later.expiry_date = d(2026, 9, 8); // 32 days
        let mut expired = medicine("m-3", "Fish Oil 1000mg", "Supplement", 33);
        expired.expiry_date = d(2026, 7, 1);
        let mut fresh = medicine("m-4", "Zinc 20mg", "Supplement", 12);
        fresh.expiry_date = d(2027, 8, 7);

        let medicines = vec![later, fresh, soon, expired];
        let list = expiring_soon(&medicines, today);

        let entries: Vec<_> = list
            .iter()
            .map(|(m, days)| (m.name.as_str(), *days))
            .collect();
        assert_eq!(
            entries,
            vec![("Ibuprofen 400mg", 27), ("Cetirizine 10mg", 32)]
        );
    }
}
