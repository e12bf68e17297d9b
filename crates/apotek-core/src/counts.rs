//! # Derived Counts Module
//!
//! Client-side derivation of per-category and per-supplier medicine counts.
//!
//! ## Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  load() fetches two collections in parallel:                        │
//! │                                                                     │
//! │    categories:  [{name: "Pain Relief"}, {name: "Antibiotic"}]       │
//! │    medicines:   projection of the `category` column                 │
//! │                 ["Pain Relief", "Pain Relief", "Antibiotic"]        │
//! │                                                                     │
//! │  One pass per entity row: count refs that string-equal the name.    │
//! │                                                                     │
//! │    Pain Relief → 2      Antibiotic → 1                              │
//! │                                                                     │
//! │  Counts are never persisted. They are consistent right after a      │
//! │  load() and go stale after a save/remove until the next load().     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Matching is exact string equality (case-sensitive): a renamed category
//! counts zero until every referencing medicine row is updated too.

use crate::types::{Category, CategoryWithCount, Supplier, SupplierWithCount};

/// Counts references that string-equal `name`.
#[inline]
pub fn count_for_name(refs: &[String], name: &str) -> usize {
    refs.iter().filter(|r| r.as_str() == name).count()
}

/// Attaches derived medicine counts to a freshly fetched category list.
///
/// `category_refs` is the projection of the medicines collection restricted
/// to the `category` column.
pub fn with_category_counts(
    categories: Vec<Category>,
    category_refs: &[String],
) -> Vec<CategoryWithCount> {
    categories
        .into_iter()
        .map(|category| {
            let medicine_count = count_for_name(category_refs, &category.name);
            CategoryWithCount {
                category,
                medicine_count,
            }
        })
        .collect()
}

/// Attaches derived medicine counts to a freshly fetched supplier list.
///
/// `supplier_refs` is the projection of the medicines collection restricted
/// to the `supplier` column.
pub fn with_supplier_counts(
    suppliers: Vec<Supplier>,
    supplier_refs: &[String],
) -> Vec<SupplierWithCount> {
    suppliers
        .into_iter()
        .map(|supplier| {
            let medicine_count = count_for_name(supplier_refs, &supplier.name);
            SupplierWithCount {
                supplier,
                medicine_count,
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
