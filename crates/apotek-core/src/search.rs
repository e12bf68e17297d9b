//! # Search Module
//!
//! Case-insensitive substring filters over the in-memory mirrors.
//!
//! ## Search Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Collection     Fields matched                                      │
//! │  ──────────     ──────────────                                      │
//! │  medicines      name, category, supplier                            │
//! │  categories     name                                                │
//! │  suppliers      name, email                                         │
//! │                                                                     │
//! │  • Substring containment, not prefix or fuzzy matching              │
//! │  • Case-insensitive on both sides                                   │
//! │  • Empty (or whitespace-only) query matches everything              │
//! │  • Never touches the remote store                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{Category, Medicine, Supplier};

/// Case-insensitive substring containment. Empty needles match everything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(needle)
}

/// True when a medicine matches the query on name, category, or supplier.
///
/// ## Example
/// ```rust
/// use apotek_core::search::medicine_matches;
/// # use apotek_core::Medicine;
/// # use chrono::NaiveDate;
/// # let m = Medicine {
/// #     id: "m-1".into(),
/// #     name: "Amoxicillin 250mg".into(),
/// #     category: "Antibiotic".into(),
/// #     stock: 3,
/// #     price_idr: 12_000,
/// #     expiry_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
/// #     supplier: "PT Pharma Indo".into(),
/// # };
/// assert!(medicine_matches(&m, "AMOX"));
/// assert!(medicine_matches(&m, "antibio"));
/// assert!(!medicine_matches(&m, "paracetamol"));
/// ```
pub fn medicine_matches(medicine: &Medicine, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    contains_ci(&medicine.name, &q)
        || contains_ci(&medicine.category, &q)
        || contains_ci(&medicine.supplier, &q)
}

/// True when a category matches the query on name.
pub fn category_matches(category: &Category, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    contains_ci(&category.name, &q)
}

/// True when a supplier matches the query on name or email.
pub fn supplier_matches(supplier: &Supplier, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    contains_ci(&supplier.name, &q) || contains_ci(&supplier.email, &q)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn med(name: &str, category: &str, supplier: &str) -> Medicine {
        Medicine {
            id: format!("m-{name}"),
            name: name.to_string(),
            category: category.to_string(),
            stock: 10,
            price_idr: 1_000,
            expiry_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            supplier: supplier.to_string(),
        }
    }

    #[test]
    fn test_medicine_search_is_case_insensitive() {
        let meds = vec![
            med("Amoxicillin 250mg", "Antibiotic", "PT Pharma Indo"),
            med("Paracetamol 500mg", "Pain Relief", "CV Medika Jaya"),
        ];

        let hits: Vec<_> = meds.iter().filter(|m| medicine_matches(m, "amox")).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Amoxicillin 250mg");
    }

    #[test]
    fn test_medicine_search_covers_category_and_supplier() {
        let m = med("Cetirizine 10mg", "Allergy", "PT Pharma Indo");
        assert!(medicine_matches(&m, "allergy"));
        assert!(medicine_matches(&m, "pharma indo"));
        assert!(!medicine_matches(&m, "vitamin"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let m = med("Vitamin C 1000mg", "Supplement", "CV Medika Jaya");
        assert!(medicine_matches(&m, ""));
        assert!(medicine_matches(&m, "   "));
    }

    #[test]
    fn test_category_search_matches_name_only() {
        let c = Category {
            id: "c-1".to_string(),
            name: "Pain Relief".to_string(),
            color: "#3B82F6".to_string(),
        };
        assert!(category_matches(&c, "pain"));
        assert!(!category_matches(&c, "3b82f6")); // color is not searched
    }

    #[test]
    fn test_supplier_search_matches_name_or_email() {
        let s = Supplier {
            id: "s-1".to_string(),
            name: "PT Pharma Indo".to_string(),
            contact: "+62 812-3456-7890".to_string(),
            email: "sales@pharmaindo.co.id".to_string(),
            address: "Jl. Sudirman 12, Jakarta".to_string(),
        };
        assert!(supplier_matches(&s, "pharma"));
        assert!(supplier_matches(&s, "PHARMAINDO.CO.ID"));
        assert!(!supplier_matches(&s, "jakarta")); // address is not searched
        assert!(!supplier_matches(&s, "812")); // contact is not searched
    }
}
