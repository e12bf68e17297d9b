//! # Validation Module
//!
//! Input validation for entity drafts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Session controller (this module, via validate_*_draft)    │
//! │  ├── Required / length / range checks on the draft                  │
//! │  └── A failure surfaces one toast and issues NO remote call         │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Store (SQLite)                                            │
//! │  ├── NOT NULL constraints                                           │
//! │  ├── CHECK constraints (stock >= 0, price_idr >= 0)                 │
//! │  └── UNIQUE constraints (category name)                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use apotek_core::validation::{validate_name, validate_quick_add_quantity};
//!
//! assert!(validate_name("name", "Paracetamol 500mg").is_ok());
//! assert!(validate_quick_add_quantity(10).is_ok());
//! assert!(validate_quick_add_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{CategoryDraft, MedicineDraft, SupplierDraft};
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required name-like field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_NAME_LEN`] characters
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a display color.
///
/// ## Rules
/// - Format `#RRGGBB`: a `#` followed by exactly six hex digits
pub fn validate_hex_color(color: &str) -> ValidationResult<()> {
    let color = color.trim();

    let rest = color.strip_prefix('#').ok_or_else(|| {
        ValidationError::InvalidFormat {
            field: "color".to_string(),
            reason: "must start with '#'".to_string(),
        }
    })?;

    if rest.len() != 6 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidFormat {
            field: "color".to_string(),
            reason: "must be '#' followed by six hex digits".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must contain exactly one `@` with non-empty local part
/// - Domain must contain a `.` that is neither first nor last
///
/// Deliberately shallow: the store is the authority on deliverability;
/// this only rejects obviously malformed input before a remote call.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().ok_or_else(|| invalid("missing '@'"))?;

    if local.is_empty() {
        return Err(invalid("missing local part"));
    }
    if domain.contains('@') {
        return Err(invalid("multiple '@'"));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("malformed domain"));
    }

    Ok(())
}

/// Validates a stock level (allowed to be zero).
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "stock".to_string(),
        });
    }
    Ok(())
}

/// Validates a price in whole rupiah (zero allowed for free items).
pub fn validate_price_idr(price_idr: i64) -> ValidationResult<()> {
    if price_idr < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a quick-add quantity.
///
/// The form's minimum input is 1, so zero and negative quantities are
/// rejected here as well: quick-add can never decrement stock.
pub fn validate_quick_add_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Draft Validators
// =============================================================================

/// Validates a full medicine draft before any remote call.
pub fn validate_medicine_draft(draft: &MedicineDraft) -> ValidationResult<()> {
    validate_name("name", &draft.name)?;
    validate_name("category", &draft.category)?;
    validate_name("supplier", &draft.supplier)?;
    validate_stock(draft.stock)?;
    validate_price_idr(draft.price_idr)?;
    Ok(())
}

/// Validates a category draft before any remote call.
pub fn validate_category_draft(draft: &CategoryDraft) -> ValidationResult<()> {
    validate_name("name", &draft.name)?;
    validate_hex_color(&draft.color)?;
    Ok(())
}

/// Validates a supplier draft before any remote call.
pub fn validate_supplier_draft(draft: &SupplierDraft) -> ValidationResult<()> {
    validate_name("name", &draft.name)?;
    validate_name("contact", &draft.contact)?;
    validate_name("address", &draft.address)?;
    validate_email(&draft.email)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
