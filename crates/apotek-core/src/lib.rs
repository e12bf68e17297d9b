//! # apotek-core: Pure Domain Logic for Apotek
//!
//! This crate is the **heart** of the Apotek pharmacy inventory system.
//! It contains the domain model and every derived computation as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Apotek Architecture                            │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │              apotek-session (page controllers)              │   │
//! │  │   MedicinesState ── CategoriesState ── SuppliersState       │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ apotek-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌──────────┐ ┌────────┐ ┌────────┐ ┌───────┐  │   │
//! │  │  │  types  │ │ classify │ │ search │ │ counts │ │ money │  │   │
//! │  │  │Medicine │ │  Stock   │ │ substr │ │ derive │ │Rupiah │  │   │
//! │  │  │Category │ │  Expiry  │ │ match  │ │ counts │ │format │  │   │
//! │  │  └─────────┘ └──────────┘ └────────┘ └────────┘ └───────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                apotek-db (remote data gateway)               │   │
//! │  │        Gateway traits, SQLite repositories, migrations       │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Medicine, Category, Supplier, Notification)
//! - [`classify`] - Stock/expiry classification and badge-variant mapping
//! - [`search`] - Case-insensitive substring filters per collection
//! - [`counts`] - Derived medicine counts for categories and suppliers
//! - [`money`] - Rupiah type with integer arithmetic (no floating point!)
//! - [`notifications`] - In-memory notification feed
//! - [`validation`] - Input validation for entity drafts
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output; "today" is an argument,
//!    never read from a clock inside this crate
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all prices are whole rupiah (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use apotek_core::classify::StockStatus;
//!
//! assert_eq!(StockStatus::of(0), StockStatus::OutOfStock);
//! assert_eq!(StockStatus::of(3), StockStatus::LowStock);
//! assert_eq!(StockStatus::of(40), StockStatus::InStock);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod classify;
pub mod counts;
pub mod error;
pub mod money;
pub mod notifications;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use apotek_core::Medicine` instead of
// `use apotek_core::types::Medicine`

pub use classify::{BadgeVariant, ExpiryStatus, StockStatus};
pub use error::{CoreError, ValidationError};
pub use money::Rupiah;
pub use notifications::NotificationFeed;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level below which a medicine is flagged as "Low Stock".
///
/// Exactly zero stock classifies as "Out of Stock" instead. The threshold
/// is a fixed constant, not configurable per pharmacy.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Number of days before expiry at which a medicine gets an "Expiring"
/// badge. At or beyond this horizon no badge is shown.
pub const EXPIRY_WARNING_DAYS: i64 = 90;

/// Default display color assigned to a new category draft.
pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";

/// Maximum length accepted for entity names (medicines, categories,
/// suppliers).
pub const MAX_NAME_LEN: usize = 200;
