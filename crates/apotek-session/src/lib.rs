//! # apotek-session: Page-Level List-State Controllers
//!
//! Each page of the dashboard owns one controller from this crate. A
//! controller fetches its collections through the gateway traits, holds an
//! in-memory mirror, and reconciles that mirror after each mutation.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Controller Lifecycle                            │
//! │                                                                     │
//! │  construct ──► load() ──► read mirror + derived values              │
//! │                  │                                                  │
//! │                  │   save(draft) / remove(id) / quick_add(id, qty)  │
//! │                  │        │                                         │
//! │                  │        ▼                                         │
//! │                  │   gateway call ──ok──► patch the mirror row      │
//! │                  │        │               + one success toast       │
//! │                  │        └──err──► mirror untouched                │
//! │                  │                  + one destructive toast         │
//! │                  ▼                                                  │
//! │            search(query) is pure and never touches the gateway      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency
//! Derived medicine counts are recomputed only by a full `load()`. A
//! `save`/`remove` patches the primary row and nothing else, so counts can
//! go briefly stale until the next `load()` — this is the documented
//! contract, not an accident (see the tests pinning it).
//!
//! ## Modules
//!
//! - [`controller`] - MedicinesState, CategoriesState, SuppliersState,
//!   NotificationsState
//! - [`toast`] - the acknowledgment feed every controller writes to
//! - [`dashboard`] - statistics derived from already-fetched mirrors
//! - [`error`] - the session error funnel

// =============================================================================
// Module Declarations
// =============================================================================

pub mod controller;
pub mod dashboard;
pub mod error;
pub mod toast;

#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use controller::categories::CategoriesState;
pub use controller::medicines::MedicinesState;
pub use controller::notifications::NotificationsState;
pub use controller::suppliers::SuppliersState;
pub use dashboard::DashboardStats;
pub use error::SessionError;
pub use toast::{Toast, ToastFeed, ToastVariant};
