//! # Page Controllers
//!
//! One controller per dashboard page. Each holds its own mirror and toast
//! feed; nothing is shared between pages except the gateway underneath.
//!
//! All controllers follow the same reconciliation rules (see crate docs);
//! the per-page differences are which collections `load()` fetches and
//! which fields `search()` matches.

pub mod categories;
pub mod medicines;
pub mod notifications;
pub mod suppliers;
