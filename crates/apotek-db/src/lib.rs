//! # apotek-db: Remote Data Gateway for Apotek
//!
//! This crate provides the gateway every page controller talks to. It
//! defines the per-collection gateway traits and implements them on a
//! SQLite store via sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Apotek Data Flow                             │
//! │                                                                     │
//! │  Session controller (MedicinesState::load)                          │
//! │       │                                                             │
//! │       ▼  Arc<dyn MedicineGateway>                                   │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                    apotek-db (THIS CRATE)                   │   │
//! │  │                                                             │   │
//! │  │   ┌──────────────┐   ┌───────────────┐   ┌──────────────┐  │   │
//! │  │   │   Database   │   │  Repositories │   │  Migrations  │  │   │
//! │  │   │   (pool.rs)  │   │ (medicine.rs) │   │  (embedded)  │  │   │
//! │  │   │              │   │               │   │              │  │   │
//! │  │   │ SqlitePool   │◄──│ MedicineRepo  │   │ 001_init.sql │  │   │
//! │  │   │ Connection   │   │ CategoryRepo  │   │              │  │   │
//! │  │   │ Management   │   │ SupplierRepo  │   │              │  │   │
//! │  │   └──────────────┘   └───────────────┘   └──────────────┘  │   │
//! │  │                                                             │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite store (the hosted table service, opaque to callers)         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`gateway`] - Per-collection gateway traits (the seam callers mock)
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Gateway error types
//! - [`repository`] - Repository implementations (medicine, category, supplier)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use apotek_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/apotek.db")).await?;
//! let medicines = db.medicines().select_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod gateway;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{GatewayError, GatewayResult};
pub use gateway::{CategoryGateway, MedicineGateway, SupplierGateway};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::medicine::MedicineRepository;
pub use repository::supplier::SupplierRepository;
