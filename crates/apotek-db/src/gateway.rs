//! # Gateway Traits
//!
//! The seam between the session layer and the remote store.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Four generic operations per named collection:                      │
//! │                                                                     │
//! │    select_all()        → every row, order not significant           │
//! │    insert(draft)       → the inserted row, id assigned store-side   │
//! │    update(id, fields)  → success/error (returned row not consumed)  │
//! │    delete(id)          → success/error                              │
//! │                                                                     │
//! │  The medicines collection additionally exposes:                     │
//! │    select_category_refs / select_supplier_refs                      │
//! │        projections of one referencing column, used for derived      │
//! │        counts                                                       │
//! │    update_stock(id, stock)                                          │
//! │        the partial-row update quick-add issues                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Controllers hold `Arc<dyn …Gateway>` so tests can substitute recording
//! mocks with failure injection; the production implementations live in
//! [`crate::repository`].

use async_trait::async_trait;

use crate::error::GatewayResult;
use apotek_core::{
    Category, CategoryDraft, Medicine, MedicineDraft, Supplier, SupplierDraft,
};

/// Gateway operations on the `medicines` collection.
#[async_trait]
pub trait MedicineGateway: Send + Sync {
    /// Fetches every medicine row.
    async fn select_all(&self) -> GatewayResult<Vec<Medicine>>;

    /// Projection of the `category` column across all medicine rows.
    async fn select_category_refs(&self) -> GatewayResult<Vec<String>>;

    /// Projection of the `supplier` column across all medicine rows.
    async fn select_supplier_refs(&self) -> GatewayResult<Vec<String>>;

    /// Inserts a new row; the store assigns the identifier and returns the
    /// complete row.
    async fn insert(&self, draft: &MedicineDraft) -> GatewayResult<Medicine>;

    /// Updates every editable field of the row with the given id.
    async fn update(&self, id: &str, draft: &MedicineDraft) -> GatewayResult<()>;

    /// Partial-row update of the stock field only (quick-add path).
    ///
    /// `stock` is the absolute new value, computed by the caller from its
    /// last-known stock; the store does not re-read before writing, so
    /// concurrent quick-adds from different sessions can lose an increment.
    async fn update_stock(&self, id: &str, stock: i64) -> GatewayResult<()>;

    /// Deletes the row with the given id.
    async fn delete(&self, id: &str) -> GatewayResult<()>;
}

/// Gateway operations on the `categories` collection.
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    async fn select_all(&self) -> GatewayResult<Vec<Category>>;

    async fn insert(&self, draft: &CategoryDraft) -> GatewayResult<Category>;

    async fn update(&self, id: &str, draft: &CategoryDraft) -> GatewayResult<()>;

    async fn delete(&self, id: &str) -> GatewayResult<()>;
}

/// Gateway operations on the `suppliers` collection.
#[async_trait]
pub trait SupplierGateway: Send + Sync {
    async fn select_all(&self) -> GatewayResult<Vec<Supplier>>;

    async fn insert(&self, draft: &SupplierDraft) -> GatewayResult<Supplier>;

    async fn update(&self, id: &str, draft: &SupplierDraft) -> GatewayResult<()>;

    async fn delete(&self, id: &str) -> GatewayResult<()>;
}
