//! # Medicine Repository
//!
//! Store operations for the `medicines` collection.
//!
//! ## Key Operations
//! - Full-collection select for the page mirror
//! - Category/supplier projections for derived counts
//! - Insert with store-side id assignment
//! - Full-row update and the stock-only partial update (quick-add)
//!
//! ## Projection Queries
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  The categories and suppliers pages never need full medicine rows;  │
//! │  they fetch one column to derive counts:                            │
//! │                                                                     │
//! │    SELECT category FROM medicines                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │    ["Pain Relief", "Pain Relief", "Antibiotic", ...]                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │    apotek_core::counts::with_category_counts(...)                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::MedicineGateway;
use apotek_core::{Medicine, MedicineDraft};

const SELECT_COLUMNS: &str = "id, name, category, stock, price_idr, expiry_date, supplier";

/// Repository for medicine store operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = MedicineRepository::new(pool);
/// let all = repo.select_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct MedicineRepository {
    pool: SqlitePool,
}

impl MedicineRepository {
    /// Creates a new MedicineRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MedicineRepository { pool }
    }
}

#[async_trait]
impl MedicineGateway for MedicineRepository {
    /// Fetches every medicine row, sorted by name for stable display.
    async fn select_all(&self) -> GatewayResult<Vec<Medicine>> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM medicines ORDER BY name");
        let medicines = sqlx::query_as::<_, Medicine>(&query)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = medicines.len(), "Selected medicines");
        Ok(medicines)
    }

    async fn select_category_refs(&self) -> GatewayResult<Vec<String>> {
        let refs = sqlx::query_scalar::<_, String>("SELECT category FROM medicines")
            .fetch_all(&self.pool)
            .await?;

        Ok(refs)
    }

    async fn select_supplier_refs(&self) -> GatewayResult<Vec<String>> {
        let refs = sqlx::query_scalar::<_, String>("SELECT supplier FROM medicines")
            .fetch_all(&self.pool)
            .await?;

        Ok(refs)
    }

    /// Inserts a new medicine; the id is assigned here, store-side, and the
    /// complete row is returned to the caller.
    async fn insert(&self, draft: &MedicineDraft) -> GatewayResult<Medicine> {
        let id = Uuid::new_v4().to_string();

        debug!(id = %id, name = %draft.name, "Inserting medicine");

        sqlx::query(
            r#"
            INSERT INTO medicines (id, name, category, stock, price_idr, expiry_date, supplier)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&id)
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.stock)
        .bind(draft.price_idr)
        .bind(draft.expiry_date)
        .bind(&draft.supplier)
        .execute(&self.pool)
        .await?;

        Ok(Medicine {
            id,
            name: draft.name.clone(),
            category: draft.category.clone(),
            stock: draft.stock,
            price_idr: draft.price_idr,
            expiry_date: draft.expiry_date,
            supplier: draft.supplier.clone(),
        })
    }

    /// Updates every editable field of an existing medicine.
    async fn update(&self, id: &str, draft: &MedicineDraft) -> GatewayResult<()> {
        debug!(id = %id, "Updating medicine");

        let result = sqlx::query(
            r#"
            UPDATE medicines SET
                name = ?2,
                category = ?3,
                stock = ?4,
                price_idr = ?5,
                expiry_date = ?6,
                supplier = ?7,
                updated_at = datetime('now')
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.stock)
        .bind(draft.price_idr)
        .bind(draft.expiry_date)
        .bind(&draft.supplier)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::not_found("Medicine", id));
        }

        Ok(())
    }

    /// Sets the stock field to an absolute value (quick-add path).
    ///
    /// The caller computed `stock` from its last-known value; no re-read
    /// happens here, so this is last-write-wins across sessions.
    async fn update_stock(&self, id: &str, stock: i64) -> GatewayResult<()> {
        debug!(id = %id, stock = %stock, "Updating medicine stock");

        let result = sqlx::query(
            r#"
            UPDATE medicines SET
                stock = ?2,
                updated_at = datetime('now')
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(stock)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::not_found("Medicine", id));
        }

        Ok(())
    }

    /// Deletes a medicine row by id.
    async fn delete(&self, id: &str) -> GatewayResult<()> {
        debug!(id = %id, "Deleting medicine");

        let result = sqlx::query("DELETE FROM medicines WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::not_found("Medicine", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
