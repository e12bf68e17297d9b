//! # Supplier Repository
//!
//! Store operations for the `suppliers` collection.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::SupplierGateway;
use apotek_core::{Supplier, SupplierDraft};

/// Repository for supplier store operations.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SupplierRepository { pool }
    }
}

#[async_trait]
impl SupplierGateway for SupplierRepository {
    /// Fetches every supplier row, sorted by name for stable display.
    async fn select_all(&self) -> GatewayResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, contact, email, address FROM suppliers ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = suppliers.len(), "Selected suppliers");
        Ok(suppliers)
    }

    /// Inserts a new supplier; the id is assigned store-side.
    async fn insert(&self, draft: &SupplierDraft) -> GatewayResult<Supplier> {
        let id = Uuid::new_v4().to_string();

        debug!(id = %id, name = %draft.name, "Inserting supplier");

        sqlx::query(
            r#"
            INSERT INTO suppliers (id, name, contact, email, address)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&id)
        .bind(&draft.name)
        .bind(&draft.contact)
        .bind(&draft.email)
        .bind(&draft.address)
        .execute(&self.pool)
        .await?;

        Ok(Supplier {
            id,
            name: draft.name.clone(),
            contact: draft.contact.clone(),
            email: draft.email.clone(),
            address: draft.address.clone(),
        })
    }

    /// Updates every editable field of an existing supplier.
    ///
    /// No cascade: medicines referencing the old name keep it.
    async fn update(&self, id: &str, draft: &SupplierDraft) -> GatewayResult<()> {
        debug!(id = %id, "Updating supplier");

        let result = sqlx::query(
            r#"
            UPDATE suppliers SET
                name = ?2,
                contact = ?3,
                email = ?4,
                address = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.contact)
        .bind(&draft.email)
        .bind(&draft.address)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::not_found("Supplier", id));
        }

        Ok(())
    }

    /// Deletes a supplier row by id. Referencing medicines are untouched.
    async fn delete(&self, id: &str) -> GatewayResult<()> {
        debug!(id = %id, "Deleting supplier");

        let result = sqlx::query("DELETE FROM suppliers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::not_found("Supplier", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
