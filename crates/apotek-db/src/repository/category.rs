//! # Category Repository
//!
//! Store operations for the `categories` collection.
//!
//! Category names are UNIQUE in the store (medicines reference them by
//! name string); inserting a duplicate surfaces as
//! [`GatewayError::UniqueViolation`].

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::CategoryGateway;
use apotek_core::{Category, CategoryDraft};

/// Repository for category store operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }
}

#[async_trait]
impl CategoryGateway for CategoryRepository {
    /// Fetches every category row, sorted by name for stable display.
    async fn select_all(&self) -> GatewayResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name, color FROM categories ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        debug!(count = categories.len(), "Selected categories");
        Ok(categories)
    }

    /// Inserts a new category; the id is assigned store-side.
    async fn insert(&self, draft: &CategoryDraft) -> GatewayResult<Category> {
        let id = Uuid::new_v4().to_string();

        debug!(id = %id, name = %draft.name, "Inserting category");

        sqlx::query("INSERT INTO categories (id, name, color) VALUES (?1, ?2, ?3)")
            .bind(&id)
            .bind(&draft.name)
            .bind(&draft.color)
            .execute(&self.pool)
            .await?;

        Ok(Category {
            id,
            name: draft.name.clone(),
            color: draft.color.clone(),
        })
    }

    /// Updates name and color of an existing category.
    ///
    /// No cascade: medicines referencing the old name keep it and are
    /// silently orphaned until updated individually.
    async fn update(&self, id: &str, draft: &CategoryDraft) -> GatewayResult<()> {
        debug!(id = %id, "Updating category");

        let result = sqlx::query("UPDATE categories SET name = ?2, color = ?3 WHERE id = ?1")
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.color)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::not_found("Category", id));
        }

        Ok(())
    }

    /// Deletes a category row by id. Referencing medicines are untouched.
    async fn delete(&self, id: &str) -> GatewayResult<()> {
        debug!(id = %id, "Deleting category");

        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::not_found("Category", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
