//! # Categories Page Controller
//!
//! List state for the categories page: the category mirror with derived
//! medicine counts.
//!
//! ## Derived Count Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  load() ──┬── categories.select_all()                               │
//! │           └── medicines.select_category_refs()   (projection)       │
//! │                      │                                              │
//! │                      ▼                                              │
//! │  with_category_counts(): one pass, string equality on the name      │
//! │                                                                     │
//! │  save(update) keeps the row's EXISTING count (possibly stale)       │
//! │  save(insert) appends with count 0                                  │
//! │  remove() just drops the row; no other row is re-counted            │
//! │                                                                     │
//! │  Counts refresh ONLY on the next load().                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::error::SessionResult;
use crate::toast::ToastFeed;
use apotek_core::counts::with_category_counts;
use apotek_core::search::category_matches;
use apotek_core::validation::validate_category_draft;
use apotek_core::{CategoryDraft, CategoryWithCount};
use apotek_db::{CategoryGateway, Database, GatewayError, MedicineGateway};

/// List-state controller for the categories page.
pub struct CategoriesState {
    category_gateway: Arc<dyn CategoryGateway>,
    medicine_gateway: Arc<dyn MedicineGateway>,

    categories: Vec<CategoryWithCount>,

    toasts: ToastFeed,
}

impl CategoriesState {
    /// Wires the controller to the store-backed repositories.
    pub fn new(db: &Database) -> Self {
        Self::with_gateways(Arc::new(db.categories()), Arc::new(db.medicines()))
    }

    /// Wires the controller to arbitrary gateway implementations.
    pub fn with_gateways(
        category_gateway: Arc<dyn CategoryGateway>,
        medicine_gateway: Arc<dyn MedicineGateway>,
    ) -> Self {
        CategoriesState {
            category_gateway,
            medicine_gateway,
            categories: Vec::new(),
            toasts: ToastFeed::new(),
        }
    }

    // =========================================================================
    // Remote Operations
    // =========================================================================

    /// Fetches the category collection and the medicines category
    /// projection in parallel, then recomputes every derived count in one
    /// pass. Any fetch error keeps the prior mirror untouched.
    pub async fn load(&mut self) -> SessionResult<()> {
        debug!("Loading categories page data");

        let (categories, refs) = tokio::join!(
            self.category_gateway.select_all(),
            self.medicine_gateway.select_category_refs(),
        );

        let fetched = (|| Ok::<_, GatewayError>((categories?, refs?)))();

        match fetched {
            Ok((categories, refs)) => {
                info!(
                    categories = categories.len(),
                    medicine_refs = refs.len(),
                    "Categories page data loaded"
                );
                self.categories = with_category_counts(categories, &refs);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Failed to load categories page data");
                self.toasts.destructive("Error", "Failed to fetch categories.");
                Err(err.into())
            }
        }
    }

    /// Saves a draft: update when it carries an id, insert otherwise.
    ///
    /// An update merges name and color over the mirror row and keeps its
    /// existing medicine count as-is (the count may be stale until the next
    /// `load()` — no re-count happens here). An insert appends the
    /// store-returned row with count 0.
    pub async fn save(&mut self, draft: CategoryDraft) -> SessionResult<()> {
        if let Err(err) = validate_category_draft(&draft) {
            warn!(error = %err, "Rejected category draft");
            self.toasts
                .destructive("Error", format!("Failed to save category: {err}"));
            return Err(err.into());
        }

        match draft.id.clone() {
            Some(id) => match self.category_gateway.update(&id, &draft).await {
                Ok(()) => {
                    if let Some(entry) =
                        self.categories.iter_mut().find(|c| c.category.id == id)
                    {
                        entry.category.name = draft.name.clone();
                        entry.category.color = draft.color.clone();
                        // medicine_count deliberately untouched
                    }
                    info!(id = %id, "Category updated");
                    self.toasts.success(
                        "Category Updated",
                        format!("{} has been updated.", draft.name),
                    );
                    Ok(())
                }
                Err(err) => {
                    error!(id = %id, error = %err, "Failed to update category");
                    self.toasts
                        .destructive("Error", format!("Failed to save category: {err}"));
                    Err(err.into())
                }
            },
            None => match self.category_gateway.insert(&draft).await {
                Ok(row) => {
                    info!(id = %row.id, "Category inserted");
                    self.toasts.success(
                        "Category Added",
                        format!("{} has been added.", draft.name),
                    );
                    self.categories.push(CategoryWithCount {
                        category: row,
                        medicine_count: 0,
                    });
                    Ok(())
                }
                Err(err) => {
                    error!(error = %err, "Failed to insert category");
                    self.toasts
                        .destructive("Error", format!("Failed to save category: {err}"));
                    Err(err.into())
                }
            },
        }
    }

    /// Deletes a category by id and drops it from the mirror.
    ///
    /// Referencing medicines are untouched (and keep the dangling name);
    /// no other row's count changes because the emptied category is simply
    /// gone from the list.
    pub async fn remove(&mut self, id: &str) -> SessionResult<()> {
        match self.category_gateway.delete(id).await {
            Ok(()) => {
                self.categories.retain(|c| c.category.id != id);
                info!(id = %id, "Category deleted");
                self.toasts
                    .destructive("Category Deleted", "Category has been removed.");
                Ok(())
            }
            Err(err) => {
                error!(id = %id, error = %err, "Failed to delete category");
                self.toasts
                    .destructive("Error", format!("Failed to delete category: {err}"));
                Err(err.into())
            }
        }
    }

    // =========================================================================
    // Local Views
    // =========================================================================

    /// Pure, synchronous filter over the mirror: matches on name only.
    pub fn search(&self, query: &str) -> Vec<&CategoryWithCount> {
        self.categories
            .iter()
            .filter(|c| category_matches(&c.category, query))
            .collect()
    }

    /// The category mirror as of the last successful load/mutation.
    pub fn categories(&self) -> &[CategoryWithCount] {
        &self.categories
    }

    /// The acknowledgment feed.
    pub fn toasts(&self) -> &ToastFeed {
        &self.toasts
    }

    /// Mutable access so a presentation layer can drain the feed.
    pub fn toasts_mut(&mut self) -> &mut ToastFeed {
        &mut self.toasts
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::medicines::MedicinesState;
    use crate::testing::{
        category, medicine, MockCategories, MockMedicines, MockSuppliers,
    };

    fn pain_relief_fixture() -> (Arc<MockCategories>, Arc<MockMedicines>) {
        let categories = MockCategories::with_rows(vec![
            category("c-1", "Pain Relief", "#3B82F6"),
            category("c-2", "Antibiotic", "#10B981"),
        ]);
        let medicines = MockMedicines::with_rows(vec![
            medicine("m-1", "Paracetamol 500mg", "Pain Relief", 12),
            medicine("m-2", "Ibuprofen 400mg", "Pain Relief", 40),
            medicine("m-3", "Aspirin 100mg", "Pain Relief", 7),
            medicine("m-4", "Amoxicillin 250mg", "Antibiotic", 3),
        ]);
        (categories, medicines)
    }

    #[tokio::test]
    async fn test_load_derives_counts() {
        let (categories, medicines) = pain_relief_fixture();
        let mut state = CategoriesState::with_gateways(categories, medicines);

        state.load().await.unwrap();

        let pain = state
            .categories()
            .iter()
            .find(|c| c.category.name == "Pain Relief")
            .unwrap();
        assert_eq!(pain.medicine_count, 3);
    }

    #[tokio::test]
    async fn test_deleting_a_medicine_then_reloading_recounts() {
        let (categories, medicines) = pain_relief_fixture();
        let mut cat_state =
            CategoriesState::with_gateways(categories, medicines.clone());
        let mut med_state = MedicinesState::with_gateways(
            medicines,
            MockCategories::with_rows(Vec::new()),
            MockSuppliers::with_rows(Vec::new()),
        );

        cat_state.load().await.unwrap();
        med_state.load().await.unwrap();

        // delete one "Pain Relief" medicine through the medicines page
        med_state.remove("m-2").await.unwrap();

        // the categories mirror is stale until its next load()
        let pain = |s: &CategoriesState| {
            s.categories()
                .iter()
                .find(|c| c.category.name == "Pain Relief")
                .unwrap()
                .medicine_count
        };
        assert_eq!(pain(&cat_state), 3);

        cat_state.load().await.unwrap();
        assert_eq!(pain(&cat_state), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_existing_count_until_reload() {
        let (categories, medicines) = pain_relief_fixture();
        let mut state = CategoriesState::with_gateways(categories, medicines);
        state.load().await.unwrap();

        // rename: the mirror keeps the stale count of 3 even though no
        // medicine references "Analgesics" yet
        state
            .save(CategoryDraft {
                id: Some("c-1".to_string()),
                name: "Analgesics".to_string(),
                color: "#3B82F6".to_string(),
            })
            .await
            .unwrap();

        let renamed = state
            .categories()
            .iter()
            .find(|c| c.category.id == "c-1")
            .unwrap();
        assert_eq!(renamed.category.name, "Analgesics");
        assert_eq!(renamed.medicine_count, 3);

        // after a reload the rename has orphaned the references
        state.load().await.unwrap();
        let renamed = state
            .categories()
            .iter()
            .find(|c| c.category.id == "c-1")
            .unwrap();
        assert_eq!(renamed.medicine_count, 0);
    }

    #[tokio::test]
    async fn test_insert_appends_with_zero_count() {
        let (categories, medicines) = pain_relief_fixture();
        let mut state = CategoriesState::with_gateways(categories, medicines);
        state.load().await.unwrap();

        state
            .save(CategoryDraft {
                id: None,
                name: "Vitamin".to_string(),
                color: "#8B5CF6".to_string(),
            })
            .await
            .unwrap();

        let added = state
            .categories()
            .iter()
            .find(|c| c.category.name == "Vitamin")
            .unwrap();
        assert!(!added.category.id.is_empty());
        assert_eq!(added.medicine_count, 0);
        assert_eq!(state.toasts().last().unwrap().title, "Category Added");
    }

    #[tokio::test]
    async fn test_remove_only_drops_the_row() {
        let (categories, medicines) = pain_relief_fixture();
        let mut state = CategoriesState::with_gateways(categories, medicines);
        state.load().await.unwrap();

        state.remove("c-1").await.unwrap();
        assert_eq!(state.categories().len(), 1);
        assert_eq!(state.categories()[0].category.name, "Antibiotic");
    }

    #[tokio::test]
    async fn test_failed_load_keeps_prior_mirror() {
        let (categories, medicines) = pain_relief_fixture();
        let mut state =
            CategoriesState::with_gateways(categories.clone(), medicines);
        state.load().await.unwrap();

        categories.fail_all(true);
        assert!(state.load().await.is_err());
        assert_eq!(state.categories().len(), 2);
        assert_eq!(state.toasts().len(), 1);
    }

    #[tokio::test]
    async fn test_search_matches_name_only() {
        let (categories, medicines) = pain_relief_fixture();
        let mut state = CategoriesState::with_gateways(categories, medicines);
        state.load().await.unwrap();

        assert_eq!(state.search("pain").len(), 1);
        assert_eq!(state.search("PAIN").len(), 1);
        assert_eq!(state.search("#3b82f6").len(), 0);
    }
}
