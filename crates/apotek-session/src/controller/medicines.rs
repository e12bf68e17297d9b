//! # Medicines Page Controller
//!
//! List state for the medicines page: the full medicine mirror plus the
//! category and supplier mirrors the edit form's select inputs need.
//!
//! ## load() Fetch Triple
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  tokio::join! ──┬── medicines.select_all()                          │
//! │                 ├── categories.select_all()                         │
//! │                 └── suppliers.select_all()                          │
//! │                                                                     │
//! │  All three ok ──► replace all three mirrors wholesale               │
//! │  Any failed   ──► keep ALL prior mirrors (never a partial           │
//! │                   overwrite), one destructive toast                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::error::SessionResult;
use crate::toast::ToastFeed;
use apotek_core::search::medicine_matches;
use apotek_core::validation::{validate_medicine_draft, validate_quick_add_quantity};
use apotek_core::{Category, CoreError, Medicine, MedicineDraft, Supplier};
use apotek_db::{CategoryGateway, Database, GatewayError, MedicineGateway, SupplierGateway};

/// List-state controller for the medicines page.
pub struct MedicinesState {
    medicine_gateway: Arc<dyn MedicineGateway>,
    category_gateway: Arc<dyn CategoryGateway>,
    supplier_gateway: Arc<dyn SupplierGateway>,

    medicines: Vec<Medicine>,
    categories: Vec<Category>,
    suppliers: Vec<Supplier>,

    toasts: ToastFeed,
}

impl MedicinesState {
    /// Wires the controller to the store-backed repositories.
    pub fn new(db: &Database) -> Self {
        Self::with_gateways(
            Arc::new(db.medicines()),
            Arc::new(db.categories()),
            Arc::new(db.suppliers()),
        )
    }

    /// Wires the controller to arbitrary gateway implementations.
    pub fn with_gateways(
        medicine_gateway: Arc<dyn MedicineGateway>,
        category_gateway: Arc<dyn CategoryGateway>,
        supplier_gateway: Arc<dyn SupplierGateway>,
    ) -> Self {
        MedicinesState {
            medicine_gateway,
            category_gateway,
            supplier_gateway,
            medicines: Vec::new(),
            categories: Vec::new(),
            suppliers: Vec::new(),
            toasts: ToastFeed::new(),
        }
    }

    // =========================================================================
    // Remote Operations
    // =========================================================================

    /// Fetches all three collections in parallel and replaces the mirrors.
    ///
    /// On any fetch error the prior mirrors stay untouched and one
    /// destructive toast is recorded.
    pub async fn load(&mut self) -> SessionResult<()> {
        debug!("Loading medicines page data");

        let (medicines, categories, suppliers) = tokio::join!(
            self.medicine_gateway.select_all(),
            self.category_gateway.select_all(),
            self.supplier_gateway.select_all(),
        );

        let fetched =
            (|| Ok::<_, GatewayError>((medicines?, categories?, suppliers?)))();

        match fetched {
            Ok((medicines, categories, suppliers)) => {
                info!(
                    medicines = medicines.len(),
                    categories = categories.len(),
                    suppliers = suppliers.len(),
                    "Medicines page data loaded"
                );
                self.medicines = medicines;
                self.categories = categories;
                self.suppliers = suppliers;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Failed to load medicines page data");
                self.toasts.destructive(
                    "Error",
                    "Failed to fetch data from the store. Please check your connection.",
                );
                Err(err.into())
            }
        }
    }

    /// Saves a draft: update when it carries an id, insert otherwise.
    ///
    /// On a successful update the matching mirror row is overwritten with
    /// the draft's fields (draft wins on every key). On a successful insert
    /// the store-returned row is appended. Failure leaves the mirror
    /// unchanged.
    pub async fn save(&mut self, draft: MedicineDraft) -> SessionResult<()> {
        if let Err(err) = validate_medicine_draft(&draft) {
            warn!(error = %err, "Rejected medicine draft");
            self.toasts
                .destructive("Error", format!("Failed to save medicine: {err}"));
            return Err(err.into());
        }

        match draft.id.clone() {
            Some(id) => match self.medicine_gateway.update(&id, &draft).await {
                Ok(()) => {
                    if let Some(row) = self.medicines.iter_mut().find(|m| m.id == id) {
                        draft.apply_to(row);
                    }
                    info!(id = %id, "Medicine updated");
                    self.toasts.success(
                        "Medicine Updated",
                        format!("{} has been updated.", draft.name),
                    );
                    Ok(())
                }
                Err(err) => {
                    error!(id = %id, error = %err, "Failed to update medicine");
                    self.toasts
                        .destructive("Error", format!("Failed to save medicine: {err}"));
                    Err(err.into())
                }
            },
            None => match self.medicine_gateway.insert(&draft).await {
                Ok(row) => {
                    info!(id = %row.id, "Medicine inserted");
                    self.toasts.success(
                        "Medicine Added",
                        format!("{} has been added.", draft.name),
                    );
                    self.medicines.push(row);
                    Ok(())
                }
                Err(err) => {
                    error!(error = %err, "Failed to insert medicine");
                    self.toasts
                        .destructive("Error", format!("Failed to save medicine: {err}"));
                    Err(err.into())
                }
            },
        }
    }

    /// Deletes a medicine by id and drops it from the mirror.
    pub async fn remove(&mut self, id: &str) -> SessionResult<()> {
        match self.medicine_gateway.delete(id).await {
            Ok(()) => {
                let name = self
                    .medicines
                    .iter()
                    .find(|m| m.id == id)
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| id.to_string());
                self.medicines.retain(|m| m.id != id);

                info!(id = %id, "Medicine deleted");
                // Delete acknowledgments use the destructive styling
                self.toasts.destructive(
                    "Medicine Deleted",
                    format!("{name} has been removed from the system."),
                );
                Ok(())
            }
            Err(err) => {
                error!(id = %id, error = %err, "Failed to delete medicine");
                self.toasts
                    .destructive("Error", format!("Failed to delete medicine: {err}"));
                Err(err.into())
            }
        }
    }

    /// Quick-add: raises the stock of one medicine by `quantity` (≥ 1).
    ///
    /// Issues exactly one partial update carrying the absolute new stock,
    /// computed from the mirror's last-known value. The value is NOT
    /// re-read from the store first, so two concurrent quick-adds from
    /// different sessions can lose one increment; accepted limitation.
    pub async fn quick_add(&mut self, id: &str, quantity: i64) -> SessionResult<()> {
        if let Err(err) = validate_quick_add_quantity(quantity) {
            warn!(quantity, error = %err, "Rejected quick-add quantity");
            self.toasts
                .destructive("Error", format!("Failed to update stock: {err}"));
            return Err(err.into());
        }

        let Some((current_stock, name)) = self
            .medicines
            .iter()
            .find(|m| m.id == id)
            .map(|m| (m.stock, m.name.clone()))
        else {
            let err = CoreError::MedicineNotFound(id.to_string());
            warn!(id = %id, "Quick-add target not in mirror");
            self.toasts
                .destructive("Error", format!("Failed to update stock: {err}"));
            return Err(err.into());
        };

        let new_stock = current_stock + quantity;

        match self.medicine_gateway.update_stock(id, new_stock).await {
            Ok(()) => {
                if let Some(row) = self.medicines.iter_mut().find(|m| m.id == id) {
                    row.stock = new_stock;
                }
                info!(id = %id, stock = new_stock, "Stock quick-added");
                self.toasts
                    .success("Stock Added", format!("Added {quantity} units to {name}"));
                Ok(())
            }
            Err(err) => {
                error!(id = %id, error = %err, "Failed to update stock");
                self.toasts
                    .destructive("Error", format!("Failed to update stock: {err}"));
                Err(err.into())
            }
        }
    }

    // =========================================================================
    // Local Views
    // =========================================================================

    /// Pure, synchronous filter over the mirror: matches on name, category,
    /// or supplier, case-insensitively. Never touches the store.
    pub fn search(&self, query: &str) -> Vec<&Medicine> {
        self.medicines
            .iter()
            .filter(|m| medicine_matches(m, query))
            .collect()
    }

    /// The medicine mirror as of the last successful load/mutation.
    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    /// The category mirror (for the edit form's select input).
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The supplier mirror (for the edit form's select input).
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
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
