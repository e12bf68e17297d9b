//! # Suppliers Page Controller
//!
//! List state for the suppliers page: the supplier mirror with derived
//! medicine counts, keyed on the supplier name.
//!
//! Same reconciliation rules as the categories page; the differences are
//! the projection column (`supplier`) and the search fields (name or
//! email).

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::error::SessionResult;
use crate::toast::ToastFeed;
use apotek_core::counts::with_supplier_counts;
use apotek_core::search::supplier_matches;
use apotek_core::validation::validate_supplier_draft;
use apotek_core::{SupplierDraft, SupplierWithCount};
use apotek_db::{Database, GatewayError, MedicineGateway, SupplierGateway};

/// List-state controller for the suppliers page.
pub struct SuppliersState {
    supplier_gateway: Arc<dyn SupplierGateway>,
    medicine_gateway: Arc<dyn MedicineGateway>,

    suppliers: Vec<SupplierWithCount>,

    toasts: ToastFeed,
}

impl SuppliersState {
    /// Wires the controller to the store-backed repositories.
    pub fn new(db: &Database) -> Self {
        Self::with_gateways(Arc::new(db.suppliers()), Arc::new(db.medicines()))
    }

    /// Wires the controller to arbitrary gateway implementations.
    pub fn with_gateways(
        supplier_gateway: Arc<dyn SupplierGateway>,
        medicine_gateway: Arc<dyn MedicineGateway>,
    ) -> Self {
        SuppliersState {
            supplier_gateway,
            medicine_gateway,
            suppliers: Vec::new(),
            toasts: ToastFeed::new(),
        }
    }

    // =========================================================================
    // Remote Operations
    // =========================================================================

    /// Fetches the supplier collection and the medicines supplier
    /// projection in parallel, then recomputes every derived count in one
    /// pass. Any fetch error keeps the prior mirror untouched.
    pub async fn load(&mut self) -> SessionResult<()> {
        debug!("Loading suppliers page data");

        let (suppliers, refs) = tokio::join!(
            self.supplier_gateway.select_all(),
            self.medicine_gateway.select_supplier_refs(),
        );

        let fetched = (|| Ok::<_, GatewayError>((suppliers?, refs?)))();

        match fetched {
            Ok((suppliers, refs)) => {
                info!(
                    suppliers = suppliers.len(),
                    medicine_refs = refs.len(),
                    "Suppliers page data loaded"
                );
                self.suppliers = with_supplier_counts(suppliers, &refs);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Failed to load suppliers page data");
                self.toasts.destructive("Error", "Failed to fetch suppliers.");
                Err(err.into())
            }
        }
    }

    /// Saves a draft: update when it carries an id, insert otherwise.
    ///
    /// An update merges the draft's fields over the mirror row and keeps
    /// its existing medicine count as-is; an insert appends the
    /// store-returned row with count 0.
    pub async fn save(&mut self, draft: SupplierDraft) -> SessionResult<()> {
        if let Err(err) = validate_supplier_draft(&draft) {
            warn!(error = %err, "Rejected supplier draft");
            self.toasts
                .destructive("Error", format!("Failed to save supplier: {err}"));
            return Err(err.into());
        }

        match draft.id.clone() {
            Some(id) => match self.supplier_gateway.update(&id, &draft).await {
                Ok(()) => {
                    if let Some(entry) =
                        self.suppliers.iter_mut().find(|s| s.supplier.id == id)
                    {
                        draft.apply_to(&mut entry.supplier);
                        // medicine_count deliberately untouched
                    }
                    info!(id = %id, "Supplier updated");
                    self.toasts.success(
                        "Supplier Updated",
                        format!("{} has been updated.", draft.name),
                    );
                    Ok(())
                }
                Err(err) => {
                    error!(id = %id, error = %err, "Failed to update supplier");
                    self.toasts
                        .destructive("Error", format!("Failed to save supplier: {err}"));
                    Err(err.into())
                }
            },
            None => match self.supplier_gateway.insert(&draft).await {
                Ok(row) => {
                    info!(id = %row.id, "Supplier inserted");
                    self.toasts.success(
                        "Supplier Added",
                        format!("{} has been added.", draft.name),
                    );
                    self.suppliers.push(SupplierWithCount {
                        supplier: row,
                        medicine_count: 0,
                    });
                    Ok(())
                }
                Err(err) => {
                    error!(error = %err, "Failed to insert supplier");
                    self.toasts
                        .destructive("Error", format!("Failed to save supplier: {err}"));
                    Err(err.into())
                }
            },
        }
    }

    /// Deletes a supplier by id and drops it from the mirror. Referencing
    /// medicines keep the dangling name.
    pub async fn remove(&mut self, id: &str) -> SessionResult<()> {
        match self.supplier_gateway.delete(id).await {
            Ok(()) => {
                self.suppliers.retain(|s| s.supplier.id != id);
                info!(id = %id, "Supplier deleted");
                self.toasts
                    .destructive("Supplier Deleted", "Supplier has been removed.");
                Ok(())
            }
            Err(err) => {
                error!(id = %id, error = %err, "Failed to delete supplier");
                self.toasts
                    .destructive("Error", format!("Failed to delete supplier: {err}"));
                Err(err.into())
            }
        }
    }

    // =========================================================================
    // Local Views
    // =========================================================================

    /// Pure, synchronous filter over the mirror: matches on name or email.
    pub fn search(&self, query: &str) -> Vec<&SupplierWithCount> {
        self.suppliers
            .iter()
            .filter(|s| supplier_matches(&s.supplier, query))
            .collect()
    }

    /// The supplier mirror as of the last successful load/mutation.
    pub fn suppliers(&self) -> &[SupplierWithCount] {
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
