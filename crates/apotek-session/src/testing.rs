//! # Test Support
//!
//! Recording mock gateways with failure injection, plus fixture builders.
//!
//! Each mock keeps its rows behind a `Mutex` so the async trait methods
//! (`&self`) can mutate them, records the calls the tests assert on, and
//! flips every operation to a connection error when `fail_all(true)` is
//! set — the "network unreachable" scenario.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use apotek_core::{
    Category, CategoryDraft, Medicine, MedicineDraft, Supplier, SupplierDraft,
};
use apotek_db::{
    CategoryGateway, GatewayError, GatewayResult, MedicineGateway, SupplierGateway,
};

// =============================================================================
// Fixture Builders
// =============================================================================

/// A medicine fixture priced at Rp 5,000 with a far-out expiry.
pub fn medicine(id: &str, name: &str, category: &str, stock: i64) -> Medicine {
    Medicine {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        stock,
        price_idr: 5_000,
        expiry_date: NaiveDate::from_ymd_opt(2027, 6, 1).unwrap(),
        supplier: "PT Pharma Indo".to_string(),
    }
}

pub fn category(id: &str, name: &str, color: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    }
}

pub fn supplier(id: &str, name: &str, email: &str) -> Supplier {
    Supplier {
        id: id.to_string(),
        name: name.to_string(),
        contact: "+62 812-3456-7890".to_string(),
        email: email.to_string(),
        address: "Jl. Sudirman 12, Jakarta".to_string(),
    }
}

fn network_error() -> GatewayError {
    GatewayError::ConnectionFailed("network unreachable".to_string())
}

// =============================================================================
// Medicine Mock
// =============================================================================

pub struct MockMedicines {
    pub rows: Mutex<Vec<Medicine>>,
    /// Every (id, absolute stock) pair passed to `update_stock`.
    pub update_stock_calls: Mutex<Vec<(String, i64)>>,
    failing: AtomicBool,
    next_id: AtomicUsize,
}

impl MockMedicines {
    pub fn with_rows(rows: Vec<Medicine>) -> Arc<Self> {
        Arc::new(MockMedicines {
            rows: Mutex::new(rows),
            update_stock_calls: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
            next_id: AtomicUsize::new(1),
        })
    }

    pub fn fail_all(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> GatewayResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(network_error())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MedicineGateway for MockMedicines {
    async fn select_all(&self) -> GatewayResult<Vec<Medicine>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn select_category_refs(&self) -> GatewayResult<Vec<String>> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.category.clone())
            .collect())
    }

    async fn select_supplier_refs(&self) -> GatewayResult<Vec<String>> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.supplier.clone())
            .collect())
    }

    async fn insert(&self, draft: &MedicineDraft) -> GatewayResult<Medicine> {
        self.check()?;
        let id = format!("m-gen-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let row = Medicine {
            id,
            name: draft.name.clone(),
            category: draft.category.clone(),
            stock: draft.stock,
            price_idr: draft.price_idr,
            expiry_date: draft.expiry_date,
            supplier: draft.supplier.clone(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: &str, draft: &MedicineDraft) -> GatewayResult<()> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|m| m.id == id) {
            Some(row) => {
                draft.apply_to(row);
                Ok(())
            }
            None => Err(GatewayError::not_found("Medicine", id)),
        }
    }

    async fn update_stock(&self, id: &str, stock: i64) -> GatewayResult<()> {
        self.check()?;
        self.update_stock_calls
            .lock()
            .unwrap()
            .push((id.to_string(), stock));
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|m| m.id == id) {
            Some(row) => {
                row.stock = stock;
                Ok(())
            }
            None => Err(GatewayError::not_found("Medicine", id)),
        }
    }

    async fn delete(&self, id: &str) -> GatewayResult<()> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        if rows.len() == before {
            Err(GatewayError::not_found("Medicine", id))
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// Category Mock
// =============================================================================

pub struct MockCategories {
    pub rows: Mutex<Vec<Category>>,
    failing: AtomicBool,
    next_id: AtomicUsize,
}

impl MockCategories {
    pub fn with_rows(rows: Vec<Category>) -> Arc<Self> {
        Arc::new(MockCategories {
            rows: Mutex::new(rows),
            failing: AtomicBool::new(false),
            next_id: AtomicUsize::new(1),
        })
    }

    pub fn fail_all(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> GatewayResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(network_error())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CategoryGateway for MockCategories {
    async fn select_all(&self) -> GatewayResult<Vec<Category>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert(&self, draft: &CategoryDraft) -> GatewayResult<Category> {
        self.check()?;
        let id = format!("c-gen-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let row = Category {
            id,
            name: draft.name.clone(),
            color: draft.color.clone(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: &str, draft: &CategoryDraft) -> GatewayResult<()> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|c| c.id == id) {
            Some(row) => {
                row.name = draft.name.clone();
                row.color = draft.color.clone();
                Ok(())
            }
            None => Err(GatewayError::not_found("Category", id)),
        }
    }

    async fn delete(&self, id: &str) -> GatewayResult<()> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            Err(GatewayError::not_found("Category", id))
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// Supplier Mock
// =============================================================================

pub struct MockSuppliers {
    pub rows: Mutex<Vec<Supplier>>,
    failing: AtomicBool,
    next_id: AtomicUsize,
}

impl MockSuppliers {
    pub fn with_rows(rows: Vec<Supplier>) -> Arc<Self> {
        Arc::new(MockSuppliers {
            rows: Mutex::new(rows),
            failing: AtomicBool::new(false),
            next_id: AtomicUsize::new(1),
        })
    }

    pub fn fail_all(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> GatewayResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(network_error())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SupplierGateway for MockSuppliers {
    async fn select_all(&self) -> GatewayResult<Vec<Supplier>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert(&self, draft: &SupplierDraft) -> GatewayResult<Supplier> {
        self.check()?;
        let id = format!("s-gen-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let row = Supplier {
            id,
            name: draft.name.clone(),
            contact: draft.contact.clone(),
            email: draft.email.clone(),
            address: draft.address.clone(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: &str, draft: &SupplierDraft) -> GatewayResult<()> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|s| s.id == id) {
            Some(row) => {
                draft.apply_to(row);
                Ok(())
            }
            None => Err(GatewayError::not_found("Supplier", id)),
        }
    }

    async fn delete(&self, id: &str) -> GatewayResult<()> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        if rows.len() == before {
            Err(GatewayError::not_found("Supplier", id))
        } else {
            Ok(())
        }
    }
}
