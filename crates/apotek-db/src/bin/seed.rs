//! # Seed Data Generator
//!
//! Populates the store with sample pharmacy data for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p apotek-db --bin seed
//!
//! # Specify database path
//! cargo run -p apotek-db --bin seed -- --db ./data/apotek.db
//! ```
//!
//! ## Generated Data
//! - Categories with display colors (Pain Relief, Antibiotic, ...)
//! - Suppliers with contact details
//! - Medicines spread across the stock and expiry classifications:
//!   out-of-stock, low-stock, in-stock, expired, expiring, fresh

use chrono::{Duration, Utc};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

use apotek_core::{CategoryDraft, MedicineDraft, SupplierDraft};
use apotek_db::{
    CategoryGateway, Database, DbConfig, MedicineGateway, SupplierGateway,
};

type Error = Box<dyn std::error::Error + Send + Sync>;

/// Category name and display color.
const CATEGORIES: &[(&str, &str)] = &[
    ("Pain Relief", "#3B82F6"),
    ("Antibiotic", "#10B981"),
    ("Supplement", "#F59E0B"),
    ("Vitamin", "#8B5CF6"),
    ("Allergy", "#EC4899"),
];

/// Supplier name, contact, email, address.
const SUPPLIERS: &[(&str, &str, &str, &str)] = &[
    (
        "PT Pharma Indo",
        "+62 812-3456-7890",
        "sales@pharmaindo.co.id",
        "Jl. Sudirman 12, Jakarta",
    ),
    (
        "CV Medika Jaya",
        "+62 813-9876-5432",
        "order@medikajaya.co.id",
        "Jl. Diponegoro 88, Bandung",
    ),
    (
        "PT Sehat Sentosa",
        "+62 811-2233-4455",
        "contact@sehatsentosa.co.id",
        "Jl. Pemuda 5, Surabaya",
    ),
];

/// Medicine name, category, stock, price (whole rupiah), days until
/// expiry (negative = already expired), supplier.
const MEDICINES: &[(&str, &str, i64, i64, i64, &str)] = &[
    ("Paracetamol 500mg", "Pain Relief", 5, 5_000, 320, "PT Pharma Indo"),
    ("Ibuprofen 400mg", "Pain Relief", 40, 7_500, 27, "PT Pharma Indo"),
    ("Amoxicillin 250mg", "Antibiotic", 3, 12_000, 150, "CV Medika Jaya"),
    ("Azithromycin 500mg", "Antibiotic", 25, 28_000, 400, "CV Medika Jaya"),
    ("Vitamin C 1000mg", "Vitamin", 8, 8_000, 210, "PT Sehat Sentosa"),
    ("Vitamin D3 1000IU", "Vitamin", 60, 15_000, 500, "PT Sehat Sentosa"),
    ("Cetirizine 10mg", "Allergy", 18, 6_500, 32, "PT Pharma Indo"),
    ("Loratadine 10mg", "Allergy", 0, 7_000, 85, "CV Medika Jaya"),
    ("Fish Oil 1000mg", "Supplement", 33, 22_000, -14, "PT Sehat Sentosa"),
    ("Zinc 20mg", "Supplement", 12, 9_500, 270, "PT Sehat Sentosa"),
];

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db_path = parse_db_path().unwrap_or_else(|| "./apotek.db".to_string());
    info!(path = %db_path, "Seeding store");

    let db = Database::new(DbConfig::new(&db_path)).await?;

    seed(&db).await?;

    db.close().await;
    Ok(())
}

/// Parses `--db <path>` from the command line.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}

async fn seed(db: &Database) -> Result<(), Error> {
    let today = Utc::now().date_naive();

    let categories = db.categories();
    for (name, color) in CATEGORIES {
        categories
            .insert(&CategoryDraft {
                id: None,
                name: name.to_string(),
                color: color.to_string(),
            })
            .await?;
    }
    info!(count = CATEGORIES.len(), "Seeded categories");

    let suppliers = db.suppliers();
    for (name, contact, email, address) in SUPPLIERS {
        suppliers
            .insert(&SupplierDraft {
                id: None,
                name: name.to_string(),
                contact: contact.to_string(),
                email: email.to_string(),
                address: address.to_string(),
            })
            .await?;
    }
    info!(count = SUPPLIERS.len(), "Seeded suppliers");

    let medicines = db.medicines();
    for (name, category, stock, price_idr, expiry_days, supplier) in MEDICINES {
        medicines
            .insert(&MedicineDraft {
                id: None,
                name: name.to_string(),
                category: category.to_string(),
                stock: *stock,
                price_idr: *price_idr,
                expiry_date: today + Duration::days(*expiry_days),
                supplier: supplier.to_string(),
            })
            .await?;
    }
    info!(count = MEDICINES.len(), "Seeded medicines");

    Ok(())
}
