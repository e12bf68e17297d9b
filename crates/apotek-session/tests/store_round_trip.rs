//! End-to-end: controllers wired to the real SQLite-backed gateway.
//!
//! The mock-based unit tests pin the reconciliation contract; these pin
//! the wiring — a draft saved through a controller comes back from the
//! store intact on the next load().

use chrono::NaiveDate;

use apotek_core::{CategoryDraft, MedicineDraft};
use apotek_db::{Database, DbConfig};
use apotek_session::{CategoriesState, MedicinesState};

async fn test_db() -> Database {
    Database::new(DbConfig::in_memory()).await.unwrap()
}

fn draft(name: &str, category: &str, stock: i64) -> MedicineDraft {
    MedicineDraft {
        id: None,
        name: name.to_string(),
        category: category.to_string(),
        stock,
        price_idr: 5_000,
        expiry_date: NaiveDate::from_ymd_opt(2027, 3, 1).unwrap(),
        supplier: "PT Pharma Indo".to_string(),
    }
}

#[tokio::test]
async fn save_then_load_round_trips_through_the_store() {
    let db = test_db().await;
    let mut state = MedicinesState::new(&db);

    state.load().await.unwrap();
    assert!(state.medicines().is_empty());

    let d = draft("Cetirizine 10mg", "Allergy", 18);
    state.save(d.clone()).await.unwrap();

    state.load().await.unwrap();
    assert_eq!(state.medicines().len(), 1);

    let row = &state.medicines()[0];
    assert!(!row.id.is_empty());
    assert_eq!(row.name, d.name);
    assert_eq!(row.category, d.category);
    assert_eq!(row.stock, d.stock);
    assert_eq!(row.price_idr, d.price_idr);
    assert_eq!(row.expiry_date, d.expiry_date);
    assert_eq!(row.supplier, d.supplier);
}

#[tokio::test]
async fn quick_add_persists_the_new_stock() {
    let db = test_db().await;
    let mut state = MedicinesState::new(&db);

    state.save(draft("Paracetamol 500mg", "Pain Relief", 5)).await.unwrap();
    let id = state.medicines()[0].id.clone();

    state.quick_add(&id, 5).await.unwrap();
    assert_eq!(state.medicines()[0].stock, 10);

    // a fresh load reads the persisted value back
    state.load().await.unwrap();
    assert_eq!(state.medicines()[0].stock, 10);
}

#[tokio::test]
async fn category_counts_follow_medicine_deletions_across_loads() {
    let db = test_db().await;
    let mut med_state = MedicinesState::new(&db);
    let mut cat_state = CategoriesState::new(&db);

    cat_state
        .save(CategoryDraft {
            id: None,
            name: "Pain Relief".to_string(),
            color: "#3B82F6".to_string(),
        })
        .await
        .unwrap();

    for name in ["Paracetamol 500mg", "Ibuprofen 400mg", "Aspirin 100mg"] {
        med_state.save(draft(name, "Pain Relief", 10)).await.unwrap();
    }

    cat_state.load().await.unwrap();
    assert_eq!(cat_state.categories()[0].medicine_count, 3);

    let victim = med_state.medicines()[0].id.clone();
    med_state.remove(&victim).await.unwrap();

    cat_state.load().await.unwrap();
    assert_eq!(cat_state.categories()[0].medicine_count, 2);
}
