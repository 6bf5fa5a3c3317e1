//! Catalog store unit tests

use crate::catalog::{queries, CatalogError, Database};
use crate::draft::{ModelInfoDraft, Pricing, PricingPlan};
use pretty_assertions::assert_eq;

fn sample_draft(name: &str) -> ModelInfoDraft {
    ModelInfoDraft {
        name: Some(name.to_string()),
        description: format!("{name} is a general purpose model."),
        category: Some("llm".to_string()),
        features: vec!["long context".to_string()],
        pros: vec!["fast".to_string()],
        cons: vec!["pricey".to_string()],
        use_cases: vec!["chat".to_string()],
        alternatives: vec!["other".to_string()],
        pricing: Pricing {
            free: true,
            plans: vec![PricingPlan {
                name: "Pro".to_string(),
                price: "$20/mo".to_string(),
                features: vec!["higher limits".to_string()],
            }],
        },
        source_date: Some("2026-08-23".to_string()),
    }
}

#[test]
fn upsert_then_read_round_trips_the_draft() {
    let db = Database::open_in_memory().expect("in-memory DB");
    let draft = sample_draft("Claude");

    let row = queries::upsert_draft(&db, "Claude", &draft).unwrap();
    let stored = queries::get_model_by_name(&db, "Claude").unwrap().unwrap();
    assert_eq!(stored.id, row.id);
    assert_eq!(stored.to_draft().unwrap(), draft);
}

#[test]
fn second_upsert_updates_in_place() {
    let db = Database::open_in_memory().expect("in-memory DB");
    let first = queries::upsert_draft(&db, "Claude", &sample_draft("Claude")).unwrap();

    let mut revised = sample_draft("Claude");
    revised.description = "Updated description.".to_string();
    let second = queries::upsert_draft(&db, "Claude", &revised).unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.created_at, second.created_at);
    assert_eq!(second.description, "Updated description.");
    assert_eq!(queries::list_models(&db).unwrap().len(), 1);
}

#[test]
fn list_by_category_filters() {
    let db = Database::open_in_memory().expect("in-memory DB");
    queries::upsert_draft(&db, "Claude", &sample_draft("Claude")).unwrap();

    let mut image = sample_draft("Midjourney");
    image.category = Some("image".to_string());
    queries::upsert_draft(&db, "Midjourney", &image).unwrap();

    let llms = queries::list_models_by_category(&db, "llm").unwrap();
    assert_eq!(llms.len(), 1);
    assert_eq!(llms[0].name, "Claude");
    assert!(queries::list_models_by_category(&db, "video")
        .unwrap()
        .is_empty());
}

#[test]
fn delete_and_missing_lookups() {
    let db = Database::open_in_memory().expect("in-memory DB");
    let row = queries::upsert_draft(&db, "Claude", &sample_draft("Claude")).unwrap();

    queries::delete_model(&db, &row.id).unwrap();
    assert!(queries::get_model(&db, &row.id).unwrap().is_none());
    assert!(matches!(
        queries::delete_model(&db, &row.id),
        Err(CatalogError::NotFound(_))
    ));
}

#[test]
fn update_missing_model_is_not_found() {
    let db = Database::open_in_memory().expect("in-memory DB");
    let row = queries::ModelRow::from_draft("Ghost", &sample_draft("Ghost")).unwrap();
    assert!(matches!(
        queries::update_model(&db, &row),
        Err(CatalogError::NotFound(_))
    ));
}

#[test]
fn opens_on_disk_database() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("catalog.db");
    {
        let db = Database::open(&path).expect("open on-disk DB");
        queries::upsert_draft(&db, "Claude", &sample_draft("Claude")).unwrap();
    }
    // Reopen: migrations are idempotent and data persists.
    let db = Database::open(&path).expect("reopen on-disk DB");
    assert_eq!(queries::list_models(&db).unwrap().len(), 1);
}
