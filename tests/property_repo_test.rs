use allzone_backend::config::store_conf::StoreConfig;
use allzone_backend::model::property::{PropertyDraft, PropertyPatch, PropertyStatus};
use allzone_backend::repository::property_repo::{JsonPropertyRepository, PropertyRepository};
use allzone_backend::repository::repository_error::RepositoryError;
use std::collections::HashSet;
use tempfile::TempDir;

fn setup_property_repository() -> (TempDir, JsonPropertyRepository) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = StoreConfig::with_data_dir(dir.path());
    let repo = JsonPropertyRepository::new(&config);
    (dir, repo)
}

fn sample_draft(name: &str) -> PropertyDraft {
    PropertyDraft {
        name: name.to_string(),
        price: "$500,000".to_string(),
        location: "1 Main St".to_string(),
        bedrooms: 3,
        bathrooms: 2,
        sqft: 1800,
        status: PropertyStatus::ForSale,
        description: Some("Cozy starter home".to_string()),
        images: vec![],
        featured: false,
    }
}

#[tokio::test]
async fn test_missing_file_seeds_default_listings_once() {
    let (_dir, repo) = setup_property_repository();

    let first = repo.list().await.expect("Failed to list properties");
    assert_eq!(first.len(), 3);
    assert_eq!(first[0].id, "prop_1");
    assert_eq!(first[0].name, "Modern Family Home");
    assert!(first.iter().all(|p| p.featured));
    assert!(first.iter().all(|p| p.status == PropertyStatus::ForSale));

    // A second list must return the same set without re-seeding
    let second = repo.list().await.expect("Failed to list properties again");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_property_repository_workflow() {
    let (_dir, repo) = setup_property_repository();

    // Insert a property
    let created = repo
        .create(sample_draft("Test Home"))
        .await
        .expect("Failed to create property");
    assert!(created.id.starts_with("prop_"));
    assert_eq!(created.name, "Test Home");
    assert_eq!(created.date_created, created.date_updated);

    // Round-trip by id
    let fetched = repo
        .get_by_id(&created.id)
        .await
        .expect("Failed to get property by id");
    assert_eq!(fetched, created);

    // Merge-update: only price and dateUpdated may change
    let patch = PropertyPatch {
        price: Some("$900,000".to_string()),
        ..PropertyPatch::default()
    };
    let updated = repo
        .update(&created.id, patch)
        .await
        .expect("Failed to update property");
    assert_eq!(updated.price, "$900,000");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.location, created.location);
    assert_eq!(updated.bedrooms, created.bedrooms);
    assert_eq!(updated.status, created.status);
    assert_eq!(updated.date_created, created.date_created);
    assert!(updated.date_updated >= updated.date_created);

    // Delete removes the record for good
    repo.delete(&created.id).await.expect("Failed to delete property");
    let res = repo.get_by_id(&created.id).await;
    assert!(matches!(res, Err(RepositoryError::NotFound(_))));
    let listed = repo.list().await.expect("Failed to list properties");
    assert!(listed.iter().all(|p| p.id != created.id));
}

#[tokio::test]
async fn test_created_ids_are_pairwise_distinct() {
    let (_dir, repo) = setup_property_repository();

    let mut ids = HashSet::new();
    for i in 0..10 {
        let created = repo
            .create(sample_draft(&format!("Home {}", i)))
            .await
            .expect("Failed to create property");
        ids.insert(created.id);
    }
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_delete_missing_property_leaves_store_unchanged() {
    let (_dir, repo) = setup_property_repository();

    let before = repo.list().await.expect("Failed to list properties");
    let res = repo.delete("prop_does_not_exist").await;
    assert!(matches!(res, Err(RepositoryError::NotFound(_))));

    let after = repo.list().await.expect("Failed to list properties");
    assert_eq!(before.len(), after.len());
}

#[tokio::test]
async fn test_update_missing_property_is_not_found() {
    let (_dir, repo) = setup_property_repository();

    let patch = PropertyPatch {
        name: Some("Ghost".to_string()),
        ..PropertyPatch::default()
    };
    let res = repo.update("prop_does_not_exist", patch).await;
    assert!(matches!(res, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
async fn test_backing_file_is_rewritten_on_mutation() {
    let (dir, repo) = setup_property_repository();

    let created = repo
        .create(sample_draft("Persisted Home"))
        .await
        .expect("Failed to create property");

    // A fresh repository over the same directory must observe the write
    let config = StoreConfig::with_data_dir(dir.path());
    let reopened = JsonPropertyRepository::new(&config);
    let fetched = reopened
        .get_by_id(&created.id)
        .await
        .expect("Created property not visible through a fresh store");
    assert_eq!(fetched.name, "Persisted Home");
}
