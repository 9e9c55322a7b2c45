use allzone_backend::config::store_conf::StoreConfig;
use allzone_backend::dto::property_dto::{CreatePropertyRequest, UpdatePropertyRequest};
use allzone_backend::model::property::{PropertyPatch, PropertyStatus};
use allzone_backend::repository::property_repo::JsonPropertyRepository;
use allzone_backend::service::property_service::{PropertyService, PropertyServiceImpl};
use allzone_backend::util::error::ServiceError;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

fn setup_property_service() -> (TempDir, PropertyServiceImpl) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = StoreConfig::with_data_dir(dir.path());
    let repo = Arc::new(JsonPropertyRepository::new(&config));
    (dir, PropertyServiceImpl::new(repo))
}

#[tokio::test]
async fn test_create_from_minimal_request_applies_defaults() {
    let (_dir, service) = setup_property_service();

    // The dashboard form only requires name, price and location
    let request: CreatePropertyRequest = serde_json::from_value(json!({
        "name": "Test Home",
        "price": "$500,000",
        "location": "1 Main St",
        "status": "for-sale"
    }))
    .expect("Failed to deserialize create request");

    let created = service
        .create_property(request.into())
        .await
        .expect("Failed to create property");
    assert!(created.id.starts_with("prop_"));
    assert_eq!(created.status, PropertyStatus::ForSale);
    assert_eq!(created.bedrooms, 0);
    assert_eq!(created.bathrooms, 0);
    assert_eq!(created.sqft, 0);
    assert!(!created.featured);
    assert!(created.images.is_empty());
}

#[tokio::test]
async fn test_update_request_merges_only_supplied_fields() {
    let (_dir, service) = setup_property_service();

    let existing = service
        .get_property("prop_2")
        .await
        .expect("Seeded listing missing");

    let request: UpdatePropertyRequest = serde_json::from_value(json!({
        "status": "sold",
        "featured": false
    }))
    .expect("Failed to deserialize update request");

    let updated = service
        .update_property("prop_2", request.into())
        .await
        .expect("Failed to update property");
    assert_eq!(updated.status, PropertyStatus::Sold);
    assert!(!updated.featured);
    assert_eq!(updated.name, existing.name);
    assert_eq!(updated.price, existing.price);
    assert_eq!(updated.date_created, existing.date_created);
    assert!(updated.date_updated >= existing.date_updated);
}

#[tokio::test]
async fn test_featured_selection_backfills_with_regular_listings() {
    let (_dir, service) = setup_property_service();

    // Un-feature the three seeded listings
    for id in ["prop_1", "prop_2", "prop_3"] {
        let patch = PropertyPatch {
            featured: Some(false),
            ..PropertyPatch::default()
        };
        service
            .update_property(id, patch)
            .await
            .expect("Failed to un-feature listing");
    }

    // One genuinely featured listing
    let request: CreatePropertyRequest = serde_json::from_value(json!({
        "name": "Hilltop Retreat",
        "price": "$980,000",
        "location": "12 Summit Way",
        "featured": true
    }))
    .expect("Failed to deserialize create request");
    service
        .create_property(request.into())
        .await
        .expect("Failed to create property");

    // Featured first, then regular listings in store order, capped at 3
    let featured = service
        .featured_properties(3)
        .await
        .expect("Failed to select featured properties");
    assert_eq!(featured.len(), 3);
    assert_eq!(featured[0].name, "Hilltop Retreat");
    assert_eq!(featured[1].id, "prop_1");
    assert_eq!(featured[2].id, "prop_2");
}

#[tokio::test]
async fn test_get_missing_property_is_not_found() {
    let (_dir, service) = setup_property_service();

    let res = service.get_property("prop_does_not_exist").await;
    assert!(matches!(res, Err(ServiceError::NotFound(_))));
}
