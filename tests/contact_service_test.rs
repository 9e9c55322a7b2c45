use allzone_backend::config::store_conf::StoreConfig;
use allzone_backend::dto::contact_dto::{ContactFilter, SubmitLeadRequest};
use allzone_backend::model::contact::ContactStatus;
use allzone_backend::repository::contact_repo::JsonContactRepository;
use allzone_backend::service::contact_service::{ContactService, ContactServiceImpl};
use allzone_backend::util::error::ServiceError;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

fn setup_contact_service() -> (TempDir, ContactServiceImpl) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = StoreConfig::with_data_dir(dir.path());
    let repo = Arc::new(JsonContactRepository::new(&config));
    (dir, ContactServiceImpl::new(repo))
}

fn lead_request(name: &str, source: &str) -> SubmitLeadRequest {
    serde_json::from_value(json!({
        "name": name,
        "email": "visitor@example.com",
        "phone": "+1-555-0199",
        "interest": "buy",
        "message": "I'm interested in the Modern Family Home on Oak Street.",
        "source": source
    }))
    .expect("Failed to deserialize lead request")
}

#[tokio::test]
async fn test_submitted_lead_is_recorded_unread() {
    let (_dir, service) = setup_contact_service();

    let lead = service
        .submit_lead(lead_request("Sarah Johnson", "property_detail_form").into())
        .await
        .expect("Failed to submit lead");
    assert!(lead.id.starts_with("contact_"));
    assert_eq!(lead.status, ContactStatus::Unread);
    assert_eq!(lead.source.as_deref(), Some("property_detail_form"));

    let all = service
        .list_contacts(ContactFilter::All)
        .await
        .expect("Failed to list contacts");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, lead.id);
}

#[tokio::test]
async fn test_marking_read_moves_lead_out_of_unread_view() {
    let (_dir, service) = setup_contact_service();

    let lead = service
        .submit_lead(lead_request("Sarah Johnson", "main_contact_form").into())
        .await
        .expect("Failed to submit lead");
    let _other = service
        .submit_lead(lead_request("Michael Chen", "popup_form").into())
        .await
        .expect("Failed to submit lead");

    let marked = service.mark_read(&lead.id).await.expect("Failed to mark read");
    assert_eq!(marked.status, ContactStatus::Read);

    // The full list shows the new status
    let all = service
        .list_contacts(ContactFilter::All)
        .await
        .expect("Failed to list contacts");
    let stored = all.iter().find(|c| c.id == lead.id).expect("Lead missing");
    assert_eq!(stored.status, ContactStatus::Read);

    // The unread view no longer contains it, and nothing was deleted
    let unread = service
        .list_contacts(ContactFilter::Unread)
        .await
        .expect("Failed to list unread contacts");
    assert!(unread.iter().all(|c| c.id != lead.id));
    assert_eq!(all.len(), 2);

    let read = service
        .list_contacts(ContactFilter::Read)
        .await
        .expect("Failed to list read contacts");
    assert_eq!(read.len(), 1);
    assert_eq!(read[0].id, lead.id);

    assert_eq!(service.count_unread().await.expect("count_unread"), 1);
    assert_eq!(service.count_contacts().await.expect("count"), 2);
}

#[tokio::test]
async fn test_deleting_missing_contact_is_not_found() {
    let (_dir, service) = setup_contact_service();

    let res = service.delete_contact("contact_does_not_exist").await;
    assert!(matches!(res, Err(ServiceError::NotFound(_))));
}
