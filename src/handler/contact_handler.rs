use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::dto::contact_dto::{
    ContactListQuery, LeadSubmissionResponse, SubmitLeadRequest, UpdateContactStatusRequest,
};
use crate::dto::ApiMessage;
use crate::model::contact::ContactStatus;
use crate::service::contact_service::{ContactService, ContactServiceImpl};
use crate::util::error::{HandlerError, ServiceError};

use validator::Validate;

// Handler: Submit Lead (public)
//
// The site forms key off the `success` flag in the body, so failures are
// rendered in the same shape instead of the admin error body.
pub async fn submit_lead_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Json(payload): Json<SubmitLeadRequest>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(LeadSubmissionResponse {
                success: false,
                message: format!("Validation error: {}", e),
                id: None,
            }),
        );
    }

    match service.submit_lead(payload.into()).await {
        Ok(contact) => (
            StatusCode::CREATED,
            Json(LeadSubmissionResponse {
                success: true,
                message: "Message sent successfully! We will get back to you soon.".to_string(),
                id: Some(contact.id),
            }),
        ),
        Err(e) => {
            let status = match e {
                ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(LeadSubmissionResponse {
                    success: false,
                    message: e.to_string(),
                    id: None,
                }),
            )
        }
    }
}

// Handler: List Contacts (admin only), with optional read/unread filter
pub async fn list_contacts_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Query(query): Query<ContactListQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let contacts = service
        .list_contacts(query.status)
        .await
        .map_err(HandlerError::from)?;
    Ok(Json(contacts))
}

// Handler: Update Contact Status (admin only)
pub async fn update_contact_status_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateContactStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let updated = match payload.status {
        ContactStatus::Read => service.mark_read(&id).await,
        ContactStatus::Unread => service.mark_unread(&id).await,
    }
    .map_err(HandlerError::from)?;
    Ok(Json(updated))
}

// Handler: Delete Contact (admin only)
pub async fn delete_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    service
        .delete_contact(&id)
        .await
        .map_err(HandlerError::from)?;
    Ok(Json(ApiMessage::ok("Contact deleted successfully")))
}
