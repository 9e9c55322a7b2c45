use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::dto::property_dto::{CreatePropertyRequest, UpdatePropertyRequest};
use crate::dto::ApiMessage;
use crate::service::property_service::{PropertyService, PropertyServiceImpl, FEATURED_LIMIT};
use crate::util::error::{HandlerError, HandlerErrorKind};

use validator::Validate;

// Handler: List Properties (public, listing pages)
pub async fn list_properties_handler(
    State(service): State<Arc<PropertyServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let properties = service
        .list_properties()
        .await
        .map_err(HandlerError::from)?;
    Ok(Json(properties))
}

// Handler: Featured Properties (public, landing page)
pub async fn featured_properties_handler(
    State(service): State<Arc<PropertyServiceImpl>>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> Result<impl IntoResponse, HandlerError> {
    let limit = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(FEATURED_LIMIT);
    let properties = service
        .featured_properties(limit)
        .await
        .map_err(HandlerError::from)?;
    Ok(Json(properties))
}

// Handler: Get Property (public, detail pages)
pub async fn get_property_handler(
    State(service): State<Arc<PropertyServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let property = service.get_property(&id).await.map_err(HandlerError::from)?;
    Ok(Json(property))
}

// Handler: Create Property (admin only)
pub async fn create_property_handler(
    State(service): State<Arc<PropertyServiceImpl>>,
    Json(payload): Json<CreatePropertyRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let created = service
        .create_property(payload.into())
        .await
        .map_err(HandlerError::from)?;
    Ok((StatusCode::CREATED, Json(created)))
}

// Handler: Update Property (admin only)
pub async fn update_property_handler(
    State(service): State<Arc<PropertyServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdatePropertyRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let updated = service
        .update_property(&id, payload.into())
        .await
        .map_err(HandlerError::from)?;
    Ok(Json(updated))
}

// Handler: Delete Property (admin only)
pub async fn delete_property_handler(
    State(service): State<Arc<PropertyServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    service
        .delete_property(&id)
        .await
        .map_err(HandlerError::from)?;
    Ok(Json(ApiMessage::ok("Property deleted successfully")))
}
