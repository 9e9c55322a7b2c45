use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::dto::ApiMessage;
use crate::service::admin_service::{AdminService, AdminServiceImpl};
use crate::util::error::{HandlerError, HandlerErrorKind};

use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

// Login
pub async fn login_handler(
    State(service): State<Arc<AdminServiceImpl>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::BadRequest,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let res = service
        .login(&payload.username, &payload.password)
        .await
        .map_err(HandlerError::from)?;
    Ok(Json(res))
}

// Logout (admin only): revokes the presented session token
pub async fn logout_handler(
    State(service): State<Arc<AdminServiceImpl>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HandlerError> {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer ").or_else(|| v.strip_prefix("bearer ")))
        .map(str::trim);
    let Some(token) = token else {
        return Err(HandlerError {
            error: HandlerErrorKind::Unauthorized,
            message: "Missing session token".to_string(),
            details: None,
        });
    };
    service.logout(token).await.map_err(HandlerError::from)?;
    Ok(Json(ApiMessage::ok("Logged out")))
}

// Dashboard stats (admin only)
pub async fn stats_handler(
    State(service): State<Arc<AdminServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let stats = service.stats().await.map_err(HandlerError::from)?;
    Ok(Json(stats))
}
