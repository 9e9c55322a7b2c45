use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use axum::http::StatusCode;
use std::sync::Arc;
use crate::util::session::SessionTokens;

pub struct AdminAuthState {
    pub sessions: Arc<SessionTokens>,
}

pub async fn admin_auth(
    State(state): State<Arc<AdminAuthState>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    // Extract the Authorization header
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok());
    let Some(auth_header) = auth_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    // Expect a bearer session token issued at login
    let token = auth_header
        .strip_prefix("Bearer ")
        .or_else(|| auth_header.strip_prefix("bearer "))
        .map(str::trim);
    let Some(token) = token else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    if !state.sessions.validate(token).await {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(req).await)
}
