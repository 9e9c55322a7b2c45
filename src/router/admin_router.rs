use axum::{middleware, routing::{get, post}, Router};
use crate::handler::admin_handler::{login_handler, logout_handler, stats_handler};
use std::sync::Arc;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::service::admin_service::AdminServiceImpl;

pub fn admin_router(
    service: Arc<AdminServiceImpl>,
    admin_auth_state: Arc<AdminAuthState>,
) -> Router {
    // Public login route
    let public = Router::new().route("/api/admin/login", post(login_handler));

    // Session-protected routes
    let admin = Router::new()
        .route("/api/admin/logout", post(logout_handler))
        .route("/api/admin/stats", get(stats_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
