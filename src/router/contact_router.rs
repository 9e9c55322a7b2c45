use axum::{middleware, routing::{delete, get, post, put}, Router};
use crate::handler::contact_handler::{
    delete_contact_handler,
    list_contacts_handler,
    submit_lead_handler,
    update_contact_status_handler,
};
use std::sync::Arc;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::service::contact_service::ContactServiceImpl;

pub fn contact_router(
    service: Arc<ContactServiceImpl>,
    admin_auth_state: Arc<AdminAuthState>,
) -> Router {
    // Public lead-submission boundary
    let public = Router::new().route("/api/leads", post(submit_lead_handler));

    // Admin-protected inbox routes
    let admin = Router::new()
        .route("/api/contacts", get(list_contacts_handler))
        .route("/api/contacts/{id}/status", put(update_contact_status_handler))
        .route("/api/contacts/{id}", delete(delete_contact_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
