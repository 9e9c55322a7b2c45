use axum::{middleware, routing::{delete, get, post, put}, Router};
use crate::handler::property_handler::{
    create_property_handler,
    delete_property_handler,
    featured_properties_handler,
    get_property_handler,
    list_properties_handler,
    update_property_handler,
};
use std::sync::Arc;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::service::property_service::PropertyServiceImpl;

pub fn property_router(
    service: Arc<PropertyServiceImpl>,
    admin_auth_state: Arc<AdminAuthState>,
) -> Router {
    // Public routes consumed by the listing and detail pages
    let public = Router::new()
        .route("/api/properties", get(list_properties_handler))
        .route("/api/properties/featured", get(featured_properties_handler))
        .route("/api/properties/{id}", get(get_property_handler));

    // Admin-protected CRUD routes
    let admin = Router::new()
        .route("/api/properties", post(create_property_handler))
        .route("/api/properties/{id}", put(update_property_handler))
        .route("/api/properties/{id}", delete(delete_property_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
