use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::admin_conf::AdminConfig;
use crate::config::app_conf::AppConfig;
use crate::config::store_conf::StoreConfig;
use crate::middlewares::admin_middleware::AdminAuthState;
use crate::repository::contact_repo::{ContactRepository, JsonContactRepository};
use crate::repository::property_repo::{JsonPropertyRepository, PropertyRepository};
use crate::service::admin_service::AdminServiceImpl;
use crate::service::contact_service::ContactServiceImpl;
use crate::service::property_service::PropertyServiceImpl;
use crate::util::session::SessionTokens;

pub struct App {
    config: AppConfig,
    router: Router,
    pub property_service: Arc<PropertyServiceImpl>,
    pub contact_service: Arc<ContactServiceImpl>,
    pub admin_service: Arc<AdminServiceImpl>,
}

impl App {
    pub fn new() -> Self {
        let config = AppConfig::from_env();
        let store_config = StoreConfig::from_env();
        let admin_config = AdminConfig::from_env().expect("Admin config error");

        let property_repo: Arc<dyn PropertyRepository> =
            Arc::new(JsonPropertyRepository::new(&store_config));
        let contact_repo: Arc<dyn ContactRepository> =
            Arc::new(JsonContactRepository::new(&store_config));

        let sessions = Arc::new(SessionTokens::new());
        let property_service = Arc::new(PropertyServiceImpl::new(property_repo.clone()));
        let contact_service = Arc::new(ContactServiceImpl::new(contact_repo.clone()));
        let admin_service = Arc::new(AdminServiceImpl::new(
            admin_config,
            sessions.clone(),
            property_repo,
            contact_repo,
        ));

        let admin_auth_state = Arc::new(AdminAuthState { sessions });

        let mut app = App {
            config,
            router: Router::new(),
            property_service,
            contact_service,
            admin_service,
        };
        app.router = app.create_router(admin_auth_state);
        app
    }

    fn create_router(&self, admin_auth_state: Arc<AdminAuthState>) -> Router {
        use crate::router::admin_router::admin_router;
        use crate::router::contact_router::contact_router;
        use crate::router::property_router::property_router;
        Router::new()
            .merge(property_router(
                self.property_service.clone(),
                admin_auth_state.clone(),
            ))
            .merge(contact_router(
                self.contact_service.clone(),
                admin_auth_state.clone(),
            ))
            .merge(admin_router(self.admin_service.clone(), admin_auth_state))
            .route("/health", get(|| async { "OK" }))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(
            self.config.host.parse().expect("Invalid host"),
            self.config.port,
        );
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }
}
