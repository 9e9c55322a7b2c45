use axum::{body::to_bytes, body::Body, http::{Request, StatusCode}, Router};
use allzone_backend::config::admin_conf::AdminConfig;
use allzone_backend::config::store_conf::StoreConfig;
use allzone_backend::middlewares::admin_middleware::AdminAuthState;
use allzone_backend::repository::contact_repo::{ContactRepository, JsonContactRepository};
use allzone_backend::repository::property_repo::{JsonPropertyRepository, PropertyRepository};
use allzone_backend::router::admin_router::admin_router;
use allzone_backend::service::admin_service::AdminServiceImpl;
use allzone_backend::util::session::SessionTokens;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn setup_app(dir: &TempDir) -> Router {
    let config = StoreConfig::with_data_dir(dir.path());
    let property_repo: Arc<dyn PropertyRepository> =
        Arc::new(JsonPropertyRepository::new(&config));
    let contact_repo: Arc<dyn ContactRepository> = Arc::new(JsonContactRepository::new(&config));
    let sessions = Arc::new(SessionTokens::new());
    let admin_config = AdminConfig {
        username: "admin".to_string(),
        password: "changeme123".to_string(),
    };
    let admin_service = Arc::new(AdminServiceImpl::new(
        admin_config,
        sessions.clone(),
        property_repo,
        contact_repo,
    ));
    let admin_auth_state = Arc::new(AdminAuthState { sessions });
    Router::new().merge(admin_router(admin_service, admin_auth_state))
}

async fn login(app: &Router, username: &str, password: &str) -> (StatusCode, serde_json::Value) {
    let body = json!({ "username": username, "password": password });
    let req = Request::builder()
        .method("POST")
        .uri("/api/admin/login")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_login_with_valid_credentials_issues_token() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let (status, body) = login(&app, "admin", "changeme123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let (status, body) = login(&app, "admin", "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("Unauthorized"));
}

#[tokio::test]
async fn test_stats_requires_session_token() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let req = Request::builder()
        .method("GET")
        .uri("/api/admin/stats")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_stats_reports_store_counts() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let (_, body) = login(&app, "admin", "changeme123").await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = Request::builder()
        .method("GET")
        .uri("/api/admin/stats")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let stats: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    // The property store seeds three defaults; the contact inbox starts empty
    assert_eq!(stats["totalProperties"], json!(3));
    assert_eq!(stats["totalContacts"], json!(0));
    assert_eq!(stats["unreadContacts"], json!(0));
}

#[tokio::test]
async fn test_logout_revokes_the_session() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let (_, body) = login(&app, "admin", "changeme123").await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = Request::builder()
        .method("POST")
        .uri("/api/admin/logout")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // The revoked token no longer opens admin routes
    let req = Request::builder()
        .method("GET")
        .uri("/api/admin/stats")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
