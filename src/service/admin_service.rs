use crate::config::admin_conf::AdminConfig;
use crate::repository::contact_repo::ContactRepository;
use crate::repository::property_repo::PropertyRepository;
use crate::util::error::ServiceError;
use crate::util::session::SessionTokens;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Counts for the dashboard stat cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_properties: u64,
    pub total_contacts: u64,
    pub unread_contacts: u64,
}

#[async_trait]
pub trait AdminService: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ServiceError>;
    async fn logout(&self, token: &str) -> Result<(), ServiceError>;
    async fn stats(&self) -> Result<DashboardStats, ServiceError>;
}

pub struct AdminServiceImpl {
    config: AdminConfig,
    pub sessions: Arc<SessionTokens>,
    pub property_repo: Arc<dyn PropertyRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
}

impl AdminServiceImpl {
    pub fn new(
        config: AdminConfig,
        sessions: Arc<SessionTokens>,
        property_repo: Arc<dyn PropertyRepository>,
        contact_repo: Arc<dyn ContactRepository>,
    ) -> Self {
        AdminServiceImpl {
            config,
            sessions,
            property_repo,
            contact_repo,
        }
    }
}

#[async_trait]
impl AdminService for AdminServiceImpl {
    /// Plaintext credential comparison, matching the original dashboard.
    /// A successful login issues an opaque session token.
    #[instrument(skip(self, password), fields(username = %username))]
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ServiceError> {
        if username == self.config.username && password == self.config.password {
            let token = self.sessions.issue().await;
            info!("Admin login successful");
            Ok(LoginResponse {
                success: true,
                message: "Login successful".to_string(),
                token: Some(token),
            })
        } else {
            warn!("Admin login rejected");
            Err(ServiceError::Unauthorized(
                "Invalid credentials. Please try again.".to_string(),
            ))
        }
    }

    /// Revoking an unknown token is a no-op success: the session is gone
    /// either way.
    #[instrument(skip(self, token))]
    async fn logout(&self, token: &str) -> Result<(), ServiceError> {
        self.sessions.revoke(token).await;
        info!("Admin session revoked");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> Result<DashboardStats, ServiceError> {
        let total_properties = self.property_repo.count().await.map_err(ServiceError::from)?;
        let total_contacts = self.contact_repo.count().await.map_err(ServiceError::from)?;
        let unread_contacts = self
            .contact_repo
            .count_unread()
            .await
            .map_err(ServiceError::from)?;
        Ok(DashboardStats {
            total_properties,
            total_contacts,
            unread_contacts,
        })
    }
}
