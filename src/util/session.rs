use std::collections::HashSet;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory registry of opaque admin session tokens. Tokens are random
/// UUIDs with no embedded claims and do not survive a restart.
#[derive(Default)]
pub struct SessionTokens {
    tokens: RwLock<HashSet<String>>,
}

impl SessionTokens {
    pub fn new() -> Self {
        SessionTokens {
            tokens: RwLock::new(HashSet::new()),
        }
    }

    /// Issues a fresh token and registers it.
    pub async fn issue(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.write().await.insert(token.clone());
        token
    }

    pub async fn validate(&self, token: &str) -> bool {
        self.tokens.read().await.contains(token)
    }

    /// Revokes a token. Returns false if it was not registered.
    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token)
    }
}
