pub mod contact_dto;
pub mod property_dto;

use serde::{Deserialize, Serialize};

/// Generic outcome body for operations with nothing else to return
/// (deletes, logout). The dashboard surfaces `message` in a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn ok<T: Into<String>>(message: T) -> Self {
        ApiMessage {
            success: true,
            message: message.into(),
        }
    }
}
