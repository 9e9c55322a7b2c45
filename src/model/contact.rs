use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A visitor-submitted inquiry as persisted in `contacts.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub interest: String,
    pub message: String,
    /// Which form produced the lead: `main_contact_form`, `popup_form`
    /// or `property_detail_form`.
    #[serde(default)]
    pub source: Option<String>,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Read,
    #[default]
    Unread,
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContactStatus::Read => "read",
            ContactStatus::Unread => "unread",
        };
        write!(f, "{}", s)
    }
}

/// Caller-supplied fields for a new lead. The store assigns the id, the
/// creation timestamp and the initial `unread` status.
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub interest: String,
    pub message: String,
    pub source: Option<String>,
}
