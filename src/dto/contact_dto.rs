use crate::model::contact::{ContactDraft, ContactStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload accepted by the public lead boundary. All three site forms
/// (main contact form, popup, property-detail quick form) post this shape.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitLeadRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub interest: String,

    #[validate(length(min = 1, max = 2000))]
    pub message: String,

    pub source: Option<String>,
}

impl From<SubmitLeadRequest> for ContactDraft {
    fn from(req: SubmitLeadRequest) -> Self {
        ContactDraft {
            name: req.name,
            email: req.email,
            phone: req.phone,
            interest: req.interest,
            message: req.message,
            source: req.source,
        }
    }
}

/// Outcome of a lead submission, mirrored to the site forms which key off
/// the `success` flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadSubmissionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateContactStatusRequest {
    pub status: ContactStatus,
}

/// Inbox view filter. Narrows the rendered subset only, never the stored
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactFilter {
    #[default]
    All,
    Read,
    Unread,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactListQuery {
    #[serde(default)]
    pub status: ContactFilter,
}
