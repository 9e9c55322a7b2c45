use crate::dto::contact_dto::ContactFilter;
use crate::model::contact::{Contact, ContactDraft, ContactStatus};
use crate::repository::contact_repo::ContactRepository;
use crate::util::error::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};

#[async_trait]
pub trait ContactService: Send + Sync {
    async fn submit_lead(&self, draft: ContactDraft) -> Result<Contact, ServiceError>;
    async fn list_contacts(&self, filter: ContactFilter) -> Result<Vec<Contact>, ServiceError>;
    async fn mark_read(&self, id: &str) -> Result<Contact, ServiceError>;
    async fn mark_unread(&self, id: &str) -> Result<Contact, ServiceError>;
    async fn delete_contact(&self, id: &str) -> Result<(), ServiceError>;
    async fn count_contacts(&self) -> Result<u64, ServiceError>;
    async fn count_unread(&self) -> Result<u64, ServiceError>;
}

pub struct ContactServiceImpl {
    pub repo: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        ContactServiceImpl { repo }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    #[instrument(skip(self, draft), fields(email = %draft.email))]
    async fn submit_lead(&self, draft: ContactDraft) -> Result<Contact, ServiceError> {
        info!("Recording lead submission");
        let res = self.repo.create(draft).await;
        match &res {
            Ok(contact) => info!("Lead recorded with id {}", contact.id),
            Err(e) => error!("Failed to record lead: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    /// The filter narrows the returned view only; stored records are
    /// untouched.
    #[instrument(skip(self), fields(filter = ?filter))]
    async fn list_contacts(&self, filter: ContactFilter) -> Result<Vec<Contact>, ServiceError> {
        info!("Listing contacts");
        let contacts = self.repo.list().await.map_err(ServiceError::from)?;
        let filtered: Vec<Contact> = match filter {
            ContactFilter::All => contacts,
            ContactFilter::Read => contacts
                .into_iter()
                .filter(|c| c.status == ContactStatus::Read)
                .collect(),
            ContactFilter::Unread => contacts
                .into_iter()
                .filter(|c| c.status == ContactStatus::Unread)
                .collect(),
        };
        info!("Fetched {} contacts", filtered.len());
        Ok(filtered)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn mark_read(&self, id: &str) -> Result<Contact, ServiceError> {
        info!("Marking contact as read");
        let res = self.repo.set_status(id, ContactStatus::Read).await;
        match &res {
            Ok(_) => info!("Contact marked as read"),
            Err(e) => error!("Failed to mark contact as read: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn mark_unread(&self, id: &str) -> Result<Contact, ServiceError> {
        info!("Marking contact as unread");
        let res = self.repo.set_status(id, ContactStatus::Unread).await;
        match &res {
            Ok(_) => info!("Contact marked as unread"),
            Err(e) => error!("Failed to mark contact as unread: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_contact(&self, id: &str) -> Result<(), ServiceError> {
        info!("Deleting contact");
        let res = self.repo.delete(id).await;
        match &res {
            Ok(_) => info!("Contact deleted successfully"),
            Err(e) => error!("Failed to delete contact: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn count_contacts(&self) -> Result<u64, ServiceError> {
        self.repo.count().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn count_unread(&self) -> Result<u64, ServiceError> {
        self.repo.count_unread().await.map_err(ServiceError::from)
    }
}
