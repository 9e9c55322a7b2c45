use crate::config::store_conf::StoreConfig;
use crate::model::contact::{Contact, ContactDraft, ContactStatus};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<Contact>>;
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Contact>;
    async fn create(&self, draft: ContactDraft) -> RepositoryResult<Contact>;
    async fn set_status(&self, id: &str, status: ContactStatus) -> RepositoryResult<Contact>;
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
    async fn count(&self) -> RepositoryResult<u64>;
    async fn count_unread(&self) -> RepositoryResult<u64>;
}

/// Contact store backed by a single JSON file, same whole-file rewrite
/// policy as the property store. Unlike properties there is no seed data:
/// a missing file is an empty inbox.
pub struct JsonContactRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonContactRepository {
    pub fn new(config: &StoreConfig) -> Self {
        JsonContactRepository {
            path: config.contacts_path(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> RepositoryResult<Vec<Contact>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, contacts: &[Contact]) -> RepositoryResult<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let json = serde_json::to_vec_pretty(contacts)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for JsonContactRepository {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Contact>> {
        let _guard = self.lock.lock().await;
        let contacts = self.load().await?;
        info!("Fetched {} contacts", contacts.len());
        Ok(contacts)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Contact> {
        let _guard = self.lock.lock().await;
        let contacts = self.load().await?;
        match contacts.into_iter().find(|c| c.id == id) {
            Some(contact) => Ok(contact),
            None => {
                error!("Contact not found for ID: {}", id);
                Err(RepositoryError::not_found(format!(
                    "Contact not found for ID: {}",
                    id
                )))
            }
        }
    }

    #[tracing::instrument(skip(self, draft), fields(email = %draft.email))]
    async fn create(&self, draft: ContactDraft) -> RepositoryResult<Contact> {
        info!("Recording new contact lead");
        let _guard = self.lock.lock().await;
        let mut contacts = self.load().await?;

        let contact = Contact {
            id: format!("contact_{}", Uuid::new_v4().simple()),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            interest: draft.interest,
            message: draft.message,
            source: draft.source,
            status: ContactStatus::Unread,
            created_at: Utc::now(),
        };

        contacts.push(contact.clone());
        self.persist(&contacts).await?;
        info!("Contact created successfully with ID: {}", contact.id);
        Ok(contact)
    }

    #[tracing::instrument(skip(self), fields(id = %id, status = %status))]
    async fn set_status(&self, id: &str, status: ContactStatus) -> RepositoryResult<Contact> {
        info!("Updating contact status");
        let _guard = self.lock.lock().await;
        let mut contacts = self.load().await?;

        let Some(contact) = contacts.iter_mut().find(|c| c.id == id) else {
            error!("No contact found to update status for ID: {}", id);
            return Err(RepositoryError::not_found(format!(
                "No contact found to update status for ID: {}",
                id
            )));
        };

        contact.status = status;
        let updated = contact.clone();
        self.persist(&contacts).await?;
        info!("Contact status updated successfully for ID: {}", id);
        Ok(updated)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        info!("Deleting contact with ID: {}", id);
        let _guard = self.lock.lock().await;
        let mut contacts = self.load().await?;

        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        if contacts.len() == before {
            error!("No contact found to delete for ID: {}", id);
            return Err(RepositoryError::not_found(format!(
                "No contact found to delete for ID: {}",
                id
            )));
        }

        self.persist(&contacts).await?;
        info!("Contact deleted successfully for ID: {}", id);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<u64> {
        let _guard = self.lock.lock().await;
        let contacts = self.load().await?;
        Ok(contacts.len() as u64)
    }

    #[tracing::instrument(skip(self))]
    async fn count_unread(&self) -> RepositoryResult<u64> {
        let _guard = self.lock.lock().await;
        let contacts = self.load().await?;
        Ok(contacts
            .iter()
            .filter(|c| c.status == ContactStatus::Unread)
            .count() as u64)
    }
}
