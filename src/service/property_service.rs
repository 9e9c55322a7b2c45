use crate::model::property::{Property, PropertyDraft, PropertyPatch};
use crate::repository::property_repo::PropertyRepository;
use crate::util::error::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// How many listings the landing page shows.
pub const FEATURED_LIMIT: usize = 3;

#[async_trait]
pub trait PropertyService: Send + Sync {
    async fn list_properties(&self) -> Result<Vec<Property>, ServiceError>;
    async fn get_property(&self, id: &str) -> Result<Property, ServiceError>;
    async fn featured_properties(&self, limit: usize) -> Result<Vec<Property>, ServiceError>;
    async fn create_property(&self, draft: PropertyDraft) -> Result<Property, ServiceError>;
    async fn update_property(&self, id: &str, patch: PropertyPatch)
        -> Result<Property, ServiceError>;
    async fn delete_property(&self, id: &str) -> Result<(), ServiceError>;
    async fn count_properties(&self) -> Result<u64, ServiceError>;
}

pub struct PropertyServiceImpl {
    pub repo: Arc<dyn PropertyRepository>,
}

impl PropertyServiceImpl {
    pub fn new(repo: Arc<dyn PropertyRepository>) -> Self {
        PropertyServiceImpl { repo }
    }
}

#[async_trait]
impl PropertyService for PropertyServiceImpl {
    #[instrument(skip(self))]
    async fn list_properties(&self) -> Result<Vec<Property>, ServiceError> {
        info!("Listing properties");
        let res = self.repo.list().await;
        match &res {
            Ok(properties) => info!("Fetched {} properties", properties.len()),
            Err(e) => error!("Failed to list properties: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_property(&self, id: &str) -> Result<Property, ServiceError> {
        info!("Getting property by id");
        let res = self.repo.get_by_id(id).await;
        match &res {
            Ok(_) => info!("Property fetched successfully"),
            Err(e) => error!("Failed to fetch property: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    /// Landing-page selection: featured listings first, backfilled with
    /// regular listings in store order when there are fewer than `limit`.
    #[instrument(skip(self), fields(limit))]
    async fn featured_properties(&self, limit: usize) -> Result<Vec<Property>, ServiceError> {
        info!("Selecting featured properties");
        let properties = self.repo.list().await.map_err(ServiceError::from)?;

        let mut featured: Vec<Property> =
            properties.iter().filter(|p| p.featured).cloned().collect();
        if featured.len() < limit {
            let fill = properties
                .iter()
                .filter(|p| !p.featured)
                .take(limit - featured.len())
                .cloned();
            featured.extend(fill);
        }
        featured.truncate(limit);

        info!("Selected {} featured properties", featured.len());
        Ok(featured)
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create_property(&self, draft: PropertyDraft) -> Result<Property, ServiceError> {
        info!("Creating property");
        let res = self.repo.create(draft).await;
        match &res {
            Ok(property) => info!("Property created with id {}", property.id),
            Err(e) => error!("Failed to create property: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self, patch), fields(id = %id))]
    async fn update_property(
        &self,
        id: &str,
        patch: PropertyPatch,
    ) -> Result<Property, ServiceError> {
        info!("Updating property");
        let res = self.repo.update(id, patch).await;
        match &res {
            Ok(_) => info!("Property updated successfully"),
            Err(e) => error!("Failed to update property: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_property(&self, id: &str) -> Result<(), ServiceError> {
        info!("Deleting property");
        let res = self.repo.delete(id).await;
        match &res {
            Ok(_) => info!("Property deleted successfully"),
            Err(e) => error!("Failed to delete property: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn count_properties(&self) -> Result<u64, ServiceError> {
        self.repo.count().await.map_err(ServiceError::from)
    }
}
