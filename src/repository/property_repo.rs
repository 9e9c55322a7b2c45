use crate::config::store_conf::StoreConfig;
use crate::model::property::{Property, PropertyDraft, PropertyPatch, PropertyStatus};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<Property>>;
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Property>;
    async fn create(&self, draft: PropertyDraft) -> RepositoryResult<Property>;
    async fn update(&self, id: &str, patch: PropertyPatch) -> RepositoryResult<Property>;
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
    async fn count(&self) -> RepositoryResult<u64>;
}

/// Property store backed by a single JSON file. Every mutation rewrites the
/// whole file; the mutex serializes read-modify-write cycles in-process.
/// Writers in other processes are not synchronized, last write wins.
pub struct JsonPropertyRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonPropertyRepository {
    pub fn new(config: &StoreConfig) -> Self {
        JsonPropertyRepository {
            path: config.properties_path(),
            lock: Mutex::new(()),
        }
    }

    /// Reads the backing file. A missing file seeds the default listings and
    /// persists them; any other failure is surfaced, never papered over by
    /// re-seeding.
    async fn load(&self) -> RepositoryResult<Vec<Property>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Property file missing, seeding default listings");
                let defaults = default_properties();
                self.persist(&defaults).await?;
                Ok(defaults)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, properties: &[Property]) -> RepositoryResult<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let json = serde_json::to_vec_pretty(properties)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl PropertyRepository for JsonPropertyRepository {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Property>> {
        let _guard = self.lock.lock().await;
        let properties = self.load().await?;
        info!("Fetched {} properties", properties.len());
        Ok(properties)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Property> {
        let _guard = self.lock.lock().await;
        let properties = self.load().await?;
        match properties.into_iter().find(|p| p.id == id) {
            Some(property) => Ok(property),
            None => {
                error!("Property not found for ID: {}", id);
                Err(RepositoryError::not_found(format!(
                    "Property not found for ID: {}",
                    id
                )))
            }
        }
    }

    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: PropertyDraft) -> RepositoryResult<Property> {
        info!("Creating new property listing");
        let _guard = self.lock.lock().await;
        let mut properties = self.load().await?;

        let now = Utc::now();
        let property = Property {
            id: format!("prop_{}", Uuid::new_v4().simple()),
            name: draft.name,
            price: draft.price,
            location: draft.location,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            sqft: draft.sqft,
            status: draft.status,
            description: draft.description,
            images: draft.images,
            featured: draft.featured,
            date_created: now,
            date_updated: now,
        };

        properties.push(property.clone());
        self.persist(&properties).await?;
        info!("Property created successfully with ID: {}", property.id);
        Ok(property)
    }

    #[tracing::instrument(skip(self, patch), fields(id = %id))]
    async fn update(&self, id: &str, patch: PropertyPatch) -> RepositoryResult<Property> {
        info!("Updating property with ID: {}", id);
        let _guard = self.lock.lock().await;
        let mut properties = self.load().await?;

        let Some(property) = properties.iter_mut().find(|p| p.id == id) else {
            error!("No property found to update for ID: {}", id);
            return Err(RepositoryError::not_found(format!(
                "No property found to update for ID: {}",
                id
            )));
        };

        property.apply_patch(patch, Utc::now());
        let updated = property.clone();
        self.persist(&properties).await?;
        info!("Property updated successfully for ID: {}", id);
        Ok(updated)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        info!("Deleting property with ID: {}", id);
        let _guard = self.lock.lock().await;
        let mut properties = self.load().await?;

        let before = properties.len();
        properties.retain(|p| p.id != id);
        if properties.len() == before {
            error!("No property found to delete for ID: {}", id);
            return Err(RepositoryError::not_found(format!(
                "No property found to delete for ID: {}",
                id
            )));
        }

        self.persist(&properties).await?;
        info!("Property deleted successfully for ID: {}", id);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<u64> {
        let _guard = self.lock.lock().await;
        let properties = self.load().await?;
        Ok(properties.len() as u64)
    }
}

/// The three listings the site launched with. Written out on first access
/// so the landing page always has featured inventory to show.
fn default_properties() -> Vec<Property> {
    let now = Utc::now();
    vec![
        Property {
            id: "prop_1".to_string(),
            name: "Modern Family Home".to_string(),
            price: "$750,000".to_string(),
            location: "123 Oak Street, Riverside".to_string(),
            bedrooms: 4,
            bathrooms: 3,
            sqft: 2500,
            status: PropertyStatus::ForSale,
            description: Some(
                "Beautiful modern family home with spacious rooms and great location."
                    .to_string(),
            ),
            images: vec![
                "https://images.unsplash.com/photo-1505843513577-22bb7d21e455?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80"
                    .to_string(),
            ],
            featured: true,
            date_created: now,
            date_updated: now,
        },
        Property {
            id: "prop_2".to_string(),
            name: "Downtown Condo".to_string(),
            price: "$450,000".to_string(),
            location: "456 City Center, Downtown".to_string(),
            bedrooms: 2,
            bathrooms: 2,
            sqft: 1200,
            status: PropertyStatus::ForSale,
            description: Some(
                "Stylish downtown condo with city views and modern amenities.".to_string(),
            ),
            images: vec![
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80"
                    .to_string(),
            ],
            featured: true,
            date_created: now,
            date_updated: now,
        },
        Property {
            id: "prop_3".to_string(),
            name: "Luxury Villa".to_string(),
            price: "$1,250,000".to_string(),
            location: "789 Pine Avenue, Hillcrest".to_string(),
            bedrooms: 5,
            bathrooms: 4,
            sqft: 3800,
            status: PropertyStatus::ForSale,
            description: Some(
                "Stunning luxury villa with premium finishes and mountain views.".to_string(),
            ),
            images: vec![
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80"
                    .to_string(),
            ],
            featured: true,
            date_created: now,
            date_updated: now,
        },
    ]
}
