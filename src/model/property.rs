use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A property listing as persisted in `properties.json`.
///
/// Field names are serialized camelCase so the backing file stays readable
/// by the admin dashboard's export/import tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    /// Display price, e.g. "$750,000". Kept as a string on purpose.
    pub price: String,
    pub location: String,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub sqft: u32,
    pub status: PropertyStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    #[default]
    ForSale,
    ForRent,
    Sold,
    Rented,
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PropertyStatus::ForSale => "for-sale",
            PropertyStatus::ForRent => "for-rent",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Rented => "rented",
        };
        write!(f, "{}", s)
    }
}

/// Caller-supplied fields for a new listing. The store assigns the id and
/// both timestamps.
#[derive(Debug, Clone)]
pub struct PropertyDraft {
    pub name: String,
    pub price: String,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    pub status: PropertyStatus,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub featured: bool,
}

/// Merge-update for an existing listing: only supplied fields change, and
/// the store refreshes `date_updated`.
#[derive(Debug, Clone, Default)]
pub struct PropertyPatch {
    pub name: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub sqft: Option<u32>,
    pub status: Option<PropertyStatus>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
}

impl Property {
    /// Applies a patch in place, leaving `date_created` untouched.
    pub fn apply_patch(&mut self, patch: PropertyPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(bedrooms) = patch.bedrooms {
            self.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = patch.bathrooms {
            self.bathrooms = bathrooms;
        }
        if let Some(sqft) = patch.sqft {
            self.sqft = sqft;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        self.date_updated = now;
    }
}
