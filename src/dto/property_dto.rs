use crate::model::property::{PropertyDraft, PropertyPatch, PropertyStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating a listing from the dashboard. Name, price and
/// location are mandatory; numeric fields default to 0 when absent and
/// status defaults to `for-sale`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePropertyRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 50))]
    pub price: String,

    #[validate(length(min = 1, max = 200))]
    pub location: String,

    #[serde(default)]
    pub bedrooms: u32,

    #[serde(default)]
    pub bathrooms: u32,

    #[serde(default)]
    pub sqft: u32,

    #[serde(default)]
    pub status: PropertyStatus,

    pub description: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub featured: bool,
}

impl From<CreatePropertyRequest> for PropertyDraft {
    fn from(req: CreatePropertyRequest) -> Self {
        PropertyDraft {
            name: req.name,
            price: req.price,
            location: req.location,
            bedrooms: req.bedrooms,
            bathrooms: req.bathrooms,
            sqft: req.sqft,
            status: req.status,
            description: req.description,
            images: req.images,
            featured: req.featured,
        }
    }
}

/// Merge-update payload: absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePropertyRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub price: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,

    pub bedrooms: Option<u32>,

    pub bathrooms: Option<u32>,

    pub sqft: Option<u32>,

    pub status: Option<PropertyStatus>,

    pub description: Option<String>,

    pub images: Option<Vec<String>>,

    pub featured: Option<bool>,
}

impl From<UpdatePropertyRequest> for PropertyPatch {
    fn from(req: UpdatePropertyRequest) -> Self {
        PropertyPatch {
            name: req.name,
            price: req.price,
            location: req.location,
            bedrooms: req.bedrooms,
            bathrooms: req.bathrooms,
            sqft: req.sqft,
            status: req.status,
            description: req.description,
            images: req.images,
            featured: req.featured,
        }
    }
}
