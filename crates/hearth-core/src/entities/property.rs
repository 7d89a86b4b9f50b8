use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Property types offered by the filter sidebar when the backend has no list.
pub const DEFAULT_PROPERTY_TYPES: [&str; 5] = ["House", "Apartment", "Condo", "Townhouse", "Villa"];

/// Stable integer identity of a listing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct PropertyId(pub u64);

impl PropertyId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identity that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PropertyId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for PropertyId {
    type Err = CoreError;

    /// Parse a textual id. Text that is not an integer cannot name any
    /// listing, so it is reported as `NotFound` rather than a parse failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CoreError::NotFound { id: s.to_string() })
    }
}

/// Latitude/longitude pair used by the map view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A single real-estate listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "Id")]
    pub id: PropertyId,
    pub title: String,
    /// Asking price in whole US dollars.
    pub price: u64,
    pub address: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: u32,
    pub property_type: String,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub coordinates: Coordinates,
    pub year_built: i32,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Property {
    /// First image, shown on cards and map popups.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Build a stored property from creation input.
    #[must_use]
    pub fn from_new(id: PropertyId, new: NewProperty) -> Self {
        Self {
            id,
            title: new.title,
            price: new.price,
            address: new.address,
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms,
            square_feet: new.square_feet,
            property_type: new.property_type,
            images: new.images,
            description: new.description,
            features: new.features,
            coordinates: new.coordinates,
            year_built: new.year_built,
            is_favorite: false,
        }
    }
}

/// Creation input: every listing field except identity and favorite state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub price: u64,
    pub address: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: u32,
    pub property_type: String,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub coordinates: Coordinates,
    pub year_built: i32,
}
