use hearth_core::{Property, PropertyId};
use serde::Serialize;

/// One listing as a result-list row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    #[serde(rename = "Id")]
    pub id: PropertyId,
    pub title: String,
    pub price: u64,
    pub property_type: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub year_built: i32,
    pub address: String,
    pub favorite: bool,
}

impl From<&Property> for ListingSummary {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id,
            title: property.title.clone(),
            price: property.price,
            property_type: property.property_type.clone(),
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            year_built: property.year_built,
            address: property.address.clone(),
            favorite: property.is_favorite,
        }
    }
}

/// One listing as a map marker.
#[derive(Debug, Serialize)]
pub struct MapPin {
    #[serde(rename = "Id")]
    pub id: PropertyId,
    pub title: String,
    pub price: u64,
    pub lat: f64,
    pub lng: f64,
    pub favorite: bool,
}

impl From<&Property> for MapPin {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id,
            title: property.title.clone(),
            price: property.price,
            lat: property.coordinates.lat,
            lng: property.coordinates.lng,
            favorite: property.is_favorite,
        }
    }
}
