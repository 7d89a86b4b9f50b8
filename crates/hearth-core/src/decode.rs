//! Decoding of backend records into canonical [`Property`] values.
//!
//! Hosted-data backends return loosely-shaped rows: snake_case or camelCase
//! names, numbers that arrive as strings, lists flattened into comma-separated
//! text. [`WireProperty`] accepts all of those; [`decode_record`] applies the
//! defaulting rules below and fails only when a field cannot be defaulted.
//!
//! | Field           | Missing value            |
//! |-----------------|--------------------------|
//! | `id`            | error                    |
//! | `price`         | error                    |
//! | `coordinates`   | error                    |
//! | `title`         | `"Untitled property"`    |
//! | `property_type` | `"House"`                |
//! | `year_built`    | current UTC year         |
//! | counts          | `0`                      |
//! | text            | empty                    |
//! | lists           | empty                    |
//! | `is_favorite`   | `false`                  |

use chrono::Datelike;
use serde::Deserialize;
use thiserror::Error;

use crate::entities::{Coordinates, Property, PropertyId};

pub const DEFAULT_TITLE: &str = "Untitled property";
pub const DEFAULT_PROPERTY_TYPE: &str = "House";

/// Why a record could not become a property.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("record is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' has an invalid value: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("record is not a valid property object: {0}")]
    Json(#[from] serde_json::Error),
}

/// A number that may arrive as an integer, a float, or numeric text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl WireNumber {
    fn as_f64(&self, field: &'static str) -> Result<f64, DecodeError> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(v) => Ok(*v as f64),
            Self::Float(v) => Ok(*v),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|e| DecodeError::InvalidField {
                    field,
                    reason: format!("'{text}' is not a number ({e})"),
                }),
        }
    }

    fn as_u64(&self, field: &'static str) -> Result<u64, DecodeError> {
        let invalid = |reason: String| DecodeError::InvalidField { field, reason };
        match self {
            Self::Int(v) => u64::try_from(*v).map_err(|_| invalid(format!("{v} is negative"))),
            Self::Float(v) => {
                if v.is_finite() && *v >= 0.0 && v.fract() == 0.0 {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    Ok(*v as u64)
                } else {
                    Err(invalid(format!("{v} is not a whole non-negative number")))
                }
            }
            Self::Text(text) => {
                let cleaned: String = text
                    .trim()
                    .chars()
                    .filter(|c| !matches!(c, ',' | '$' | '_'))
                    .collect();
                cleaned
                    .parse::<u64>()
                    .map_err(|_| invalid(format!("'{text}' is not a whole number")))
            }
        }
    }

    fn as_u32(&self, field: &'static str) -> Result<u32, DecodeError> {
        let value = self.as_u64(field)?;
        u32::try_from(value).map_err(|_| DecodeError::InvalidField {
            field,
            reason: format!("{value} is out of range"),
        })
    }
}

/// A list that may arrive as an array or as comma-separated text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireList {
    Many(Vec<String>),
    Joined(String),
}

impl WireList {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::Many(items) => items,
            Self::Joined(text) => text
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireCoordinates {
    #[serde(alias = "latitude")]
    pub lat: WireNumber,
    #[serde(alias = "lon", alias = "longitude")]
    pub lng: WireNumber,
}

/// Raw backend record. Every field is optional; see the module table for
/// which ones are defaulted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireProperty {
    #[serde(alias = "Id")]
    pub id: Option<WireNumber>,
    #[serde(alias = "name", alias = "Name")]
    pub title: Option<String>,
    pub price: Option<WireNumber>,
    pub address: Option<String>,
    pub bedrooms: Option<WireNumber>,
    pub bathrooms: Option<WireNumber>,
    #[serde(alias = "squareFeet")]
    pub square_feet: Option<WireNumber>,
    #[serde(alias = "propertyType")]
    pub property_type: Option<String>,
    pub images: Option<WireList>,
    pub description: Option<String>,
    pub features: Option<WireList>,
    pub coordinates: Option<WireCoordinates>,
    #[serde(alias = "lat")]
    pub latitude: Option<WireNumber>,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: Option<WireNumber>,
    #[serde(alias = "yearBuilt")]
    pub year_built: Option<WireNumber>,
    #[serde(alias = "isFavorite")]
    pub is_favorite: Option<bool>,
}

/// Records that decoded and records that were rejected, by input position.
#[derive(Debug, Default)]
pub struct DecodeBatch {
    pub properties: Vec<Property>,
    pub rejected: Vec<(usize, DecodeError)>,
}

/// Current UTC year, used when a record omits `year_built`.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Decode a record, defaulting a missing `year_built` to the current year.
///
/// # Errors
///
/// Returns [`DecodeError`] when `id`, `price` or `coordinates` is missing or
/// any present field holds an unusable value.
pub fn decode_record(wire: WireProperty) -> Result<Property, DecodeError> {
    decode_record_with_year(wire, current_year())
}

/// Decode a record with an explicit fallback year.
///
/// # Errors
///
/// See [`decode_record`].
pub fn decode_record_with_year(
    wire: WireProperty,
    fallback_year: i32,
) -> Result<Property, DecodeError> {
    let id = wire
        .id
        .as_ref()
        .ok_or(DecodeError::MissingField("id"))?
        .as_u64("id")?;
    let price = wire
        .price
        .as_ref()
        .ok_or(DecodeError::MissingField("price"))?
        .as_u64("price")?;
    let coordinates = decode_coordinates(&wire)?;

    let count = |value: Option<&WireNumber>, field| value.map_or(Ok(0), |v| v.as_u32(field));
    let bedrooms = count(wire.bedrooms.as_ref(), "bedrooms")?;
    let bathrooms = count(wire.bathrooms.as_ref(), "bathrooms")?;
    let square_feet = count(wire.square_feet.as_ref(), "square_feet")?;

    let year_built = match wire.year_built.as_ref() {
        None => fallback_year,
        Some(value) => {
            let year = value.as_u64("year_built")?;
            i32::try_from(year).map_err(|_| DecodeError::InvalidField {
                field: "year_built",
                reason: format!("{year} is out of range"),
            })?
        }
    };

    Ok(Property {
        id: PropertyId(id),
        title: wire
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        price,
        address: wire.address.unwrap_or_default(),
        bedrooms,
        bathrooms,
        square_feet,
        property_type: wire
            .property_type
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROPERTY_TYPE.to_string()),
        images: wire.images.map(WireList::into_vec).unwrap_or_default(),
        description: wire.description.unwrap_or_default(),
        features: wire.features.map(WireList::into_vec).unwrap_or_default(),
        coordinates,
        year_built,
        is_favorite: wire.is_favorite.unwrap_or(false),
    })
}

fn decode_coordinates(wire: &WireProperty) -> Result<Coordinates, DecodeError> {
    if let Some(nested) = &wire.coordinates {
        return Ok(Coordinates {
            lat: nested.lat.as_f64("coordinates.lat")?,
            lng: nested.lng.as_f64("coordinates.lng")?,
        });
    }
    match (&wire.latitude, &wire.longitude) {
        (Some(lat), Some(lng)) => Ok(Coordinates {
            lat: lat.as_f64("latitude")?,
            lng: lng.as_f64("longitude")?,
        }),
        _ => Err(DecodeError::MissingField("coordinates")),
    }
}

/// Decode an arbitrary JSON value.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] when the value is not an object of the
/// expected shape, otherwise see [`decode_record`].
pub fn decode_value(value: serde_json::Value) -> Result<Property, DecodeError> {
    let wire: WireProperty = serde_json::from_value(value)?;
    decode_record(wire)
}

/// Decode every value, keeping the good ones and recording the rest.
#[must_use]
pub fn decode_batch(values: Vec<serde_json::Value>) -> DecodeBatch {
    let mut batch = DecodeBatch::default();
    for (index, value) in values.into_iter().enumerate() {
        match decode_value(value) {
            Ok(property) => batch.properties.push(property),
            Err(error) => batch.rejected.push((index, error)),
        }
    }
    batch
}
