//! Filter sidebar configuration: slider bounds, type list, initial sort.

use hearth_core::{DEFAULT_PROPERTY_TYPES, PriceRange, SortKey};
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

use crate::ConfigError;

const fn default_price_floor() -> u64 {
    PriceRange::DEFAULT.min
}

const fn default_price_ceiling() -> u64 {
    PriceRange::DEFAULT.max
}

fn default_property_types() -> Vec<String> {
    DEFAULT_PROPERTY_TYPES.iter().map(ToString::to_string).collect()
}

const fn default_sort() -> SortKey {
    SortKey::Newest
}

/// Read a sort name, rejecting names `SortKey` does not define instead of
/// falling back to unsorted.
fn strict_sort<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SortKey, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let Ok(key) = raw.parse::<SortKey>();
    if key == SortKey::Unsorted && raw.trim() != SortKey::Unsorted.as_str() {
        return Err(D::Error::invalid_value(
            Unexpected::Str(&raw),
            &"newest, price-low, price-high, bedrooms or none",
        ));
    }
    Ok(key)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FiltersConfig {
    /// Lower bound of the price slider.
    #[serde(default = "default_price_floor")]
    pub price_floor: u64,

    /// Upper bound of the price slider.
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: u64,

    /// Property types offered for filtering by the fixture backend.
    #[serde(default = "default_property_types")]
    pub property_types: Vec<String>,

    /// Sort applied when a search does not name one.
    #[serde(default = "default_sort", deserialize_with = "strict_sort")]
    pub default_sort: SortKey,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            price_floor: default_price_floor(),
            price_ceiling: default_price_ceiling(),
            property_types: default_property_types(),
            default_sort: default_sort(),
        }
    }
}

impl FiltersConfig {
    #[must_use]
    pub const fn price_range(&self) -> PriceRange {
        PriceRange {
            min: self.price_floor,
            max: self.price_ceiling,
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the floor exceeds the ceiling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.price_floor > self.price_ceiling {
            return Err(ConfigError::InvalidValue {
                field: "filters.price_floor".to_string(),
                reason: format!(
                    "{} is above filters.price_ceiling ({})",
                    self.price_floor, self.price_ceiling
                ),
            });
        }
        Ok(())
    }
}
