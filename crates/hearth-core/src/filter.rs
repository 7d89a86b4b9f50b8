//! Filter model: search criteria, sort keys, and price slider bounds.
//!
//! Numeric bounds use `0` for "no restriction", matching the sidebar's
//! untouched state. The engine in `hearth-search` reads these fields; it does
//! not check that they are consistent (see [`FilterCriteria::validate`]).

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// Ordering applied after filtering.
///
/// Unknown keys deserialize to [`SortKey::Unsorted`], which keeps store order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most recently built first.
    Newest,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Most bedrooms first.
    Bedrooms,
    #[default]
    #[serde(rename = "none", other)]
    Unsorted,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Bedrooms => "bedrooms",
            Self::Unsorted => "none",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "newest" => Self::Newest,
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "bedrooms" => Self::Bedrooms,
            _ => Self::Unsorted,
        })
    }
}

// ---------------------------------------------------------------------------
// PriceRange
// ---------------------------------------------------------------------------

/// Slider bounds for the price filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    /// Bounds used when the data source does not report its own.
    pub const DEFAULT: Self = Self {
        min: 100_000,
        max: 2_000_000,
    };
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

/// User-selected narrowing and ordering parameters for a search.
///
/// `Default` is the empty criteria: nothing is filtered and store order is
/// kept. [`FilterCriteria::cleared`] is the sidebar's "clear filters" state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub price_min: u64,
    pub price_max: u64,
    pub property_types: Vec<String>,
    pub bedrooms_min: u32,
    pub location: String,
    pub sort_by: SortKey,
}

impl FilterCriteria {
    /// Criteria spanning the whole slider range, sorted newest first.
    #[must_use]
    pub const fn cleared(range: PriceRange) -> Self {
        Self {
            price_min: range.min,
            price_max: range.max,
            property_types: Vec::new(),
            bedrooms_min: 0,
            location: String::new(),
            sort_by: SortKey::Newest,
        }
    }

    /// Reset every field to the cleared state for `range`.
    pub fn clear(&mut self, range: PriceRange) {
        *self = Self::cleared(range);
    }

    /// Add `property_type` if absent, remove it if present.
    pub fn toggle_property_type(&mut self, property_type: &str) {
        if let Some(pos) = self
            .property_types
            .iter()
            .position(|existing| existing == property_type)
        {
            self.property_types.remove(pos);
        } else {
            self.property_types.push(property_type.to_string());
        }
    }

    /// Whether any narrowing predicate is in effect.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.price_min > 0
            || self.price_max > 0
            || !self.property_types.is_empty()
            || self.bedrooms_min > 0
            || !self.location.is_empty()
    }

    /// Check bounds the search engine deliberately leaves unchecked.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when both price bounds are set and
    /// `price_min` exceeds `price_max`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.price_min > 0 && self.price_max > 0 && self.price_min > self.price_max {
            return Err(CoreError::Validation(format!(
                "price_min ({}) exceeds price_max ({})",
                self.price_min, self.price_max
            )));
        }
        Ok(())
    }
}
