//! JSON fixture data source.
//!
//! Listings are decoded once at construction and held in memory. Favorite
//! changes live as long as the backend does; nothing is written back to disk.

use std::path::Path;
use std::time::Duration;

use hearth_core::decode::decode_batch;
use hearth_core::{DEFAULT_PROPERTY_TYPES, PriceRange, Property, PropertyId};
use tokio::sync::RwLock;

use crate::PropertyBackend;
use crate::error::BackendError;

/// Listings shipped with the crate.
const BUNDLED_FIXTURE: &str = include_str!("../fixtures/properties.json");

pub struct FixtureBackend {
    records: RwLock<Vec<Property>>,
    price_range: PriceRange,
    property_types: Vec<String>,
    latency: Duration,
}

impl FixtureBackend {
    /// Backend over the bundled listing fixture.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the bundled fixture fails to decode.
    pub fn bundled() -> Result<Self, BackendError> {
        Self::from_json(BUNDLED_FIXTURE)
    }

    /// Backend over a fixture file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Io`] if the file cannot be read, or see
    /// [`Self::from_json`].
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        tracing::debug!(path = %path.display(), "loading listing fixture");
        Self::from_json(&text)
    }

    /// Backend over fixture text: a JSON array of listing records.
    ///
    /// Records that do not decode are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Json`] if the text is not a JSON array, or
    /// [`BackendError::Core`] if two records share an id.
    pub fn from_json(text: &str) -> Result<Self, BackendError> {
        let values: Vec<serde_json::Value> = serde_json::from_str(text)?;
        let batch = decode_batch(values);
        for (index, error) in &batch.rejected {
            tracing::warn!(index, %error, "skipping undecodable fixture record");
        }

        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = batch.properties.iter().find(|p| !seen.insert(p.id)) {
            return Err(hearth_core::CoreError::Validation(format!(
                "fixture has duplicate property id {}",
                dup.id
            ))
            .into());
        }

        Ok(Self {
            records: RwLock::new(batch.properties),
            price_range: PriceRange::DEFAULT,
            property_types: DEFAULT_PROPERTY_TYPES.iter().map(ToString::to_string).collect(),
            latency: Duration::ZERO,
        })
    }

    /// Replace the slider bounds and type list reported to the sidebar.
    #[must_use]
    pub fn with_filter_options(mut self, price_range: PriceRange, property_types: Vec<String>) -> Self {
        self.price_range = price_range;
        self.property_types = property_types;
        self
    }

    /// Delay every call by `latency`, imitating a remote source.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl PropertyBackend for FixtureBackend {
    async fn fetch_all(&self) -> Result<Vec<Property>, BackendError> {
        self.simulate_latency().await;
        Ok(self.records.read().await.clone())
    }

    async fn fetch_by_id(&self, id: PropertyId) -> Result<Property, BackendError> {
        self.simulate_latency().await;
        self.records
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(BackendError::NotFound { id })
    }

    async fn persist_favorite(&self, id: PropertyId, value: bool) -> Result<(), BackendError> {
        self.simulate_latency().await;
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BackendError::NotFound { id })?;
        record.is_favorite = value;
        Ok(())
    }

    async fn fetch_price_range(&self) -> Result<PriceRange, BackendError> {
        self.simulate_latency().await;
        Ok(self.price_range)
    }

    async fn fetch_property_types(&self) -> Result<Vec<String>, BackendError> {
        self.simulate_latency().await;
        Ok(self.property_types.clone())
    }
}
