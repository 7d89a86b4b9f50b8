//! # hearth-backend
//!
//! Listing data sources for Hearth.
//!
//! Every source implements [`PropertyBackend`], the boundary the listing
//! service consumes:
//! - [`FixtureBackend`]: a JSON fixture (bundled or on disk), held in memory
//! - [`HttpBackend`]: a hosted-data REST service
//!
//! Both hand back already-decoded [`Property`] values; field-name translation
//! happens here through [`hearth_core::decode`].

mod error;
mod fixture;
mod hosted;
mod http;

pub use error::BackendError;
pub use fixture::FixtureBackend;
pub use hosted::HttpBackend;

use std::future::Future;
use std::time::Duration;

use hearth_config::{BackendKind, HearthConfig};
use hearth_core::{PriceRange, Property, PropertyId};

/// External data collaborator consumed by the listing service.
///
/// Calls complete in the order they are awaited; two independently issued
/// calls carry no ordering guarantee relative to each other.
pub trait PropertyBackend {
    /// Bulk load of every listing.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Property>, BackendError>> + Send;

    /// Load one listing, or [`BackendError::NotFound`].
    fn fetch_by_id(
        &self,
        id: PropertyId,
    ) -> impl Future<Output = Result<Property, BackendError>> + Send;

    /// Record a favorite flag change at the source.
    fn persist_favorite(
        &self,
        id: PropertyId,
        value: bool,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// Bounds for the price slider.
    fn fetch_price_range(&self) -> impl Future<Output = Result<PriceRange, BackendError>> + Send;

    /// Property types offered for filtering.
    fn fetch_property_types(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, BackendError>> + Send;
}

/// Backend selected by configuration.
pub enum ConfiguredBackend {
    Fixture(FixtureBackend),
    Http(HttpBackend),
}

impl ConfiguredBackend {
    /// Build the backend named by `config.backend`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the fixture cannot be read or decoded, or
    /// the HTTP client cannot be built.
    pub async fn from_config(config: &HearthConfig) -> Result<Self, BackendError> {
        let backend = &config.backend;
        match backend.kind {
            BackendKind::Fixture => {
                let fixture = if backend.has_fixture_path() {
                    FixtureBackend::from_path(&backend.fixture_path).await?
                } else {
                    FixtureBackend::bundled()?
                };
                Ok(Self::Fixture(
                    fixture
                        .with_filter_options(
                            config.filters.price_range(),
                            config.filters.property_types.clone(),
                        )
                        .with_latency(Duration::from_millis(backend.latency_ms)),
                ))
            }
            BackendKind::Http => Ok(Self::Http(HttpBackend::new(
                &backend.base_url,
                &backend.table,
                backend.has_api_key().then_some(backend.api_key.as_str()),
                Duration::from_secs(backend.timeout_secs),
            )?)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::Fixture(_) => BackendKind::Fixture,
            Self::Http(_) => BackendKind::Http,
        }
    }
}

impl PropertyBackend for ConfiguredBackend {
    async fn fetch_all(&self) -> Result<Vec<Property>, BackendError> {
        match self {
            Self::Fixture(b) => b.fetch_all().await,
            Self::Http(b) => b.fetch_all().await,
        }
    }

    async fn fetch_by_id(&self, id: PropertyId) -> Result<Property, BackendError> {
        match self {
            Self::Fixture(b) => b.fetch_by_id(id).await,
            Self::Http(b) => b.fetch_by_id(id).await,
        }
    }

    async fn persist_favorite(&self, id: PropertyId, value: bool) -> Result<(), BackendError> {
        match self {
            Self::Fixture(b) => b.persist_favorite(id, value).await,
            Self::Http(b) => b.persist_favorite(id, value).await,
        }
    }

    async fn fetch_price_range(&self) -> Result<PriceRange, BackendError> {
        match self {
            Self::Fixture(b) => b.fetch_price_range().await,
            Self::Http(b) => b.fetch_price_range().await,
        }
    }

    async fn fetch_property_types(&self) -> Result<Vec<String>, BackendError> {
        match self {
            Self::Fixture(b) => b.fetch_property_types().await,
            Self::Http(b) => b.fetch_property_types().await,
        }
    }
}
