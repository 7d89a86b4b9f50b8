use anyhow::Context;
use hearth_backend::ConfiguredBackend;
use hearth_config::HearthConfig;
use hearth_views::ListingService;

use crate::progress::Progress;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: ListingService<ConfiguredBackend>,
    pub config: HearthConfig,
}

impl AppContext {
    /// Build the configured backend and load every listing into the store.
    pub async fn init(config: HearthConfig) -> anyhow::Result<Self> {
        let spinner = Progress::spinner("Loading listings…");
        match load_service(&config).await {
            Ok(service) => {
                spinner.finish_clear();
                tracing::debug!(
                    backend = %config.backend.kind,
                    listings = service.store().len(),
                    "application context ready"
                );
                Ok(Self { service, config })
            }
            Err(error) => {
                spinner.finish_err("failed to load listings");
                Err(error)
            }
        }
    }
}

async fn load_service(config: &HearthConfig) -> anyhow::Result<ListingService<ConfiguredBackend>> {
    let backend = ConfiguredBackend::from_config(config)
        .await
        .with_context(|| format!("failed to open {} backend", config.backend.kind))?;
    ListingService::load(backend)
        .await
        .context("failed to load listings")
}
