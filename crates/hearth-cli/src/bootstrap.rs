use anyhow::Context;
use hearth_config::{BackendKind, HearthConfig};

/// Load `.env`, layer the configuration sources and check the result.
pub fn load_config() -> anyhow::Result<HearthConfig> {
    let config = HearthConfig::load_with_dotenv().context("failed to load hearth configuration")?;
    warn_unconfigured(&config);
    config.validate().context("invalid hearth configuration")?;
    Ok(config)
}

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
fn warn_unconfigured(config: &HearthConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &HearthConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let single_underscore = |section: &str| {
        let prefix = format!("HEARTH_{section}_");
        let nested = format!("HEARTH_{section}__");
        keys.iter()
            .any(|key| key.starts_with(&prefix) && !key.starts_with(&nested))
    };

    let mut warnings = Vec::new();

    if config.backend.kind == BackendKind::Fixture && single_underscore("BACKEND") {
        warnings.push(
            "backend config appears default while HEARTH_BACKEND_* env vars exist. Use double underscores (example: HEARTH_BACKEND__BASE_URL)."
                .to_string(),
        );
    }

    if single_underscore("FILTERS") {
        warnings.push(
            "HEARTH_FILTERS_* env vars are ignored. Use double underscores (example: HEARTH_FILTERS__PRICE_CEILING)."
                .to_string(),
        );
    }

    warnings
}
