//! Listing data source configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default hosted-data table holding listings.
fn default_table() -> String {
    "properties".to_string()
}

/// Default HTTP timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

/// Which data source backs the listing store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Bundled JSON fixture, or a fixture file on disk.
    #[default]
    Fixture,
    /// Hosted-data REST service.
    Http,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fixture => "fixture",
            Self::Http => "http",
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub kind: BackendKind,

    /// Fixture file path. Empty means the bundled fixture.
    #[serde(default)]
    pub fixture_path: String,

    /// Base URL of the hosted-data service (e.g., `https://data.example.com/api`).
    #[serde(default)]
    pub base_url: String,

    /// Table name holding listing records.
    #[serde(default = "default_table")]
    pub table: String,

    /// Bearer token sent to the hosted-data service, if any.
    #[serde(default)]
    pub api_key: String,

    /// HTTP request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Artificial delay added to fixture calls, in milliseconds.
    #[serde(default)]
    pub latency_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            fixture_path: String::new(),
            base_url: String::new(),
            table: default_table(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            latency_ms: 0,
        }
    }
}

impl BackendConfig {
    /// Check if the selected backend has what it needs to run.
    pub fn is_configured(&self) -> bool {
        match self.kind {
            BackendKind::Fixture => true,
            BackendKind::Http => !self.base_url.is_empty() && !self.table.is_empty(),
        }
    }

    /// Whether a fixture file overrides the bundled fixture.
    pub fn has_fixture_path(&self) -> bool {
        !self.fixture_path.is_empty()
    }

    /// Whether requests should carry a bearer token.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Reject a selected backend that is missing required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for an HTTP backend without a
    /// base URL or table, and [`ConfigError::InvalidValue`] for a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "backend".to_string(),
            });
        }
        if self.kind == BackendKind::Http && self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "backend.timeout_secs".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }
}
