//! Backend error types.

use hearth_core::{CoreError, PropertyId};
use hearth_core::decode::DecodeError;
use thiserror::Error;

/// Errors raised by listing data sources. Surfaced to callers unchanged.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The data service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The data service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The data source has no listing with this id.
    #[error("Property not found: {id}")]
    NotFound { id: PropertyId },

    /// A record could not be decoded into a listing.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A fixture file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A payload was not valid JSON of the expected envelope shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The fixture itself is inconsistent (duplicate ids and the like).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl BackendError {
    /// Whether this error reports a missing listing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
