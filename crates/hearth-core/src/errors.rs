//! Cross-cutting error types for Hearth.
//!
//! Errors raised by the store, the filter model and record decoding. Backend
//! transport errors live in `hearth-backend`; the CLI converges everything
//! into `anyhow`.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::entities::PropertyId;

/// Errors that can be raised by any Hearth crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No property carries the requested identity.
    #[error("Property not found: {id}")]
    NotFound { id: String },

    /// Data failed validation (duplicate ids, inverted price bounds).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A backend record could not be turned into a property.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl CoreError {
    /// Shorthand for a `NotFound` on a typed identity.
    #[must_use]
    pub fn not_found(id: PropertyId) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    /// Whether this error reports a missing entity.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
