//! Listing service error types.

use hearth_backend::BackendError;
use hearth_core::CoreError;
use thiserror::Error;

/// Errors from listing service operations. Nothing is partially applied when
/// one of these is returned.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Store lookup or validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Failure reported by the data backend.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

impl ViewError {
    /// Whether the failure is a missing listing, from either layer.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::Core(e) => e.is_not_found(),
            Self::Backend(e) => e.is_not_found(),
        }
    }
}
