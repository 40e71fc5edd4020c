//! Typed error enum for the service layer.

use plantarium_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage failures and domain outcomes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (pool, constraint, driver, migration).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// No plant stored under the requested name.
    #[error("plant not found: {name}")]
    NotFound { name: String },
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error represents a unique-key conflict.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}
