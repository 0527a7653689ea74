//! Typed error enum for the service layer.

use opinions_core::ValidationError;
use opinions_storage::StorageError;
use thiserror::Error;

/// Service-layer error covering each way a request can end early.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, corruption, migration).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Submitted form failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An opinion with the same text is already stored.
    #[error("duplicate opinion text")]
    Duplicate,

    /// No opinion with this id.
    #[error("opinion {0} not found")]
    NotFound(i64),

    /// A random opinion was requested but none are stored.
    #[error("no opinions stored")]
    EmptyStore,
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this error represents a duplicate submission.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate)
    }
}
