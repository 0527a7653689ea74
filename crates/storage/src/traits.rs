//! Storage trait abstraction
//!
//! The service layer depends on this trait rather than on the SQLite backend,
//! so tests and alternative backends can plug in.

use async_trait::async_trait;
use opinions_core::{NewOpinion, Opinion};

use crate::error::StorageError;

/// Read and insert operations on opinions. There is no update or delete.
#[async_trait]
pub trait OpinionStore: Send + Sync {
    /// Number of stored opinions.
    async fn count(&self) -> Result<u64, StorageError>;

    /// Opinion at position `offset` in a stable enumeration order (ascending id).
    async fn get_by_offset(&self, offset: u64) -> Result<Option<Opinion>, StorageError>;

    /// Get opinion by ID.
    async fn get_by_id(&self, id: i64) -> Result<Option<Opinion>, StorageError>;

    /// Opinion whose text matches `text` exactly.
    async fn find_by_text(&self, text: &str) -> Result<Option<Opinion>, StorageError>;

    /// Insert a validated opinion in its own transaction.
    ///
    /// Returns the stored row with its assigned id and timestamp. Any failure
    /// rolls the transaction back; a text collision yields [`StorageError::Duplicate`].
    async fn insert(&self, opinion: &NewOpinion) -> Result<Opinion, StorageError>;
}
