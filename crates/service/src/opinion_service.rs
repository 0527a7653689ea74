use std::sync::Arc;

use opinions_core::{Opinion, OpinionForm};
use opinions_storage::{OpinionStore, StorageError};
use rand::Rng;

use crate::ServiceError;

pub struct OpinionService {
    storage: Arc<dyn OpinionStore>,
}

impl OpinionService {
    #[must_use]
    pub fn new(storage: Arc<dyn OpinionStore>) -> Self {
        Self { storage }
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.storage.count().await?)
    }

    /// Pick one stored opinion uniformly at random.
    ///
    /// Fails with [`ServiceError::EmptyStore`] when nothing is stored.
    pub async fn random_opinion(&self) -> Result<Opinion, ServiceError> {
        let count = self.storage.count().await?;
        let Some(offset) = pick_offset(count, &mut rand::rng()) else {
            return Err(ServiceError::EmptyStore);
        };
        self.storage.get_by_offset(offset).await?.ok_or_else(|| {
            StorageError::NotFound { entity: "opinion offset", id: offset.to_string() }.into()
        })
    }

    pub async fn get_opinion(&self, id: i64) -> Result<Opinion, ServiceError> {
        self.storage.get_by_id(id).await?.ok_or(ServiceError::NotFound(id))
    }

    /// Validate, reject duplicate text, then store.
    pub async fn add_opinion(&self, form: &OpinionForm) -> Result<Opinion, ServiceError> {
        let new = form.validate()?;

        if self.storage.find_by_text(new.text()).await?.is_some() {
            tracing::debug!(title = new.title(), "duplicate opinion rejected before insert");
            return Err(ServiceError::Duplicate);
        }

        match self.storage.insert(&new).await {
            Ok(stored) => {
                tracing::info!(id = stored.id, title = %stored.title, "opinion added");
                Ok(stored)
            },
            // A concurrent request stored the same text between the check and the insert.
            Err(e) if e.is_duplicate() => Err(ServiceError::Duplicate),
            Err(e) => Err(e.into()),
        }
    }
}

/// Uniform offset in `[0, count)`, or `None` when there are no rows.
pub fn pick_offset<R: Rng>(count: u64, rng: &mut R) -> Option<u64> {
    (count > 0).then(|| rng.random_range(0..count))
}
