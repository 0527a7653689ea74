//! OpinionStore implementation for SqliteStorage.

use async_trait::async_trait;
use chrono::Utc;
use opinions_core::{NewOpinion, Opinion};

use super::{row_to_opinion, SqliteStorage, OPINION_COLUMNS};
use crate::error::StorageError;
use crate::traits::OpinionStore;

#[async_trait]
impl OpinionStore for SqliteStorage {
    async fn count(&self) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM opinions").fetch_one(&self.pool).await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn get_by_offset(&self, offset: u64) -> Result<Option<Opinion>, StorageError> {
        let sql = format!("SELECT {OPINION_COLUMNS} FROM opinions ORDER BY id LIMIT 1 OFFSET ?");
        let row = sqlx::query(&sql)
            .bind(i64::try_from(offset).unwrap_or(i64::MAX))
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_opinion(&r)).transpose()
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Opinion>, StorageError> {
        let sql = format!("SELECT {OPINION_COLUMNS} FROM opinions WHERE id = ?");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(|r| row_to_opinion(&r)).transpose()
    }

    async fn find_by_text(&self, text: &str) -> Result<Option<Opinion>, StorageError> {
        let sql = format!("SELECT {OPINION_COLUMNS} FROM opinions WHERE text = ?");
        let row = sqlx::query(&sql).bind(text).fetch_optional(&self.pool).await?;
        row.map(|r| row_to_opinion(&r)).transpose()
    }

    async fn insert(&self, opinion: &NewOpinion) -> Result<Opinion, StorageError> {
        let sql = format!(
            "INSERT INTO opinions (title, text, source, timestamp)
             VALUES (?, ?, ?, ?)
             RETURNING {OPINION_COLUMNS}"
        );
        let mut tx = self.pool.begin().await?;

        let inserted: Result<Opinion, StorageError> = async {
            let row = sqlx::query(&sql)
                .bind(opinion.title())
                .bind(opinion.text())
                .bind(opinion.source())
                .bind(Utc::now())
                .fetch_one(&mut *tx)
                .await?;
            row_to_opinion(&row)
        }
        .await;

        match inserted {
            Ok(stored) => {
                tx.commit().await?;
                tracing::debug!(id = stored.id, "opinion inserted");
                Ok(stored)
            },
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "rollback after failed insert also failed");
                } else {
                    tracing::warn!(error = %err, "opinion insert rolled back");
                }
                Err(err)
            },
        }
    }
}
