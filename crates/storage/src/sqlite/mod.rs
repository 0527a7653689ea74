//! SQLite storage backend using sqlx.

mod opinions;

use std::str::FromStr;
use std::time::Duration;

use opinions_core::{
    Opinion, DB_BUSY_TIMEOUT_SECS, DB_POOL_ACQUIRE_TIMEOUT_SECS, DB_POOL_MAX_CONNECTIONS,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::error::StorageError;
use crate::migrations::{current_version, run_migrations};

/// Connection settings for [`SqliteStorage::connect`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    /// `sqlite://` URL of the database file
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl StorageConfig {
    /// Config for `database_url` with default pool settings.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DB_POOL_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DB_POOL_ACQUIRE_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Open (creating if missing) the database file and bring its schema up to date.
    pub async fn connect(config: &StorageConfig) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(DB_BUSY_TIMEOUT_SECS));
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await?;
        run_migrations(&pool).await?;
        tracing::info!(url = %config.database_url, "SqliteStorage initialized");
        Ok(Self { pool })
    }

    /// Private in-memory database, migrated and ready.
    ///
    /// The pool holds exactly one connection that never expires, since each
    /// `:memory:` connection is its own database.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Schema version currently recorded in the database.
    pub async fn schema_version(&self) -> Result<i64, StorageError> {
        current_version(&self.pool).await
    }

    /// Re-run pending migrations. A no-op once the schema is current.
    pub async fn migrate(&self) -> Result<i64, StorageError> {
        run_migrations(&self.pool).await
    }

    /// Close every pooled connection. Waits for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("SqliteStorage closed");
    }
}

pub(crate) const OPINION_COLUMNS: &str = "id, title, text, source, timestamp, added_by";

pub(crate) fn row_to_opinion(row: &SqliteRow) -> Result<Opinion, StorageError> {
    Ok(Opinion {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        text: row.try_get("text")?,
        source: row.try_get("source")?,
        timestamp: row.try_get("timestamp")?,
        added_by: row.try_get("added_by")?,
    })
}
