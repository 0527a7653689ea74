//! Versioned SQLite schema migrations.
//!
//! The applied version is tracked in `PRAGMA user_version`. Each migration runs
//! in its own transaction together with the version bump.

mod v1;
mod v2;

use sqlx::SqlitePool;

use crate::error::StorageError;

pub const SCHEMA_VERSION: i64 = 2;

const MIGRATIONS: &[(i64, &str, &str)] = &[
    (1, "opinions table", v1::SQL),
    (2, "timestamp index on opinions", v2::SQL),
];

/// Apply every migration newer than the database's current version.
///
/// Returns the schema version after the run.
pub(crate) async fn run_migrations(pool: &SqlitePool) -> Result<i64, StorageError> {
    let current = current_version(pool).await?;
    tracing::info!("Database schema version: {} (target: {})", current, SCHEMA_VERSION);

    for &(version, description, sql) in MIGRATIONS {
        if current < version {
            tracing::info!("Running migration v{}: {}", version, description);
            apply(pool, version, sql)
                .await
                .map_err(|e| StorageError::Migration(format!("v{version} ({description}): {e}")))?;
        }
    }

    Ok(current.max(SCHEMA_VERSION))
}

pub(crate) async fn current_version(pool: &SqlitePool) -> Result<i64, StorageError> {
    Ok(sqlx::query_scalar::<_, i64>("PRAGMA user_version").fetch_one(pool).await?)
}

async fn apply(pool: &SqlitePool, version: i64, sql: &str) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::raw_sql(sql).execute(&mut *tx).await?;
    // PRAGMA does not accept bound parameters.
    let bump = format!("PRAGMA user_version = {version}");
    sqlx::raw_sql(&bump).execute(&mut *tx).await?;
    tx.commit().await
}
