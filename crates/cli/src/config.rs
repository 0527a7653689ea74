//! Startup configuration: database location and pool settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use opinions_core::{env_parse_with_default, DB_POOL_ACQUIRE_TIMEOUT_SECS, DB_POOL_MAX_CONNECTIONS};
use opinions_storage::StorageConfig;

pub(crate) const DATABASE_URL_VAR: &str = "OPINIONS_DATABASE_URL";
const MAX_CONNECTIONS_VAR: &str = "OPINIONS_DB_MAX_CONNECTIONS";
const ACQUIRE_TIMEOUT_VAR: &str = "OPINIONS_DB_ACQUIRE_TIMEOUT_SECS";

pub(crate) struct Config {
    pub(crate) storage: StorageConfig,
}

impl Config {
    /// Database URL precedence: `--database-url`, then `OPINIONS_DATABASE_URL`,
    /// then `db.sqlite3` in the user's local data directory.
    pub(crate) fn resolve(database_url: Option<String>) -> Result<Self> {
        let database_url = match database_url.or_else(database_url_from_env) {
            Some(url) => url,
            None => {
                let path = default_db_path();
                ensure_db_dir(&path)?;
                format!("sqlite://{}", path.display())
            },
        };

        let mut storage = StorageConfig::new(database_url);
        storage.max_connections =
            env_parse_with_default(MAX_CONNECTIONS_VAR, DB_POOL_MAX_CONNECTIONS).max(1);
        storage.acquire_timeout = Duration::from_secs(env_parse_with_default(
            ACQUIRE_TIMEOUT_VAR,
            DB_POOL_ACQUIRE_TIMEOUT_SECS,
        ));
        Ok(Self { storage })
    }
}

fn database_url_from_env() -> Option<String> {
    std::env::var(DATABASE_URL_VAR).ok().filter(|url| !url.trim().is_empty())
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("opinions")
        .join("db.sqlite3")
}

fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_wins() {
        let config = Config::resolve(Some("sqlite://explicit.db".to_owned())).unwrap();
        assert_eq!(config.storage.database_url, "sqlite://explicit.db");
        assert!(config.storage.max_connections >= 1);
    }

    #[test]
    fn default_path_lives_under_opinions_dir() {
        let path = default_db_path();
        assert!(path.ends_with("opinions/db.sqlite3"));
    }
}
