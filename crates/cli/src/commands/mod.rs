pub(crate) mod migrate;
pub(crate) mod opinions;
pub(crate) mod serve;

use std::sync::Arc;

use anyhow::Result;
use opinions_service::OpinionService;
use opinions_storage::SqliteStorage;

use crate::config::Config;

pub(crate) async fn open_storage(config: &Config) -> Result<Arc<SqliteStorage>> {
    Ok(Arc::new(SqliteStorage::connect(&config.storage).await?))
}

pub(crate) fn opinion_service(storage: &Arc<SqliteStorage>) -> OpinionService {
    OpinionService::new(storage.clone())
}
