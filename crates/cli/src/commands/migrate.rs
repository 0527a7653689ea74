//! Schema migration command.
//!
//! Opening the storage already applies pending migrations; this command exists
//! so deployments can migrate without starting the server.

use anyhow::Result;

use super::open_storage;
use crate::config::Config;

pub(crate) async fn run(config: &Config) -> Result<()> {
    let storage = open_storage(config).await?;
    let version = storage.migrate().await?;
    println!("Schema version: {version}");
    storage.close().await;
    Ok(())
}
