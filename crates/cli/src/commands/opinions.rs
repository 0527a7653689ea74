use anyhow::{bail, Result};
use opinions_core::{OpinionForm, DUPLICATE_OPINION_MESSAGE};
use opinions_service::ServiceError;

use super::{open_storage, opinion_service};
use crate::config::Config;

pub(crate) async fn run_count(config: &Config) -> Result<()> {
    let storage = open_storage(config).await?;
    let count = opinion_service(&storage).count().await?;
    println!("{count}");
    storage.close().await;
    Ok(())
}

pub(crate) async fn run_get(config: &Config, id: i64) -> Result<()> {
    let storage = open_storage(config).await?;
    match opinion_service(&storage).get_opinion(id).await {
        Ok(opinion) => println!("{}", serde_json::to_string_pretty(&opinion)?),
        Err(ServiceError::NotFound(_)) => println!("Opinion not found: {id}"),
        Err(e) => return Err(e.into()),
    }
    storage.close().await;
    Ok(())
}

pub(crate) async fn run_random(config: &Config) -> Result<()> {
    let storage = open_storage(config).await?;
    let result = opinion_service(&storage).random_opinion().await;
    storage.close().await;
    match result {
        Ok(opinion) => println!("{}", serde_json::to_string_pretty(&opinion)?),
        Err(ServiceError::EmptyStore) => bail!("No opinions stored yet"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub(crate) async fn run_add(
    config: &Config,
    title: String,
    text: String,
    source: Option<String>,
) -> Result<()> {
    let storage = open_storage(config).await?;
    let form = OpinionForm::new(title, text, source);
    let result = opinion_service(&storage).add_opinion(&form).await;
    storage.close().await;
    match result {
        Ok(opinion) => println!("{}", serde_json::to_string_pretty(&opinion)?),
        Err(ServiceError::Validation(errors)) => bail!("{errors}"),
        Err(ServiceError::Duplicate) => bail!(DUPLICATE_OPINION_MESSAGE),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
