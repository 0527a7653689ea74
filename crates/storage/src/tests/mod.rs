//! Test utilities and module declarations for storage tests.

use opinions_core::{NewOpinion, OpinionForm};

use crate::SqliteStorage;

#[expect(clippy::unwrap_used, reason = "test code")]
pub async fn create_test_storage() -> SqliteStorage {
    SqliteStorage::in_memory().await.unwrap()
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_opinion(title: &str, text: &str, source: Option<&str>) -> NewOpinion {
    OpinionForm::new(title, text, source.map(ToOwned::to_owned)).validate().unwrap()
}
