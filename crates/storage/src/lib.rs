//! Storage layer for film opinions
//!
//! SQLite-based storage through a `sqlx` pool, with versioned schema migrations.

mod error;
mod migrations;
mod sqlite;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;
pub use sqlite::{SqliteStorage, StorageConfig};
pub use traits::OpinionStore;
