//! Shared constants for film opinions.
//!
//! Column limits live here so the form validator and the schema agree.

/// Maximum length of an opinion title, in characters.
pub const TITLE_MAX_LEN: usize = 128;

/// Maximum length of an opinion source link, in characters.
pub const SOURCE_MAX_LEN: usize = 256;

/// SQLite connection pool: default maximum connections.
pub const DB_POOL_MAX_CONNECTIONS: u32 = 5;

/// SQLite connection pool: default acquire timeout in seconds.
pub const DB_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// How long SQLite waits on a locked database before failing, in seconds.
pub const DB_BUSY_TIMEOUT_SECS: u64 = 5;

/// Flash message shown when the submitted text is already stored.
pub const DUPLICATE_OPINION_MESSAGE: &str = "This opinion was already submitted!";

/// Message for a missing required form field.
pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required.";

/// Flash message shown when a submitted form body cannot be decoded.
pub const UNREADABLE_FORM_MESSAGE: &str = "The form could not be read. Please fill it in again.";
