//! Migration v1: opinions table

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS opinions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title VARCHAR(128) NOT NULL CHECK (length(trim(title)) > 0),
    text TEXT NOT NULL UNIQUE CHECK (length(trim(text)) > 0),
    source VARCHAR(256),
    timestamp DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
    added_by VARCHAR(64)
);
";
