//! Migration v2: index opinions by timestamp

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS ix_opinions_timestamp ON opinions (timestamp);
";
