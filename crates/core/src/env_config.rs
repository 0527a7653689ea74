//! Environment variable parsing for startup configuration.

use std::fmt::Display;
use std::str::FromStr;

/// Parse an environment variable, falling back to `default`.
///
/// An unset or empty variable yields `default` quietly. A value that fails to
/// parse is logged at warn level and also yields `default`, so a typo in the
/// environment never aborts startup.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    let Ok(raw) = std::env::var(var) else {
        return default;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default;
    }
    match trimmed.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
            default
        },
    }
}
