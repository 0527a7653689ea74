use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A validation message attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name (`title`, `text`, `source`)
    pub field: &'static str,
    /// Human-readable message shown next to the field
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Submitted opinion data failed validation.
///
/// Carries every field error found, not just the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid opinion: {}", join_errors(.0))]
pub struct ValidationError(pub Vec<FieldError>);

impl ValidationError {
    /// Messages for one field, in the order they were produced.
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0.iter().filter(move |e| e.field == field).map(|e| e.message.as_str())
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_all_field_errors() {
        let err = ValidationError(vec![
            FieldError::new("title", "This field is required."),
            FieldError::new("text", "This field is required."),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid opinion: title: This field is required.; text: This field is required."
        );
    }

    #[test]
    fn messages_for_filters_by_field() {
        let err = ValidationError(vec![
            FieldError::new("title", "a"),
            FieldError::new("source", "b"),
            FieldError::new("title", "c"),
        ]);
        assert_eq!(err.messages_for("title").collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(err.has_field("source"));
        assert!(!err.has_field("text"));
    }
}
