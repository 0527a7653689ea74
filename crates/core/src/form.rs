//! Validation of submitted opinion forms.

use serde::Deserialize;

use crate::constants::{REQUIRED_FIELD_MESSAGE, SOURCE_MAX_LEN, TITLE_MAX_LEN};
use crate::error::{FieldError, ValidationError};
use crate::opinion::NewOpinion;

/// Raw opinion form input as submitted by the browser.
///
/// Every field defaults to empty so a missing field shows up as a validation
/// message instead of an extractor rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OpinionForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source: String,
}

impl OpinionForm {
    pub fn new(title: impl Into<String>, text: impl Into<String>, source: Option<String>) -> Self {
        Self { title: title.into(), text: text.into(), source: source.unwrap_or_default() }
    }

    /// Check every field and return the normalized record, or all field errors.
    ///
    /// Surrounding whitespace is trimmed first. A blank `source` counts as absent.
    pub fn validate(&self) -> Result<NewOpinion, ValidationError> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(FieldError::new("title", REQUIRED_FIELD_MESSAGE));
        } else if let Some(err) = check_length("title", title, TITLE_MAX_LEN) {
            errors.push(err);
        }

        let text = self.text.trim();
        if text.is_empty() {
            errors.push(FieldError::new("text", REQUIRED_FIELD_MESSAGE));
        }

        let source = Some(self.source.trim()).filter(|s| !s.is_empty());
        if let Some(err) = source.and_then(|s| check_length("source", s, SOURCE_MAX_LEN)) {
            errors.push(err);
        }

        if !errors.is_empty() {
            return Err(ValidationError(errors));
        }
        Ok(NewOpinion::new(title.to_owned(), text.to_owned(), source.map(ToOwned::to_owned)))
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Option<FieldError> {
    let len = value.chars().count();
    (len > max).then(|| FieldError::new(field, format!("Field must be between 1 and {max} characters long.")))
}
