use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored opinion about a film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opinion {
    /// Database-assigned identifier, never reused
    pub id: i64,
    /// Film title (max 128 chars)
    pub title: String,
    /// Opinion text, unique across all opinions
    pub text: String,
    /// Optional link to a longer review
    pub source: Option<String>,
    /// When the opinion was stored (UTC)
    pub timestamp: DateTime<Utc>,
    /// Reserved; no code path writes it
    pub added_by: Option<String>,
}

/// A validated opinion ready for insertion.
///
/// Produced by [`crate::OpinionForm::validate`]; the fields are already trimmed
/// and within their length limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOpinion {
    title: String,
    text: String,
    source: Option<String>,
}

impl NewOpinion {
    pub(crate) fn new(title: String, text: String, source: Option<String>) -> Self {
        Self { title, text, source }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
