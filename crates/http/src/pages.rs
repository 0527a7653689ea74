//! HTML pages embedded at compile time.
//!
//! Templates use `{{ name }}` placeholders, filled in a single pass so that
//! substituted text is never scanned for further placeholders. Every value
//! coming from users goes through [`escape`] first.

use axum::response::Html;
use opinions_core::{Opinion, OpinionForm, ValidationError, SOURCE_MAX_LEN, TITLE_MAX_LEN};

const LAYOUT: &str = include_str!("templates/layout.html");
const OPINION: &str = include_str!("templates/opinion.html");
const ADD_OPINION: &str = include_str!("templates/add_opinion.html");
const NOT_FOUND: &str = include_str!("templates/404.html");
const INTERNAL_ERROR: &str = include_str!("templates/500.html");

pub fn opinion(opinion: &Opinion) -> Html<String> {
    let title = escape(&opinion.title);
    let text = escape(&opinion.text);
    let source = opinion.source.as_deref().map(source_fragment).unwrap_or_default();
    let timestamp = opinion.timestamp.format("%Y-%m-%d %H:%M UTC").to_string();
    let content = fill(
        OPINION,
        &[("title", &title), ("text", &text), ("source", &source), ("timestamp", &timestamp)],
    );
    layout(&title, &content)
}

pub fn add_opinion(
    form: &OpinionForm,
    errors: Option<&ValidationError>,
    flash: Option<&str>,
) -> Html<String> {
    let flash = flash.map(|msg| format!(r#"<div class="flash">{}</div>"#, escape(msg))).unwrap_or_default();
    let field_errors = |field: &str| errors.map(|e| error_list(e, field)).unwrap_or_default();
    let content = fill(
        ADD_OPINION,
        &[
            ("flash", &flash),
            ("title", &escape(&form.title)),
            ("text", &escape(&form.text)),
            ("source", &escape(&form.source)),
            ("title_errors", &field_errors("title")),
            ("text_errors", &field_errors("text")),
            ("source_errors", &field_errors("source")),
            ("title_max", &TITLE_MAX_LEN.to_string()),
            ("source_max", &SOURCE_MAX_LEN.to_string()),
        ],
    );
    layout("Add opinion", &content)
}

pub fn not_found() -> Html<String> {
    layout("Not found", NOT_FOUND)
}

pub fn internal_error() -> Html<String> {
    layout("Server error", INTERNAL_ERROR)
}

fn layout(page_title: &str, content: &str) -> Html<String> {
    Html(fill(LAYOUT, &[("page_title", page_title), ("content", content)]))
}

/// Only http(s) sources become links; anything else is shown as plain text.
fn source_fragment(source: &str) -> String {
    let escaped = escape(source);
    let lower = source.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        format!(
            r#"<p class="source"><a href="{escaped}" target="_blank" rel="noopener noreferrer">{escaped}</a></p>"#
        )
    } else {
        format!(r#"<p class="source">{escaped}</p>"#)
    }
}

fn error_list(errors: &ValidationError, field: &str) -> String {
    let items: String =
        errors.messages_for(field).map(|msg| format!("<li>{}</li>", escape(msg))).collect();
    if items.is_empty() {
        String::new()
    } else {
        format!(r#"<ul class="errors">{items}</ul>"#)
    }
}

/// Replace `{{ name }}` placeholders. Unknown names render as empty.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = after[..end].trim();
        if let Some((_, value)) = vars.iter().find(|(key, _)| *key == name) {
            out.push_str(value);
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
