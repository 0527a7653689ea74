//! HTML frontend for film opinions.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]

mod handlers;
pub mod page_error;
mod pages;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use opinions_service::OpinionService;

pub use page_error::PageError;

/// Shared application state for all HTTP handlers.
///
/// Built once at startup and wrapped in `Arc` for sharing across handlers.
pub struct AppState {
    /// Service for reading and submitting opinions
    pub opinions: OpinionService,
}

impl AppState {
    #[must_use]
    pub fn new(opinions: OpinionService) -> Self {
        Self { opinions }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::opinions::index))
        .route("/add", get(handlers::opinions::add_form).post(handlers::opinions::add_submit))
        .route("/opinions/{id}", get(handlers::opinions::detail))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
