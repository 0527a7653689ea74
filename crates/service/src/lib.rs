//! Service layer for film opinions
//!
//! Centralizes business logic between HTTP/CLI handlers and storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod error;
mod opinion_service;

pub use error::ServiceError;
pub use opinion_service::{pick_offset, OpinionService};
