//! Core types for film opinions
//!
//! This crate contains domain types and form validation shared across all other crates.

mod constants;
mod env_config;
mod error;
mod form;
mod opinion;

pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use form::OpinionForm;
pub use opinion::{NewOpinion, Opinion};
