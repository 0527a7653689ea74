//! Typed page error for HTTP handlers.
//!
//! Converts service errors into the dedicated 404 and 500 HTML pages.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use opinions_service::ServiceError;

use crate::pages;

/// Error that ends a request with one of the error pages.
///
/// `Internal` logs the real error server-side and shows the client only the
/// generic 500 page. Any insert that failed on the way here has already been
/// rolled back by the storage layer.
#[derive(Debug)]
pub enum PageError {
    /// 404 Not Found: unknown path or opinion id.
    NotFound,
    /// 500 Internal Server Error: empty store or storage failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, pages::not_found()).into_response(),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, pages::internal_error()).into_response()
            },
        }
    }
}

impl From<anyhow::Error> for PageError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for PageError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other.into()),
        }
    }
}
