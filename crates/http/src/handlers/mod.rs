pub mod opinions;

use crate::PageError;

/// Fallback for every unrouted path.
pub async fn not_found() -> PageError {
    PageError::NotFound
}
