//! Error types for the read-through cache
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the read-through cache and its collaborators.
///
/// A missing document is not an error for the read-through core; it is
/// reported as [`crate::read_through::Lookup::NotFound`]. `NotFound` and
/// `InvalidRequest` exist for the HTTP surface and the in-memory cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Document store unreachable or failing
    #[error("Document store unavailable: {0}")]
    StoreUnavailable(String),

    /// Key-value cache unreachable or rejecting the operation
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    /// Cached bytes did not deserialize into a document
    #[error("Failed to decode cache entry '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The read-through deadline elapsed
    #[error("Read-through timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Document not found
    #[error("Document not found: {0}")]
    NotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::StoreUnavailable(_) | CacheError::CacheUnavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            CacheError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            CacheError::Decode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, CacheError>;
