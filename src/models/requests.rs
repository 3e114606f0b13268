//! Request DTOs for the album API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Largest batch accepted by `POST /albums/batch`
pub const MAX_BATCH_SIZE: usize = 1000;

/// Request body for a batch lookup (POST /albums/batch)
///
/// Ids are kept as raw strings so one malformed id fails only its own slot.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    pub ids: Vec<String>,
}

impl BatchRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.ids.is_empty() {
            return Some("Batch must contain at least one id".to_string());
        }
        if self.ids.len() > MAX_BATCH_SIZE {
            return Some(format!(
                "Batch exceeds maximum size of {} ids",
                MAX_BATCH_SIZE
            ));
        }
        None
    }
}
