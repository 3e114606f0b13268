//! Document identifiers and their cache-key encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CacheError;

// == Document Id ==
/// Opaque, globally unique document identifier.
///
/// The canonical string form (hyphenated lowercase UUID) doubles as the
/// cache key and always parses back to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Issues a fresh time-ordered identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// The key under which this document is cached.
    pub fn cache_key(&self) -> String {
        self.to_string()
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for DocumentId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for DocumentId {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CacheError::InvalidRequest(
                "Document id cannot be empty".to_string(),
            ));
        }
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| CacheError::InvalidRequest(format!("Invalid document id '{}': {}", s, e)))
    }
}
