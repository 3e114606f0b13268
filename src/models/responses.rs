//! Response DTOs for the album API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::document::{Album, DocumentId};
use crate::error::Result;
use crate::read_through::{Lookup, ReadThroughStats, Source};

/// Response body for a single lookup (GET /albums/:id)
#[derive(Debug, Clone, Serialize)]
pub struct AlbumResponse {
    pub id: String,
    /// Whether the album came from the cache or the store
    pub source: Source,
    pub album: Album,
}

impl AlbumResponse {
    pub fn new(id: DocumentId, source: Source, album: Album) -> Self {
        Self {
            id: id.to_string(),
            source,
            album,
        }
    }
}

/// Outcome of one id in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Hit,
    Fetched,
    NotFound,
    Error,
}

/// One slot of a batch response
#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    /// The id exactly as requested
    pub id: String,
    pub status: BatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<Album>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchItem {
    /// Builds the slot for one lookup result.
    pub fn from_result(id: impl Into<String>, result: Result<Lookup<Album>>) -> Self {
        let id = id.into();
        match result {
            Ok(Lookup::Hit(album)) => Self::with_album(id, BatchStatus::Hit, album),
            Ok(Lookup::Fetched(album)) => Self::with_album(id, BatchStatus::Fetched, album),
            Ok(Lookup::NotFound) => Self {
                id,
                status: BatchStatus::NotFound,
                album: None,
                error: None,
            },
            Err(err) => Self {
                id,
                status: BatchStatus::Error,
                album: None,
                error: Some(err.to_string()),
            },
        }
    }

    fn with_album(id: String, status: BatchStatus, album: Album) -> Self {
        Self {
            id,
            status,
            album: Some(album),
            error: None,
        }
    }
}

/// Response body for a batch lookup (POST /albums/batch)
#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    /// Results in request order
    pub results: Vec<BatchItem>,
}

/// Response body for the id listing (GET /albums)
#[derive(Debug, Clone, Serialize)]
pub struct IdsResponse {
    pub ids: Vec<String>,
    pub count: usize,
}

impl IdsResponse {
    pub fn new(ids: Vec<DocumentId>) -> Self {
        Self {
            count: ids.len(),
            ids: ids.iter().map(DocumentId::to_string).collect(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub read_through: ReadThroughStats,
    pub read_through_hit_rate: f64,
    pub cache: CacheStats,
    pub cache_hit_rate: f64,
}

impl StatsResponse {
    pub fn new(read_through: ReadThroughStats, cache: CacheStats) -> Self {
        Self {
            read_through_hit_rate: read_through.hit_rate(),
            cache_hit_rate: cache.hit_rate(),
            read_through,
            cache,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
