//! API Handlers
//!
//! HTTP request handlers exposing the read-through cache.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::document::{Album, DocumentId};
use crate::error::{CacheError, Result};
use crate::models::{
    AlbumResponse, BatchItem, BatchRequest, BatchResponse, HealthResponse, IdsResponse,
    StatsResponse,
};
use crate::read_through::{Lookup, ReadThroughCache, ReadThroughOptions, Source, WarmReport};
use crate::store::DocumentStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-through view over the album store
    pub albums: ReadThroughCache<Album>,
    /// Store handle, for id enumeration
    pub store: Arc<dyn DocumentStore<Album>>,
    /// In-memory cache, for stats and the cleanup task
    pub cache: MemoryCache,
}

impl AppState {
    /// Creates a new AppState over the given store and cache.
    pub fn new(
        store: Arc<dyn DocumentStore<Album>>,
        cache: MemoryCache,
        options: ReadThroughOptions,
    ) -> Self {
        let albums = ReadThroughCache::new(store.clone(), Arc::new(cache.clone()), options);
        Self {
            albums,
            store,
            cache,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the in-memory cache with the configured capacity and TTL.
    pub fn from_config(config: &Config, store: Arc<dyn DocumentStore<Album>>) -> Self {
        let cache = MemoryCache::new(config.max_entries);
        Self::new(store, cache, config.read_through_options())
    }
}

/// Handler for GET /albums
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<IdsResponse>> {
    let ids = state.store.list_all_ids().await?;
    Ok(Json(IdsResponse::new(ids)))
}

/// Handler for GET /albums/:id
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AlbumResponse>> {
    let id: DocumentId = id.parse()?;

    match state.albums.get(&id).await? {
        Lookup::Hit(album) => Ok(Json(AlbumResponse::new(id, Source::Cache, album))),
        Lookup::Fetched(album) => Ok(Json(AlbumResponse::new(id, Source::Store, album))),
        Lookup::NotFound => Err(CacheError::NotFound(id.to_string())),
    }
}

/// Handler for POST /albums/batch
///
/// Malformed ids fail in place; every other id is still looked up.
pub async fn batch_handler(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let parsed: Vec<Result<DocumentId>> = req.ids.iter().map(|raw| raw.parse()).collect();
    let valid: Vec<DocumentId> = parsed
        .iter()
        .filter_map(|p| p.as_ref().ok().copied())
        .collect();
    let mut lookups = state.albums.get_many(&valid).await.into_iter();

    // get_many yields exactly one result per valid id, in order
    let results = req
        .ids
        .into_iter()
        .zip(parsed)
        .filter_map(|(raw, parsed)| {
            let result = match parsed {
                Ok(_) => lookups.next()?,
                Err(err) => Err(err),
            };
            Some(BatchItem::from_result(raw, result))
        })
        .collect();

    Ok(Json(BatchResponse { results }))
}

/// Handler for POST /cache/warm
pub async fn warm_handler(State(state): State<AppState>) -> Result<Json<WarmReport>> {
    Ok(Json(state.albums.warm().await?))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache_stats = state.cache.stats().await;
    Json(StatsResponse::new(state.albums.stats(), cache_stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BatchStatus;
    use crate::store::MemoryDocumentStore;
    use std::time::Duration;

    async fn seeded_state() -> (AppState, Vec<DocumentId>) {
        let store = Arc::new(MemoryDocumentStore::new());
        let ids = store.insert_many(Album::samples()).await;
        let state = AppState::new(
            store,
            MemoryCache::new(100),
            ReadThroughOptions::new(Duration::from_secs(60)),
        );
        (state, ids)
    }

    #[tokio::test]
    async fn test_get_handler_miss_then_hit() {
        let (state, ids) = seeded_state().await;

        let first = get_handler(State(state.clone()), Path(ids[0].to_string()))
            .await
            .unwrap();
        assert_eq!(first.source, Source::Store);
        assert_eq!(first.album.title, "Zeit");

        let second = get_handler(State(state), Path(ids[0].to_string()))
            .await
            .unwrap();
        assert_eq!(second.source, Source::Cache);
    }

    #[tokio::test]
    async fn test_get_handler_not_found() {
        let (state, _) = seeded_state().await;

        let result = get_handler(State(state), Path(DocumentId::new().to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_handler_invalid_id() {
        let (state, _) = seeded_state().await;

        let result = get_handler(State(state), Path("nope".to_string())).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_batch_handler_isolates_bad_ids() {
        let (state, ids) = seeded_state().await;
        let req = BatchRequest {
            ids: vec![ids[0].to_string(), "garbage".to_string(), ids[1].to_string()],
        };

        let response = batch_handler(State(state), Json(req)).await.unwrap();
        let statuses: Vec<BatchStatus> = response.results.iter().map(|r| r.status).collect();

        assert_eq!(
            statuses,
            vec![BatchStatus::Fetched, BatchStatus::Error, BatchStatus::Fetched]
        );
        assert_eq!(response.results[1].id, "garbage");
        assert_eq!(response.results[2].album.as_ref().unwrap().artist, "Queen");
    }

    #[tokio::test]
    async fn test_batch_handler_rejects_empty() {
        let (state, _) = seeded_state().await;

        let result = batch_handler(State(state), Json(BatchRequest { ids: Vec::new() })).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_warm_and_stats_handlers() {
        let (state, _) = seeded_state().await;

        let report = warm_handler(State(state.clone())).await.unwrap();
        assert_eq!(report.fetched, 4);

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.read_through.populates, 4);
        assert_eq!(stats.cache.total_entries, 4);
    }

    #[tokio::test]
    async fn test_list_handler() {
        let (state, ids) = seeded_state().await;

        let response = list_handler(State(state)).await.unwrap();
        assert_eq!(response.count, 4);
        assert_eq!(response.ids[0], ids[0].to_string());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
