//! API Routes
//!
//! Configures the Axum router with all album endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    batch_handler, get_handler, health_handler, list_handler, stats_handler, warm_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /albums` - List all album ids
/// - `GET /albums/:id` - Read one album through the cache
/// - `POST /albums/batch` - Read many albums through the cache
/// - `POST /cache/warm` - Read every stored album through the cache
/// - `GET /stats` - Read-through and cache statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/albums", get(list_handler))
        .route("/albums/batch", post(batch_handler))
        .route("/albums/:id", get(get_handler))
        .route("/cache/warm", post(warm_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
