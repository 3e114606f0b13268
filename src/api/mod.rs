//! API Module
//!
//! HTTP handlers and routing for the album read-through API.
//!
//! # Endpoints
//! - `GET /albums` - List all album ids
//! - `GET /albums/:id` - Read one album through the cache
//! - `POST /albums/batch` - Read many albums through the cache
//! - `POST /cache/warm` - Read every stored album through the cache
//! - `GET /stats` - Read-through and cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
