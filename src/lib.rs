//! Read-Through Cache - serves documents from a TTL-bounded cache
//!
//! Lookups consult a key-value cache first and fall back to the document
//! store on a miss, writing what they fetched back into the cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod read_through;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use document::{Album, Document, DocumentId};
pub use error::{CacheError, Result};
pub use read_through::{Lookup, ReadThroughCache, ReadThroughOptions};
pub use tasks::spawn_cleanup_task;
