//! Read-Through Module
//!
//! Resolves document identifiers through a TTL-bounded key-value cache,
//! falling back to the document store on a miss and populating the cache
//! with what the store returned.
//!
//! The cache is never authoritative: an absent key only means "unknown",
//! so missing documents are not cached and entries are never deleted here.
//! Expiry is left entirely to the cache's own clock.

mod stats;

#[cfg(test)]
mod property_tests;
#[cfg(test)]
mod test_doubles;

pub use stats::ReadThroughStats;

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::cache::KeyValueCache;
use crate::document::{Document, DocumentId};
use crate::error::{CacheError, Result};
use crate::store::DocumentStore;
use stats::Counters;

// == Options ==
/// Tuning for a [`ReadThroughCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadThroughOptions {
    /// Lifetime of an entry written after a miss
    pub ttl: Duration,
    /// Deadline for a whole lookup (cache check, store fetch, populate)
    pub timeout: Option<Duration>,
}

impl ReadThroughOptions {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// == Lookup ==
/// Where a returned document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Cache,
    Store,
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<D> {
    /// Served from a live cache entry
    Hit(D),
    /// Fetched from the store after a miss
    Fetched(D),
    /// The store holds no such document
    NotFound,
}

impl<D> Lookup<D> {
    pub fn found(&self) -> bool {
        !matches!(self, Lookup::NotFound)
    }

    pub fn is_cache_hit(&self) -> bool {
        matches!(self, Lookup::Hit(_))
    }

    pub fn source(&self) -> Option<Source> {
        match self {
            Lookup::Hit(_) => Some(Source::Cache),
            Lookup::Fetched(_) => Some(Source::Store),
            Lookup::NotFound => None,
        }
    }

    pub fn document(&self) -> Option<&D> {
        match self {
            Lookup::Hit(document) | Lookup::Fetched(document) => Some(document),
            Lookup::NotFound => None,
        }
    }

    pub fn into_document(self) -> Option<D> {
        match self {
            Lookup::Hit(document) | Lookup::Fetched(document) => Some(document),
            Lookup::NotFound => None,
        }
    }
}

/// Tally of a [`ReadThroughCache::warm`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WarmReport {
    pub requested: usize,
    pub hits: usize,
    pub fetched: usize,
    pub not_found: usize,
    pub failed: usize,
}

// == Read Through Cache ==
/// Serves documents from a key-value cache, reading through to the store
/// on a miss.
///
/// Cheap to clone; clones share the same store, cache and counters. Two
/// concurrent misses on one id may both fetch and both populate, and the
/// last write wins. Documents are immutable, so either copy is correct.
pub struct ReadThroughCache<D: Document> {
    store: Arc<dyn DocumentStore<D>>,
    cache: Arc<dyn KeyValueCache>,
    options: ReadThroughOptions,
    counters: Arc<Counters>,
}

impl<D: Document> Clone for ReadThroughCache<D> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            cache: Arc::clone(&self.cache),
            options: self.options,
            counters: Arc::clone(&self.counters),
        }
    }
}

impl<D: Document> ReadThroughCache<D> {
    pub fn new(
        store: Arc<dyn DocumentStore<D>>,
        cache: Arc<dyn KeyValueCache>,
        options: ReadThroughOptions,
    ) -> Self {
        Self {
            store,
            cache,
            options,
            counters: Arc::new(Counters::default()),
        }
    }

    pub fn options(&self) -> ReadThroughOptions {
        self.options
    }

    pub fn stats(&self) -> ReadThroughStats {
        self.counters.snapshot()
    }

    // == Get ==
    /// Resolves one identifier.
    ///
    /// # Errors
    /// - `StoreUnavailable` when the cache missed and the store failed
    /// - `Decode` when the cached bytes are not a valid document
    /// - `Timeout` when the configured deadline elapsed
    ///
    /// A cache that cannot be reached is treated as a miss, and a failed
    /// cache write is logged and dropped.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn get(&self, id: &DocumentId) -> Result<Lookup<D>> {
        match self.options.timeout {
            Some(limit) => tokio::time::timeout(limit, self.read_through(id))
                .await
                .map_err(|_| CacheError::Timeout(limit))?,
            None => self.read_through(id).await,
        }
    }

    // == Get Many ==
    /// Resolves every identifier independently, concurrently.
    ///
    /// Results line up with `ids`; a failure for one id never affects the
    /// others.
    pub async fn get_many(&self, ids: &[DocumentId]) -> Vec<Result<Lookup<D>>> {
        join_all(ids.iter().map(|id| self.get(id))).await
    }

    // == Warm ==
    /// Reads every document the store knows about through the cache.
    pub async fn warm(&self) -> Result<WarmReport> {
        let ids = self.store.list_all_ids().await?;
        let mut report = WarmReport {
            requested: ids.len(),
            ..WarmReport::default()
        };

        for result in self.get_many(&ids).await {
            match result {
                Ok(Lookup::Hit(_)) => report.hits += 1,
                Ok(Lookup::Fetched(_)) => report.fetched += 1,
                Ok(Lookup::NotFound) => report.not_found += 1,
                Err(_) => report.failed += 1,
            }
        }

        debug!(?report, "cache warm-up finished");
        Ok(report)
    }

    async fn read_through(&self, id: &DocumentId) -> Result<Lookup<D>> {
        let key = id.cache_key();

        match self.cache.get(&key).await {
            Ok(Some(bytes)) => {
                let document = self.decode(&key, &bytes)?;
                self.counters.record_hit();
                debug!("cache hit");
                return Ok(Lookup::Hit(document));
            }
            Ok(None) => debug!("cache miss"),
            Err(err) => {
                self.counters.record_degraded_read();
                warn!(error = %err, "cache read failed, reading from store");
            }
        }
        self.counters.record_miss();

        let Some(document) = self.store.find_by_id(id).await? else {
            self.counters.record_store_fetch();
            self.counters.record_not_found();
            debug!("document not in store");
            return Ok(Lookup::NotFound);
        };
        self.counters.record_store_fetch();

        self.populate(&key, &document).await;
        Ok(Lookup::Fetched(document))
    }

    fn decode(&self, key: &str, bytes: &[u8]) -> Result<D> {
        serde_json::from_slice(bytes).map_err(|source| {
            self.counters.record_decode_error();
            CacheError::Decode {
                key: key.to_string(),
                source,
            }
        })
    }

    /// Writes the document to the cache; failures never reach the caller.
    async fn populate(&self, key: &str, document: &D) {
        let bytes = match serde_json::to_vec(document) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.counters.record_dropped_populate();
                warn!(error = %err, "failed to encode document, skipping cache write");
                return;
            }
        };

        match self.cache.set_with_ttl(key, bytes, self.options.ttl).await {
            Ok(()) => {
                self.counters.record_populate();
                debug!(ttl = ?self.options.ttl, "cache populated");
            }
            Err(err) => {
                self.counters.record_dropped_populate();
                warn!(error = %err, "cache write failed, dropping");
            }
        }
    }
}
