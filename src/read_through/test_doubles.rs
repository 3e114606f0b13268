//! Substitute collaborators for exercising the read-through protocol.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::cache::{KeyValueCache, MemoryCache};
use crate::document::{Album, DocumentId};
use crate::error::{CacheError, Result};
use crate::store::{DocumentStore, MemoryDocumentStore};

/// Memory store that counts lookups and can slow down chosen ids.
pub(crate) struct CountingStore {
    inner: MemoryDocumentStore<Album>,
    fetches: AtomicUsize,
    delays: HashMap<DocumentId, Duration>,
}

impl CountingStore {
    pub(crate) async fn seeded(albums: Vec<Album>) -> (Self, Vec<DocumentId>) {
        let inner = MemoryDocumentStore::new();
        let ids = inner.insert_many(albums).await;
        let store = Self {
            inner,
            fetches: AtomicUsize::new(0),
            delays: HashMap::new(),
        };
        (store, ids)
    }

    pub(crate) fn delay(&mut self, id: DocumentId, by: Duration) {
        self.delays.insert(id, by);
    }

    pub(crate) fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore<Album> for CountingStore {
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Album>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(id) {
            tokio::time::sleep(*delay).await;
        }
        self.inner.find_by_id(id).await
    }

    async fn list_all_ids(&self) -> Result<Vec<DocumentId>> {
        self.inner.list_all_ids().await
    }
}

/// Store whose every call fails.
pub(crate) struct UnavailableStore;

#[async_trait]
impl DocumentStore<Album> for UnavailableStore {
    async fn find_by_id(&self, _id: &DocumentId) -> Result<Option<Album>> {
        Err(CacheError::StoreUnavailable("connection refused".to_string()))
    }

    async fn list_all_ids(&self) -> Result<Vec<DocumentId>> {
        Err(CacheError::StoreUnavailable("connection refused".to_string()))
    }
}

/// Memory cache with switchable read and write failures.
#[derive(Clone)]
pub(crate) struct FlakyCache {
    inner: MemoryCache,
    fail_reads: bool,
    fail_writes: bool,
}

impl FlakyCache {
    pub(crate) fn unavailable() -> Self {
        Self {
            inner: MemoryCache::new(100),
            fail_reads: true,
            fail_writes: true,
        }
    }

    pub(crate) fn failing_writes() -> Self {
        Self {
            inner: MemoryCache::new(100),
            fail_reads: false,
            fail_writes: true,
        }
    }

    pub(crate) fn inner(&self) -> &MemoryCache {
        &self.inner
    }
}

#[async_trait]
impl KeyValueCache for FlakyCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        if self.fail_reads {
            return Err(CacheError::CacheUnavailable("connection reset".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set_with_ttl(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        if self.fail_writes {
            return Err(CacheError::CacheUnavailable("connection reset".to_string()));
        }
        self.inner.set_with_ttl(key, value, ttl).await
    }
}
