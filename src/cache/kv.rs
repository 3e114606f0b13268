//! Key-value cache capability and its in-memory implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

// == Key Value Cache Trait ==
/// A fast byte cache with per-key expiry.
///
/// `get` must return `Ok(None)` both for keys that were never set and for
/// keys whose TTL has elapsed, with no way to tell the two apart.
/// Connectivity failures are reported as
/// [`crate::error::CacheError::CacheUnavailable`].
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key`, visible for exactly `ttl` from now.
    async fn set_with_ttl(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()>;
}

// == Memory Cache ==
/// Shared handle to an in-process [`CacheStore`].
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<CacheStore>>,
}

impl MemoryCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(max_entries))),
        }
    }

    /// The underlying store, shared with the cleanup task.
    pub fn store(&self) -> Arc<RwLock<CacheStore>> {
        self.store.clone()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Remaining lifetime of a live entry.
    pub async fn ttl(&self, key: &str) -> Option<Duration> {
        self.store.read().await.ttl(key)
    }
}

#[async_trait]
impl KeyValueCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        // Write lock: expired entries are dropped on access
        Ok(self.store.write().await.get(key))
    }

    async fn set_with_ttl(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        self.store.write().await.set(key.to_string(), value, ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_cache_set_and_get() {
        let cache = MemoryCache::new(10);

        cache
            .set_with_ttl("k", b"v".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(cache.get("k").await.unwrap(), Some(b"v".to_vec()));
        assert!(cache.ttl("k").await.is_some());
    }

    #[tokio::test]
    async fn test_memory_cache_expiry_reads_as_absent() {
        let cache = MemoryCache::new(10);

        cache
            .set_with_ttl("k", b"v".to_vec(), Duration::from_millis(50))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(cache.get("k").await.unwrap(), None);
        assert_eq!(cache.stats().await.expirations, 1);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let cache = MemoryCache::new(10);
        let other = cache.clone();

        cache
            .set_with_ttl("k", b"v".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        assert!(other.get("k").await.unwrap().is_some());
    }
}
