//! Read-through counters.
//!
//! Kept as atomics so concurrent lookups never contend on a lock.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

#[derive(Debug, Default)]
pub(crate) struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    store_fetches: AtomicU64,
    not_found: AtomicU64,
    populates: AtomicU64,
    dropped_populates: AtomicU64,
    degraded_reads: AtomicU64,
    decode_errors: AtomicU64,
}

impl Counters {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_store_fetch(&self) {
        self.store_fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_populate(&self) {
        self.populates.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_dropped_populate(&self) {
        self.dropped_populates.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_degraded_read(&self) {
        self.degraded_reads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_decode_error(&self) {
        self.decode_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> ReadThroughStats {
        ReadThroughStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            store_fetches: self.store_fetches.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            populates: self.populates.load(Ordering::Relaxed),
            dropped_populates: self.dropped_populates.load(Ordering::Relaxed),
            degraded_reads: self.degraded_reads.load(Ordering::Relaxed),
            decode_errors: self.decode_errors.load(Ordering::Relaxed),
        }
    }
}

// == Read Through Stats ==
/// Point-in-time view of the read-through counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadThroughStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that fell through to the document store
    pub misses: u64,
    /// Successful document store lookups
    pub store_fetches: u64,
    /// Store lookups that found no document
    pub not_found: u64,
    /// Cache writes after a miss
    pub populates: u64,
    /// Cache writes that failed and were dropped
    pub dropped_populates: u64,
    /// Cache reads that failed and were treated as misses
    pub degraded_reads: u64,
    /// Cached entries that failed to deserialize
    pub decode_errors: u64,
}

impl ReadThroughStats {
    /// Returns hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
