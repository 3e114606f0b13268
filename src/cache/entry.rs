//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with a fixed expiry.

use std::time::{Duration, Instant};

/// Longest lifetime an entry can have; longer TTLs are clamped to it.
pub const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// == Cache Entry ==
/// Serialized document bytes with write-time metadata.
///
/// The expiry is fixed when the entry is written; reading an entry never
/// extends its life.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// When the entry was written
    pub written_at: Instant,
    /// When the entry stops being visible
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry that lives for `ttl` from now.
    ///
    /// TTLs beyond [`MAX_TTL`] are clamped so the expiry always fits the clock.
    pub fn new(value: Vec<u8>, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            written_at: now,
            expires_at: now.checked_add(ttl.min(MAX_TTL)).unwrap_or(now),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its expiry, so a
    /// zero TTL produces an entry that is never observable.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime, zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(b"payload".to_vec(), Duration::from_secs(60));

        assert_eq!(entry.value, b"payload");
        assert_eq!(entry.expires_at - entry.written_at, Duration::from_secs(60));
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(b"payload".to_vec(), Duration::from_millis(50));

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(100));

        assert!(entry.is_expired());
        assert_eq!(entry.ttl_remaining(), Duration::ZERO);
    }

    #[test]
    fn test_ttl_remaining_bounded_by_ttl() {
        let entry = CacheEntry::new(Vec::new(), Duration::from_secs(10));

        let remaining = entry.ttl_remaining();
        assert!(remaining <= Duration::from_secs(10));
        assert!(remaining >= Duration::from_secs(9));
    }

    #[test]
    fn test_huge_ttl_is_clamped() {
        let entry = CacheEntry::new(b"payload".to_vec(), Duration::MAX);

        assert_eq!(entry.expires_at - entry.written_at, MAX_TTL);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(Vec::new(), Duration::ZERO);

        // Expiry equals write time, so the entry is already gone
        assert!(entry.is_expired_at(entry.written_at));
    }
}
