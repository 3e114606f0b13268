//! Cache Module
//!
//! The fast side of the read-through cache: the key-value capability the
//! core relies on, plus an in-memory implementation with TTL expiry.

mod entry;
mod kv;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use kv::{KeyValueCache, MemoryCache};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
