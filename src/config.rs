//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::read_through::ReadThroughOptions;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in seconds for entries populated on a miss
    pub cache_ttl: u64,
    /// Read-through deadline in milliseconds, 0 = no deadline
    pub fetch_timeout_ms: u64,
    /// Maximum number of entries the in-memory cache can hold
    pub max_entries: usize,
    /// Background cleanup task interval in seconds, 0 is treated as 1
    pub cleanup_interval: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Seed the in-memory document store with the sample albums
    pub seed_sample_albums: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - TTL for populated entries (default: 60)
    /// - `FETCH_TIMEOUT_MS` - Read-through deadline, 0 disables (default: 0)
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds, at least 1 (default: 1)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SEED_SAMPLE_ALBUMS` - Seed sample data at startup (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: env_or("CACHE_TTL_SECS", defaults.cache_ttl),
            fetch_timeout_ms: env_or("FETCH_TIMEOUT_MS", defaults.fetch_timeout_ms),
            max_entries: env_or("MAX_ENTRIES", defaults.max_entries),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            seed_sample_albums: env_or("SEED_SAMPLE_ALBUMS", defaults.seed_sample_albums),
        }
    }

    /// Interval between cleanup sweeps, never shorter than one second.
    pub fn cleanup_period(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval.max(1))
    }

    /// Builds the read-through options described by this configuration.
    pub fn read_through_options(&self) -> ReadThroughOptions {
        let options = ReadThroughOptions::new(Duration::from_secs(self.cache_ttl));
        match self.fetch_timeout_ms {
            0 => options,
            ms => options.with_timeout(Duration::from_millis(ms)),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 60,
            fetch_timeout_ms: 0,
            max_entries: 1000,
            cleanup_interval: 1,
            server_port: 3000,
            seed_sample_albums: true,
        }
    }
}
