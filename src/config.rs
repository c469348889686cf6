//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::EvictionPolicy;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind
    pub host: String,
    /// HTTP server port
    pub port: u16,
    /// Maximum cached avatars, 0 = unbounded
    pub cache_max_entries: usize,
    /// Seconds a cached avatar stays valid, 0 = never expires
    pub cache_ttl: u64,
    /// Background maintenance interval in seconds
    pub cleanup_interval: u64,
    /// Requests allowed per client per window
    pub rate_limit_max: u32,
    /// Rate limit window length in seconds
    pub rate_limit_window: u64,
    /// Key clients by the first `X-Forwarded-For` entry instead of the peer address
    pub trust_proxy: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` - Bind address (default: 0.0.0.0)
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `CACHE_MAX_ENTRIES` - Cache capacity, 0 for unbounded (default: 0)
    /// - `CACHE_TTL` - Cache entry lifetime in seconds, 0 for none (default: 0)
    /// - `CLEANUP_INTERVAL` - Maintenance frequency in seconds (default: 60)
    /// - `RATE_LIMIT_MAX` - Requests per window per client (default: 100)
    /// - `RATE_LIMIT_WINDOW` - Window length in seconds (default: 60)
    /// - `TRUST_PROXY` - Honour `X-Forwarded-For` (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env_or("PORT", defaults.port),
            cache_max_entries: env_or("CACHE_MAX_ENTRIES", defaults.cache_max_entries),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            rate_limit_max: env_or("RATE_LIMIT_MAX", defaults.rate_limit_max),
            rate_limit_window: env_or("RATE_LIMIT_WINDOW", defaults.rate_limit_window),
            trust_proxy: env_or("TRUST_PROXY", defaults.trust_proxy),
        }
    }

    /// Eviction policy for the avatar cache.
    pub fn eviction_policy(&self) -> EvictionPolicy {
        EvictionPolicy::unbounded()
            .with_max_entries(self.cache_max_entries)
            .with_ttl(self.cache_ttl)
    }
}

/// Parses `key` from the environment, falling back on absence or parse failure.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cache_max_entries: 0,
            cache_ttl: 0,
            cleanup_interval: 60,
            rate_limit_max: 100,
            rate_limit_window: 60,
            trust_proxy: false,
        }
    }
}
