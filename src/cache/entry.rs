//! Cache Entry Module
//!
//! A rendered avatar plus the timestamps needed for optional expiry.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// One cached SVG document.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Rendered SVG markup
    pub svg: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds), None = lives for the process lifetime
    pub expires_at: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Wraps `svg`, expiring after `ttl_seconds` when given.
    pub fn new(svg: String, ttl_seconds: Option<u64>) -> Self {
        let now = current_timestamp_ms();
        Self {
            svg,
            created_at: now,
            expires_at: ttl_seconds.map(|ttl| now + ttl * 1000),
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches `expires_at`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    fn is_expired_at(&self, now_ms: u64) -> bool {
        self.expires_at.is_some_and(|expires| now_ms >= expires)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
