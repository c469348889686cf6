//! Eviction Policy Module

// == Eviction Policy ==
/// Bounds applied to the avatar cache.
///
/// The default policy is unbounded with no expiry: entries live for the
/// whole process and memory grows with the number of distinct requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvictionPolicy {
    /// Maximum number of cached avatars, least recently used evicted first
    pub max_entries: Option<usize>,
    /// Seconds an entry stays valid
    pub ttl_seconds: Option<u64>,
}

impl EvictionPolicy {
    /// No capacity bound and no expiry.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Caps the cache at `max_entries`. Zero removes the cap.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = (max_entries > 0).then_some(max_entries);
        self
    }

    /// Expires entries `ttl_seconds` after insertion. Zero disables expiry.
    pub fn with_ttl(mut self, ttl_seconds: u64) -> Self {
        self.ttl_seconds = (ttl_seconds > 0).then_some(ttl_seconds);
        self
    }

    pub fn is_bounded(&self) -> bool {
        self.max_entries.is_some()
    }

    pub fn expires(&self) -> bool {
        self.ttl_seconds.is_some()
    }
}
