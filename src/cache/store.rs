//! Avatar Cache Store Module
//!
//! Maps request keys to rendered SVG, applying the configured eviction policy.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::stats::CacheCounters;
use crate::cache::{CacheEntry, CacheStats, EvictionPolicy, LruOrder};

// == Avatar Cache ==
/// Request-key cache of rendered avatars.
///
/// Purely an optimisation: a miss is always answered by rendering again.
#[derive(Debug, Default)]
pub struct AvatarCache {
    /// Rendered documents by cache key
    entries: HashMap<String, CacheEntry>,
    /// Recency order, only maintained when a capacity bound is set
    lru: LruOrder,
    stats: CacheCounters,
    policy: EvictionPolicy,
}

impl AvatarCache {
    // == Constructor ==
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruOrder::new(),
            stats: CacheCounters::default(),
            policy,
        }
    }

    /// Cache that keeps every entry for the process lifetime.
    pub fn unbounded() -> Self {
        Self::new(EvictionPolicy::unbounded())
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    // == Get ==
    /// Returns the cached SVG for `key`, recording a hit or a miss.
    ///
    /// Expired entries are dropped and reported as misses.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let expired = match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) => entry.is_expired(),
        };

        if expired {
            self.remove(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        if self.policy.is_bounded() {
            self.lru.touch(key);
        }
        self.entries.get(key).map(|entry| entry.svg.clone())
    }

    /// Hit path usable under a shared lock.
    ///
    /// Only answers when no recency order has to be updated and the entry is
    /// live. `None` means "take the exclusive path"; nothing is recorded then.
    pub fn get_shared(&self, key: &str) -> Option<String> {
        if self.policy.is_bounded() {
            return None;
        }
        let entry = self.entries.get(key).filter(|entry| !entry.is_expired())?;
        self.stats.record_hit();
        Some(entry.svg.clone())
    }

    // == Insert ==
    /// Stores `svg` under `key`, overwriting any previous value.
    ///
    /// When the cache is full the least recently used entry is evicted first.
    pub fn insert(&mut self, key: String, svg: String) {
        if let Some(max_entries) = self.policy.max_entries {
            let is_overwrite = self.entries.contains_key(&key);
            while !is_overwrite && self.entries.len() >= max_entries {
                let Some(oldest) = self.lru.pop_oldest() else {
                    break;
                };
                self.entries.remove(&oldest);
                self.stats.record_eviction();
                debug!(key = %oldest, "Evicted least recently used avatar");
            }
            self.lru.touch(&key);
        }

        self.entries
            .insert(key, CacheEntry::new(svg, self.policy.ttl_seconds));
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        if self.policy.is_bounded() {
            self.lru.remove(key);
        }
    }

    // == Cleanup Expired ==
    /// Drops every expired entry, returning how many were removed.
    pub fn cleanup_expired(&mut self) -> usize {
        if !self.policy.expires() {
            return 0;
        }

        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        expired_keys.len()
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
