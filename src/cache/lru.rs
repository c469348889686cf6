//! LRU Order Module
//!
//! Recency order of cache keys, used when a capacity bound is configured.

use std::collections::VecDeque;

// == LRU Order ==
/// Keys ordered by last use: front = most recent, back = least recent.
#[derive(Debug, Default)]
pub struct LruOrder {
    keys: VecDeque<String>,
}

impl LruOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as just used.
    pub fn touch(&mut self, key: &str) {
        self.remove(key);
        self.keys.push_front(key.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        self.keys.retain(|k| k != key);
    }

    /// Pops the least recently used key.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.keys.pop_back()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[cfg(test)]
    fn oldest(&self) -> Option<&str> {
        self.keys.back().map(String::as_str)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut lru = LruOrder::new();
        lru.touch("Ada|circle|initials|64");
        lru.touch("Zoe|square|emoji|32");

        assert_eq!(lru.len(), 2);
        assert_eq!(lru.oldest(), Some("Ada|circle|initials|64"));
    }

    #[test]
    fn test_touch_refreshes_key() {
        let mut lru = LruOrder::new();
        lru.touch("a");
        lru.touch("b");
        lru.touch("c");
        lru.touch("a");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.pop_oldest().as_deref(), Some("b"));
        assert_eq!(lru.pop_oldest().as_deref(), Some("c"));
        assert_eq!(lru.pop_oldest().as_deref(), Some("a"));
        assert_eq!(lru.pop_oldest(), None);
    }

    #[test]
    fn test_remove() {
        let mut lru = LruOrder::new();
        lru.touch("a");
        lru.touch("b");
        lru.remove("a");
        lru.remove("missing");

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.oldest(), Some("b"));
    }
}
