//! Cache Module
//!
//! In-memory cache of rendered avatars keyed by request parameters, with an
//! optional capacity bound (LRU) and optional TTL.

mod entry;
mod key;
mod lru;
mod policy;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::{cache_key, KEY_SEPARATOR};
pub use lru::LruOrder;
pub use policy::EvictionPolicy;
pub use stats::CacheStats;
pub use store::AvatarCache;
