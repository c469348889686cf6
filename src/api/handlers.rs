//! API Handlers
//!
//! HTTP request handlers for the avatar endpoint and the auxiliary
//! stats/health endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::api::rate_limit::RateLimiter;
use crate::avatar::{SvgSynthesizer, Synthesizer};
use crate::cache::AvatarCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{AvatarQuery, HealthResponse, ResolvedQuery, StatsResponse};

/// Content type of every avatar response
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Rendered avatars by request key
    pub cache: Arc<RwLock<AvatarCache>>,
    /// Produces SVG on cache misses
    pub synthesizer: Arc<dyn Synthesizer>,
    /// Per-client request cap, applied as a router layer
    pub limiter: RateLimiter,
}

impl AppState {
    /// Creates a new AppState around the default SVG synthesizer.
    pub fn new(cache: AvatarCache, limiter: RateLimiter) -> Self {
        Self::with_synthesizer(cache, limiter, Arc::new(SvgSynthesizer))
    }

    pub fn with_synthesizer(
        cache: AvatarCache,
        limiter: RateLimiter,
        synthesizer: Arc<dyn Synthesizer>,
    ) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            synthesizer,
            limiter,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            AvatarCache::new(config.eviction_policy()),
            RateLimiter::from_config(config),
        )
    }

    /// Returns the cached SVG for `query`, rendering and storing it on a miss.
    ///
    /// The cache lock is released while rendering, so two concurrent misses
    /// for the same key may both render; the later insert simply overwrites.
    pub async fn render_cached(&self, query: &ResolvedQuery) -> Result<String> {
        let key = query.cache_key();

        // Shared lock first; bounded caches fall through since a hit must
        // refresh LRU order
        let shared = self.cache.read().await.get_shared(&key);
        let cached = match shared {
            Some(svg) => Some(svg),
            None => self.cache.write().await.get(&key),
        };
        if let Some(svg) = cached {
            debug!(key = %key, "Avatar served from cache");
            return Ok(svg);
        }

        let svg = self.synthesizer.render(&query.to_request())?;
        debug!(key = %key, bytes = svg.len(), "Avatar rendered");

        self.cache.write().await.insert(key, svg.clone());
        Ok(svg)
    }
}

/// Handler for GET /avatar
///
/// Renders (or replays from cache) the avatar described by the query string.
pub async fn avatar_handler(
    State(state): State<AppState>,
    Query(query): Query<AvatarQuery>,
) -> Result<Response> {
    let query = query.resolve()?;
    let svg = state.render_cached(&query).await?;

    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg).into_response())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
