//! Rate Limiting Layer
//!
//! Per-client token bucket from `tower_governor`, keyed by peer address or,
//! behind a trusted proxy, by the forwarded client address.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use governor::middleware::StateInformationMiddleware;
use tower_governor::{
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
    GovernorLayer,
};
use tracing::{info, warn};

use crate::config::Config;

type PeerConfig = GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;
type ForwardedConfig = GovernorConfig<SmartIpKeyExtractor, StateInformationMiddleware>;

// == Rate Limiter ==
/// Request cap per client.
///
/// A client may burst `max_requests` at once; one request is refilled every
/// `window / max_requests`. A zero cap or window disables limiting.
#[derive(Clone)]
pub enum RateLimiter {
    Disabled,
    /// Keyed on the socket peer address
    PeerIp(Arc<PeerConfig>),
    /// Keyed on `X-Forwarded-For`/`X-Real-Ip`/`Forwarded`, then the peer
    Forwarded(Arc<ForwardedConfig>),
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration, trust_proxy: bool) -> Self {
        if max_requests == 0 || window.is_zero() {
            return Self::Disabled;
        }
        let refill = window / max_requests;

        let limiter = if trust_proxy {
            GovernorConfigBuilder::default()
                .key_extractor(SmartIpKeyExtractor)
                .use_headers()
                .period(refill)
                .burst_size(max_requests)
                .finish()
                .map(|config| Self::Forwarded(Arc::new(config)))
        } else {
            GovernorConfigBuilder::default()
                .use_headers()
                .period(refill)
                .burst_size(max_requests)
                .finish()
                .map(|config| Self::PeerIp(Arc::new(config)))
        };

        limiter.unwrap_or_else(|| {
            warn!(max_requests, ?window, "Unusable rate limit settings, limiting disabled");
            Self::Disabled
        })
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.rate_limit_max,
            Duration::from_secs(config.rate_limit_window),
            config.trust_proxy,
        )
    }

    /// Limiter that lets every request through.
    pub fn disabled() -> Self {
        Self::Disabled
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Wraps every route of `router` in the limiting layer.
    ///
    /// Rejected requests get 429 with `retry-after`; accepted ones carry
    /// `x-ratelimit-limit` and `x-ratelimit-remaining`.
    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        match self {
            Self::Disabled => {
                info!("Rate limiting disabled");
                router
            }
            Self::PeerIp(config) => router.layer(GovernorLayer {
                config: config.clone(),
            }),
            Self::Forwarded(config) => router.layer(GovernorLayer {
                config: config.clone(),
            }),
        }
    }
}
