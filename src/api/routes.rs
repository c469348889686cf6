//! API Routes
//!
//! Configures the Axum router with the avatar endpoint and its middleware.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{avatar_handler, health_handler, stats_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /avatar` - Render an avatar as SVG
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Rate limiting: per-client token bucket, innermost so 429s still get CORS headers
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/avatar", get(avatar_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler));

    state
        .limiter
        .apply(routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
