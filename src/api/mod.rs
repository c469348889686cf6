//! API Module
//!
//! HTTP handlers, middleware and routing for the avatar service.
//!
//! # Endpoints
//! - `GET /avatar?name&shape&type&size` - Render an avatar as `image/svg+xml`
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod rate_limit;
pub mod routes;

pub use handlers::*;
pub use rate_limit::RateLimiter;
pub use routes::create_router;
