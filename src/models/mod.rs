//! Request and Response models for the avatar API
//!
//! This module defines the DTOs used for query extraction and JSON bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{AvatarQuery, ResolvedQuery, DEFAULT_NAME, DEFAULT_SHAPE, DEFAULT_TYPE};
pub use responses::{HealthResponse, StatsResponse};
