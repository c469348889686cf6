//! Soda Avatar - deterministic SVG avatars over HTTP
//!
//! The [`avatar`] module turns a display name plus style parameters into
//! byte-stable SVG markup. The remaining modules serve it over HTTP with a
//! request cache and per-client rate limiting.

pub mod api;
pub mod avatar;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use avatar::{build_svg, AvatarRequest, AvatarType, Shape};
pub use config::Config;
pub use error::{AvatarError, Result};
pub use tasks::spawn_maintenance_task;
