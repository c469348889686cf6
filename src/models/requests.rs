//! Request DTOs for the avatar API
//!
//! Query string of `GET /avatar` and its defaulting/validation rules.

use serde::Deserialize;

use crate::avatar::{AvatarRequest, DEFAULT_SIZE};
use crate::cache::cache_key;
use crate::error::{AvatarError, Result};

pub const DEFAULT_NAME: &str = "User";
pub const DEFAULT_SHAPE: &str = "circle";
pub const DEFAULT_TYPE: &str = "initials";

/// Raw query parameters of `GET /avatar`.
///
/// `size` stays a string here so a malformed value surfaces as a
/// [`AvatarError::Validation`] rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvatarQuery {
    pub name: Option<String>,
    pub shape: Option<String>,
    #[serde(rename = "type")]
    pub avatar_type: Option<String>,
    pub size: Option<String>,
}

/// Query with defaults applied and size validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub name: String,
    pub shape: String,
    pub avatar_type: String,
    pub size: u32,
}

impl AvatarQuery {
    /// Applies defaults and validates the size.
    ///
    /// A size that is not a positive integer is rejected, never coerced.
    pub fn resolve(self) -> Result<ResolvedQuery> {
        let size = match self.size.as_deref() {
            None => DEFAULT_SIZE,
            Some(raw) => parse_size(raw)?,
        };

        Ok(ResolvedQuery {
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            shape: self.shape.unwrap_or_else(|| DEFAULT_SHAPE.to_string()),
            avatar_type: self.avatar_type.unwrap_or_else(|| DEFAULT_TYPE.to_string()),
            size,
        })
    }
}

fn parse_size(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(AvatarError::Validation(format!(
            "size must be a positive integer, got '{}'",
            raw
        ))),
    }
}

impl ResolvedQuery {
    /// Key the rendered avatar is cached under.
    pub fn cache_key(&self) -> String {
        cache_key(&self.name, &self.shape, &self.avatar_type, self.size)
    }

    /// Synthesizer input for this query.
    pub fn to_request(&self) -> AvatarRequest {
        AvatarRequest::from_params(&self.name, &self.shape, &self.avatar_type, self.size)
    }
}
