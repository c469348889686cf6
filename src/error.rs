//! Error types for the avatar service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Avatar Error Enum ==
/// Unified error type for the synthesizer and the serving layer.
#[derive(Error, Debug)]
pub enum AvatarError {
    /// Name trims to nothing, so no initials can be derived
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A request parameter failed validation (size non-numeric or non-positive)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Element rendering requested without a host able to build elements
    #[error("Element rendering is not available: {0}")]
    HostUnavailable(String),
}

impl AvatarError {
    /// HTTP status the error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AvatarError::InvalidInput(_) | AvatarError::Validation(_) => StatusCode::BAD_REQUEST,
            AvatarError::HostUnavailable(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AvatarError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the avatar service.
pub type Result<T> = std::result::Result<T, AvatarError>;
