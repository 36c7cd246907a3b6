//! HTTP error handling and response conversion.
//!
//! Errors are mapped to HTTP status codes and a JSON `{ "error": ... }` body.
//! Gate refusals and store rejections are recoverable and carry a message the
//! viewer can act on; infrastructure failures are logged in full and reported
//! with a generic message.

use crate::domain::post::errors::DomainError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request (400).
    BadRequest(String),

    /// Viewer holds no right for the action (403).
    Forbidden(String),

    /// Request data failed validation (400).
    ValidationError(String),

    /// Action refused against the current vote state or by the store (409).
    Conflict(String),

    /// Store unreachable or failing (503).
    ExternalService(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::ExternalService(msg) => write!(f, "External service error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::ExternalService(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Forbidden(_) => "Access denied".into(),
            Self::ValidationError(msg) => msg.clone(),
            Self::Conflict(msg) => msg.clone(),
            Self::ExternalService(_) => "Post store unavailable, please try again".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::SERVICE_UNAVAILABLE => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::FORBIDDEN => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Unauthorized => AppError::Forbidden("Unauthorized".into()),
            DomainError::VoteCapReached => AppError::Conflict("Vote cap already reached".into()),
            DomainError::NoVoteToRetract => AppError::Conflict("No vote to retract".into()),
            DomainError::ActionRejected(reason) => AppError::Conflict(reason),
            DomainError::DispatchUnavailable(msg) => AppError::ExternalService(msg),
        }
    }
}

// === Request Validation Conversion ===

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

// === Body Extraction Conversion ===

/// Unreadable or mistyped JSON bodies get the same `{ "error": ... }` shape as
/// every other failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
