//! Error types for the request router.
//!
//! Bridges domain and store errors to error envelopes. Every variant knows its
//! HTTP status; server-side faults are logged here and reduced to a generic
//! message unless the router was configured to expose details.

use crate::envelope::ApiResponse;
use axum::http::StatusCode;
use rental_core::{StoreError, ValidationError};
use serde::Serialize;

/// Message sent in place of server-side fault details.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Everything that can go wrong while handling one request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No route for this method and path.
    #[error("Not found")]
    NotFound,

    /// Body is not JSON or has the wrong shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Body parsed but a field value is unusable.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store failed; nothing was committed.
    #[error(transparent)]
    Store(StoreError),

    /// A response payload could not be encoded.
    #[error("failed to encode response: {0}")]
    Serialization(String),
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Rejected(invalid) => Self::Validation(invalid),
            other => Self::Store(other),
        }
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidBody(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert into an error envelope.
    ///
    /// Server errors are logged with their full message. The caller only sees
    /// that message when `expose_details` is set.
    #[must_use]
    pub fn into_response(self, expose_details: bool) -> ApiResponse {
        let status = self.status();
        let detail = self.to_string();

        let message = if status.is_server_error() {
            tracing::error!(status = %status, error = %detail, "Internal server error");
            if expose_details {
                detail.as_str()
            } else {
                INTERNAL_ERROR_MESSAGE
            }
        } else {
            tracing::debug!(status = %status, error = %detail, "Request rejected");
            detail.as_str()
        };

        // Encoding a single borrowed string cannot fail; fall back to a fixed body anyway.
        let body = serde_json::to_string(&ErrorBody { error: message })
            .unwrap_or_else(|_| format!(r#"{{"error":"{INTERNAL_ERROR_MESSAGE}"}}"#));

        ApiResponse::json_text(status, body)
    }
}
