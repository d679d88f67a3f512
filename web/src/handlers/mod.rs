//! Request handlers, one module per resource.
//!
//! Data handlers take the store explicitly and return envelopes; the router
//! turns their errors into error envelopes. [`health`] holds the axum health checks.

pub mod catalog;
pub mod client;
pub mod health;
pub mod orders;

use crate::error::ApiError;
use serde::de::DeserializeOwned;

/// Decode a JSON request body.
///
/// A missing or blank body decodes as `{}`, so every field falls back to its
/// default.
pub(crate) fn parse_body<T: DeserializeOwned>(body: Option<&str>) -> Result<T, ApiError> {
    let text = match body.map(str::trim) {
        None | Some("") => "{}",
        Some(text) => text,
    };
    serde_json::from_str(text).map_err(|e| ApiError::InvalidBody(e.to_string()))
}
