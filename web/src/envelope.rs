//! Request and response envelopes.
//!
//! The router speaks a small HTTP-like envelope rather than a concrete HTTP
//! server type, so the same routing logic serves the axum transport, function
//! platforms that hand over a JSON event, and in-process tests.

use crate::error::ApiError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Headers attached to every non-preflight response.
const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

/// An incoming request.
///
/// Field names follow the common function-platform event shape
/// (`httpMethod`, `queryStringParameters`, `body`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    /// HTTP method; `GET` when absent
    #[serde(default = "default_method")]
    pub http_method: String,

    /// Query parameters; `path` selects the resource
    #[serde(default, deserialize_with = "nullable_map")]
    pub query_string_parameters: HashMap<String, String>,

    /// Raw request body
    #[serde(default)]
    pub body: Option<String>,
}

fn default_method() -> String {
    "GET".to_string()
}

/// Platforms send `null` instead of `{}` when there is no query string.
fn nullable_map<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<HashMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApiRequest {
    /// Build a request with the given method and no parameters
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            http_method: method.into(),
            ..Self::default()
        }
    }

    /// Add a query parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_string_parameters.insert(key.into(), value.into());
        self
    }

    /// Set the `path` query parameter
    #[must_use]
    pub fn with_path(self, path: impl Into<String>) -> Self {
        self.with_param("path", path)
    }

    /// Set the raw body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Query parameter by name
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query_string_parameters.get(key).map(String::as_str)
    }

    /// The selected resource, empty when no `path` was given
    #[must_use]
    pub fn path(&self) -> &str {
        self.param("path").unwrap_or_default()
    }
}

/// An outgoing response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// HTTP status code
    pub status_code: u16,

    /// Response headers
    pub headers: BTreeMap<String, String>,

    /// Response body, JSON text or empty
    pub body: String,

    /// Always `false`; bodies are never binary
    pub is_base64_encoded: bool,
}

impl ApiResponse {
    /// JSON response with the CORS origin header.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if `payload` cannot be encoded.
    pub fn json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(Self::json_text(status, body))
    }

    /// JSON response from an already encoded body
    #[must_use]
    pub fn json_text(status: StatusCode, body: String) -> Self {
        let headers = [("Content-Type", "application/json"), ALLOW_ORIGIN]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            status_code: status.as_u16(),
            headers,
            body,
            is_base64_encoded: false,
        }
    }

    /// Empty `200` answer to a CORS preflight.
    #[must_use]
    pub fn preflight() -> Self {
        let headers = [
            ALLOW_ORIGIN,
            (
                "Access-Control-Allow-Methods",
                "GET, POST, PUT, DELETE, OPTIONS",
            ),
            ("Access-Control-Allow-Headers", "Content-Type"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            status_code: StatusCode::OK.as_u16(),
            headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    /// Header value by exact name
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the decode error if the body is not valid JSON.
    pub fn json_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
