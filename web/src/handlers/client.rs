//! Client profile read and upsert.

use super::parse_body;
use crate::envelope::ApiResponse;
use crate::error::ApiError;
use axum::http::StatusCode;
use rental_core::{Client, RentalStore};

/// `GET ?path=client`; `{}` until a profile has been saved.
pub async fn get_client(store: &dyn RentalStore) -> Result<ApiResponse, ApiError> {
    match store.get_client().await? {
        Some(client) => ApiResponse::json(StatusCode::OK, &client),
        None => ApiResponse::json(StatusCode::OK, &serde_json::Map::new()),
    }
}

/// `POST ?path=client`; fields missing from the body are stored as NULL.
pub async fn upsert_client(
    store: &dyn RentalStore,
    body: Option<&str>,
) -> Result<ApiResponse, ApiError> {
    let client: Client = parse_body(body)?;
    store.upsert_client(client).await?;
    ApiResponse::json(StatusCode::OK, &serde_json::json!({ "success": true }))
}
