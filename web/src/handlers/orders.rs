//! Order listing and placement.

use super::parse_body;
use crate::envelope::ApiResponse;
use crate::error::ApiError;
use axum::http::StatusCode;
use rental_core::{Clock, ContractNumber, PlaceOrder, RentalStore};
use serde::Deserialize;

/// Body of `POST ?path=order`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceOrderRequest {
    /// Catalog ids to rent; unknown ids are skipped
    pub equipment_ids: Vec<i64>,
    /// Rental start, `YYYY-MM-DD`
    pub start_date: String,
    /// Rental end, `YYYY-MM-DD`
    pub end_date: String,
}

/// `GET ?path=orders`, newest first.
pub async fn list_orders(store: &dyn RentalStore) -> Result<ApiResponse, ApiError> {
    let orders = store.list_orders().await?;
    ApiResponse::json(StatusCode::OK, &orders)
}

/// `POST ?path=order`
///
/// One contract number is generated per request and shared by every created
/// order. Dates are only checked once an id matches a catalog row, so a
/// request naming no known equipment succeeds with zero orders.
pub async fn place_order(
    store: &dyn RentalStore,
    clock: &dyn Clock,
    body: Option<&str>,
) -> Result<ApiResponse, ApiError> {
    let request: PlaceOrderRequest = parse_body(body)?;
    let contract_number = ContractNumber::generate(clock.now());

    let command = PlaceOrder::new(
        contract_number,
        request.equipment_ids,
        &request.start_date,
        &request.end_date,
    );

    let receipt = store.place_order(command).await?;
    tracing::debug!(
        contract_number = %receipt.contract_number,
        orders_created = receipt.orders_created,
        skipped = receipt.skipped_equipment_ids.len(),
        "Placement receipt issued"
    );

    ApiResponse::json(StatusCode::CREATED, &receipt)
}
