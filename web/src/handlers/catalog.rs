//! Catalog listing.

use crate::envelope::{ApiRequest, ApiResponse};
use crate::error::ApiError;
use axum::http::StatusCode;
use rental_core::{EquipmentFilter, RentalStore};

/// `GET ?path=equipment[&category=..][&search=..]`
///
/// An absent, empty or `all` category and an absent or empty search leave the
/// catalog unfiltered.
pub async fn list_equipment(
    store: &dyn RentalStore,
    request: &ApiRequest,
) -> Result<ApiResponse, ApiError> {
    let filter = EquipmentFilter::from_params(request.param("category"), request.param("search"));
    let equipment = store.list_equipment(filter).await?;

    tracing::debug!(count = equipment.len(), "Listed equipment");
    ApiResponse::json(StatusCode::OK, &equipment)
}
