//! Envelope dispatch.
//!
//! [`RentalRouter`] maps `(method, path)` pairs onto handlers and converts
//! every outcome, success or failure, into an [`ApiResponse`].

use crate::envelope::{ApiRequest, ApiResponse};
use crate::error::ApiError;
use crate::handlers::{catalog, client, orders};
use rental_core::{Clock, RentalStore, SystemClock};
use std::fmt;
use std::sync::Arc;
use tracing::Instrument;

/// A resolved route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// CORS preflight, any path
    Preflight,
    /// `GET equipment`
    ListEquipment,
    /// `GET orders`
    ListOrders,
    /// `GET client`
    GetClient,
    /// `POST order`
    PlaceOrder,
    /// `POST client`
    UpsertClient,
}

impl Route {
    /// Resolve a method and path, `None` when nothing matches.
    #[must_use]
    pub fn resolve(method: &str, path: &str) -> Option<Self> {
        match (method.to_ascii_uppercase().as_str(), path) {
            ("OPTIONS", _) => Some(Self::Preflight),
            ("GET", "equipment") => Some(Self::ListEquipment),
            ("GET", "orders") => Some(Self::ListOrders),
            ("GET", "client") => Some(Self::GetClient),
            ("POST", "order") => Some(Self::PlaceOrder),
            ("POST", "client") => Some(Self::UpsertClient),
            _ => None,
        }
    }
}

/// Routes request envelopes to the store.
///
/// Cheap to clone; the store and clock are shared.
///
/// # Example
///
/// ```
/// use rental_web::{ApiRequest, RentalRouter};
/// use rental_testing::{InMemoryRentalStore, fixtures};
/// use std::sync::Arc;
///
/// # tokio_test::block_on(async {
/// let store = InMemoryRentalStore::with_catalog(fixtures::sample_catalog());
/// let router = RentalRouter::new(Arc::new(store));
///
/// let response = router.handle(ApiRequest::new("GET").with_path("equipment")).await;
/// assert_eq!(response.status_code, 200);
/// # });
/// ```
#[derive(Clone)]
pub struct RentalRouter {
    store: Arc<dyn RentalStore>,
    clock: Arc<dyn Clock>,
    expose_error_details: bool,
}

impl RentalRouter {
    /// Create a router over `store` using the system clock
    #[must_use]
    pub fn new(store: Arc<dyn RentalStore>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            expose_error_details: false,
        }
    }

    /// Replace the clock used for contract numbers
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Send raw store error text to callers instead of a generic message
    #[must_use]
    pub const fn expose_error_details(mut self, expose: bool) -> Self {
        self.expose_error_details = expose;
        self
    }

    /// The underlying store
    #[must_use]
    pub fn store(&self) -> &dyn RentalStore {
        self.store.as_ref()
    }

    /// Handle one request. Never fails: errors become error envelopes.
    pub async fn handle(&self, request: ApiRequest) -> ApiResponse {
        let span = tracing::debug_span!(
            "rental_request",
            method = %request.http_method,
            path = %request.path(),
        );

        async {
            let response = match self.dispatch(&request).await {
                Ok(response) => response,
                Err(e) => e.into_response(self.expose_error_details),
            };
            tracing::debug!(status = response.status_code, "Request handled");
            response
        }
        .instrument(span)
        .await
    }

    /// Error envelope for a request that never reached dispatch, such as a
    /// body the transport could not decode.
    #[must_use]
    pub fn reject(&self, error: ApiError) -> ApiResponse {
        error.into_response(self.expose_error_details)
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let route =
            Route::resolve(&request.http_method, request.path()).ok_or(ApiError::NotFound)?;
        let body = request.body.as_deref();

        match route {
            Route::Preflight => Ok(ApiResponse::preflight()),
            Route::ListEquipment => catalog::list_equipment(self.store(), request).await,
            Route::ListOrders => orders::list_orders(self.store()).await,
            Route::GetClient => client::get_client(self.store()).await,
            Route::PlaceOrder => orders::place_order(self.store(), self.clock.as_ref(), body).await,
            Route::UpsertClient => client::upsert_client(self.store(), body).await,
        }
    }
}

impl fmt::Debug for RentalRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RentalRouter")
            .field("expose_error_details", &self.expose_error_details)
            .finish_non_exhaustive()
    }
}
