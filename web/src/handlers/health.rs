//! Health check endpoints.
//!
//! These endpoints are used by load balancers and monitoring systems
//! to verify service health.

use crate::router::RentalRouter;
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

/// Simple health check endpoint (for basic liveness).
///
/// Returns 200 OK to indicate the service is running.
/// This endpoint does NOT check the database.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Readiness report.
#[derive(Debug, Serialize)]
pub struct Readiness {
    /// Whether the service can serve data requests
    pub ready: bool,
    /// Store ping failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Readiness check: pings the store.
///
/// # Status Codes
///
/// - 200 OK: the store answered
/// - 503 Service Unavailable: the store is unreachable
///
/// # Endpoint
///
/// ```text
/// GET /health/ready
/// ```
pub async fn readiness_check(State(router): State<RentalRouter>) -> (StatusCode, Json<Readiness>) {
    match router.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Readiness {
                ready: true,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    ready: false,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_testing::{FailingStore, InMemoryRentalStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_simple_health_check() {
        let (status, body) = health_check().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_ready_with_reachable_store() {
        let router = RentalRouter::new(Arc::new(InMemoryRentalStore::new()));

        let (status, Json(readiness)) = readiness_check(State(router)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(readiness.ready);
        assert!(readiness.error.is_none());
    }

    #[tokio::test]
    async fn test_unready_with_failing_store() {
        let router = RentalRouter::new(Arc::new(FailingStore::default()));

        let (status, Json(readiness)) = readiness_check(State(router)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!readiness.ready);
        assert!(readiness.error.is_some());
    }
}
