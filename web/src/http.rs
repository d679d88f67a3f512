//! axum transport.
//!
//! Any request to `/` or `/api` becomes an [`ApiRequest`]; the resulting
//! [`ApiResponse`] is written back verbatim. Health checks live beside it.

use crate::envelope::{ApiRequest, ApiResponse};
use crate::error::ApiError;
use crate::handlers::health::{health_check, readiness_check};
use crate::router::RentalRouter;
use axum::{
    Router,
    body::{Body, Bytes},
    extract::{Query, State},
    http::{HeaderName, HeaderValue, Method, StatusCode},
    response::Response,
    routing::{any, get},
};
use std::collections::HashMap;
use tower_http::trace::TraceLayer;

/// Build the HTTP application.
///
/// # Routes
///
/// | Path | Method | Handler |
/// |---|---|---|
/// | `/`, `/api` | any | envelope router |
/// | `/health` | GET | liveness |
/// | `/health/ready` | GET | store ping |
pub fn app(router: RentalRouter) -> Router {
    Router::new()
        .route("/", any(handle_envelope))
        .route("/api", any(handle_envelope))
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(router)
}

async fn handle_envelope(
    State(router): State<RentalRouter>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let body = match String::from_utf8(body.to_vec()) {
        Ok(body) => body,
        Err(e) => {
            return into_http_response(router.reject(ApiError::InvalidBody(e.to_string())));
        }
    };

    let request = ApiRequest {
        http_method: method.as_str().to_string(),
        query_string_parameters: params,
        body: (!body.is_empty()).then_some(body),
    };

    into_http_response(router.handle(request).await)
}

/// Convert a response envelope into an HTTP response.
///
/// Headers that are not valid HTTP are dropped with a warning.
#[must_use]
pub fn into_http_response(envelope: ApiResponse) -> Response {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut response = Response::new(Body::from(envelope.body));
    *response.status_mut() = status;

    for (name, value) in &envelope.headers {
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().insert(name, value);
            }
            _ => tracing::warn!(header = %name, "Dropping invalid response header"),
        }
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::http::{Request, header};
    use rental_testing::{InMemoryRentalStore, fixtures, test_clock};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> (InMemoryRentalStore, Router) {
        let store = InMemoryRentalStore::with_catalog(fixtures::sample_catalog());
        let router = RentalRouter::new(Arc::new(store.clone())).with_clock(Arc::new(test_clock()));
        (store, app(router))
    }

    async fn read_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).expect("JSON body")
    }

    #[tokio::test]
    async fn test_get_equipment_over_http() {
        let (_, app) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api?path=equipment&search=crane")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let body = read_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Tower Crane Liebherr");
    }

    #[tokio::test]
    async fn test_post_order_at_root() {
        let (store, app) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/?path=order")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "equipmentIds": [2, 3],
                            "startDate": "2025-03-01",
                            "endDate": "2025-03-05"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = read_json(response).await;
        assert_eq!(body["contractNumber"], "А-2025-0101000000");
        assert_eq!(store.orders().len(), 2);
    }

    #[tokio::test]
    async fn test_non_utf8_body_gets_error_envelope() {
        let (store, app) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api?path=order")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(vec![0xff, 0xfe, b'{']))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let body = read_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body")
        );
        assert!(store.orders().is_empty());
    }

    #[tokio::test]
    async fn test_preflight_over_http() {
        let (_, app) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api?path=client")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type"
        );
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn test_delete_over_http_is_not_found() {
        let (_, app) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api?path=client")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(response).await, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn test_health_routes() {
        let (_, app) = test_app();

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["ready"], true);
    }

    #[test]
    fn test_invalid_envelope_header_dropped() {
        let mut envelope = ApiResponse::json_text(StatusCode::OK, "{}".to_string());
        envelope
            .headers
            .insert("Bad Header".to_string(), "x".to_string());

        let response = into_http_response(envelope);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().len(), 2);
    }
}
