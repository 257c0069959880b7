//! Common test utilities

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use scaffold_backend::{build_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Service name used by every test router.
pub const TEST_SERVICE_NAME: &str = "Test Backend";

/// Build a router over a fresh, empty store.
pub fn test_router() -> Router {
    build_router(AppState::new(TEST_SERVICE_NAME))
}

/// Send one request through `router` and return the raw response.
#[allow(dead_code)] // Not every integration test file sends raw requests
pub async fn send_raw(router: &Router, request: Request<Body>) -> Response {
    router
        .clone()
        .oneshot(request)
        .await
        .expect("router request failed")
}

/// Send a request with an optional JSON body and decode the JSON response.
#[allow(dead_code)]
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let response = send_raw(router, request).await;
    let status = response.status();
    (status, response_json(response).await)
}

/// Decode a response body as JSON.
#[allow(dead_code)]
pub async fn response_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "response body is not JSON: {err}; body={}",
            String::from_utf8_lossy(&bytes)
        )
    })
}
