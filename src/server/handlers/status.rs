use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::{ApiError, AppState};

/// `{"message": ...}` acknowledgment body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{"status": ...}` body of the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[allow(clippy::unused_async)]
pub(in crate::server) async fn root(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("{} is running", state.service_name),
    })
}

#[allow(clippy::unused_async)]
pub(in crate::server) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

#[allow(clippy::unused_async)]
pub(in crate::server) async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not Found")
}
