use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::error::ServiceError;
use crate::models::HealthResponse;

pub mod chat;
pub mod questions;

/// GET /health - liveness probe, reachable without a credential
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            version: "v1".to_string(),
        }),
    )
}

pub async fn not_found() -> ServiceError {
    ServiceError::NotFound
}

pub async fn method_not_allowed() -> ServiceError {
    ServiceError::MethodNotAllowed
}
