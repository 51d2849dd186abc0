//! Health check handler

use axum::{Json, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response data
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

/// Health check endpoint
///
/// Liveness only: does not probe cart-service or payment-service.
/// Any method other than GET gets 405 from the router.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service alive", body = HealthResponse, content_type = "application/json"),
        (status = 405, description = "Method not allowed")
    ),
    tag = "System"
)]
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}
