//! API response types and error codes
//!
//! - `ApiError`: status + code + message, rendered as `{"error", "code"}`
//! - `error_codes`: Standard error code constants
//! - Response DTOs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::core_types::{OrderId, PaymentId};

// ============================================================================
// Error Response
// ============================================================================

/// Error body returned for every non-2xx response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable reason
    #[schema(example = "cart is empty")]
    pub error: String,
    /// Machine readable code, see `error_codes`
    #[schema(example = 1004)]
    pub code: i32,
}

/// Handler error: carries the HTTP status alongside the body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    pub fn bad_gateway(code: i32, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, code, msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.msg,
                code: self.code,
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

/// 200 OK with a JSON body
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(data)))
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Successful checkout
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    #[schema(example = "order successful")]
    pub message: String,
    #[schema(example = "p1")]
    pub payment_id: PaymentId,
    pub order_id: OrderId,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 2.0)]
    pub total: Decimal,
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const CART_EMPTY: i32 = 1004;

    // Upstream errors (5xxx)
    pub const CART_UNAVAILABLE: i32 = 5021;
    pub const PAYMENT_FAILED: i32 = 5022;
    pub const PAYMENT_DECLINED: i32 = 5023;
}
