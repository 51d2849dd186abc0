//! Order-related handlers (checkout, order history)

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::gateway::services::{CheckoutError, OrderQueryError};
use crate::models::Order;

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, CheckoutRequest, CheckoutResponse, ErrorResponse, error_codes, ok,
};

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::MissingUserId => {
                ApiError::bad_request("invalid request body; user_id required")
            }
            CheckoutError::CartEmpty => ApiError::new(
                StatusCode::BAD_REQUEST,
                error_codes::CART_EMPTY,
                "cart is empty",
            ),
            CheckoutError::CartUnavailable(_) => {
                ApiError::bad_gateway(error_codes::CART_UNAVAILABLE, "failed to fetch cart")
            }
            CheckoutError::PaymentFailed(_) => {
                ApiError::bad_gateway(error_codes::PAYMENT_FAILED, "payment failed")
            }
            CheckoutError::PaymentDeclined { .. } => {
                ApiError::bad_gateway(error_codes::PAYMENT_DECLINED, "payment not successful")
            }
        }
    }
}

impl From<OrderQueryError> for ApiError {
    fn from(err: OrderQueryError) -> Self {
        match err {
            OrderQueryError::MissingUserId => ApiError::bad_request("user_id required"),
        }
    }
}

/// Checkout endpoint
///
/// POST /order/checkout
///
/// The body is decoded by hand so a missing content type, malformed JSON
/// and a missing `user_id` all produce the same 400.
#[utoipa::path(
    post,
    path = "/order/checkout",
    request_body(content = CheckoutRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Order created", body = CheckoutResponse),
        (status = 400, description = "Missing user_id or empty cart", body = ErrorResponse),
        (status = 502, description = "Cart or payment service failed", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<CheckoutResponse> {
    let req: CheckoutRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("[CHECKOUT] undecodable body: {}", e);
        ApiError::from(CheckoutError::MissingUserId)
    })?;
    let user_id = req.user_id.unwrap_or_default();

    let result = state.checkout.checkout(&user_id).await?;

    ok(CheckoutResponse {
        message: "order successful".to_string(),
        payment_id: result.payment_id,
        order_id: result.order_id,
        total: result.total,
    })
}

/// Order history endpoint
///
/// GET /order/{user_id}
#[utoipa::path(
    get,
    path = "/order/{user_id}",
    params(("user_id" = String, Path, description = "User whose orders to list")),
    responses(
        (status = 200, description = "Orders oldest first, empty if none", body = [Order]),
        (status = 400, description = "Empty user_id", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_orders(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Vec<Order>> {
    let orders = state.orders.get_orders(&user_id)?;
    ok(orders)
}

/// GET /order/ - path with an empty user segment
pub async fn get_orders_without_user() -> ApiError {
    OrderQueryError::MissingUserId.into()
}
