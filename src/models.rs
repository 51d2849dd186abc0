// models.rs - Cart, payment and order types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core_types::{OrderId, PaymentId, UserId};

// ============================================================
// CART (fetched fresh from cart-service on every checkout)
// ============================================================

/// One line of a user's cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    #[schema(example = "car")]
    pub product_id: String,
    #[schema(example = 2)]
    pub quantity: u32,
}

/// Cart contents as returned by `GET /cart/{user_id}`
///
/// Owned by the checkout call that fetched it; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub user_id: UserId,
    #[serde(default)]
    pub items: Vec<CartLine>,
}

impl CartSnapshot {
    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

// ============================================================
// PAYMENT
// ============================================================

/// Body of `POST /pay`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub user_id: UserId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub source: String,
}

/// Status reported by payment-service
///
/// Any string other than `success` / `failure` is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Success,
    Failure,
    Other(String),
}

impl PaymentStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, PaymentStatus::Success)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Failure => "failure",
            PaymentStatus::Other(s) => s,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "success" => PaymentStatus::Success,
            "failure" => PaymentStatus::Failure,
            _ => PaymentStatus::Other(s),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body returned by `POST /pay`. Authoritative; never reinterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub payment_id: PaymentId,
    pub status: PaymentStatus,
}

// ============================================================
// ORDER (created once after a successful payment, never mutated)
// ============================================================

/// Order status
///
/// Checkout only ever writes `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
}

/// Persisted order record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub order_id: OrderId,
    #[schema(example = "u1")]
    pub user_id: UserId,
    /// Copied from the cart at creation time
    pub items: Vec<CartLine>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 2.0)]
    pub total: Decimal,
    #[schema(example = "p1")]
    pub payment_id: PaymentId,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
