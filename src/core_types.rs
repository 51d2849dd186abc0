//! Core types used throughout the service
//!
//! Identifiers shared by the store, the checkout flow and the HTTP layer.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User ID - opaque string owned by the user service.
///
/// The order service never validates it beyond "non-empty".
pub type UserId = String;

/// Payment ID - opaque, assigned by the payment service.
pub type PaymentId = String;

/// Order ID - random 128-bit identifier, unique for the process lifetime.
///
/// # Constraints:
/// - **Immutable**: assigned once when the order is created
/// - **Never reused**: v4 UUIDs, no counter to wrap or reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(example = "3f1c1b8e-8d62-4a5e-9a57-5f0d2a1c7e44")]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh order ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
