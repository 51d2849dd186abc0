//! Checkout Service - converts a user's cart into a persisted order
//!
//! Strictly sequential: fetch cart -> total -> charge -> store. Every failure
//! short-circuits, so a failed checkout never leaves an order behind and
//! nothing is retried or compensated.

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::clients::{CartClient, DependencyError, PaymentClient};
use crate::clock::MonotonicClock;
use crate::config::UpstreamConfig;
use crate::core_types::{OrderId, PaymentId};
use crate::models::{Order, OrderStatus, PaymentRequest, PaymentStatus};
use crate::store::OrderStore;

/// Checkout service error
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Request carried an empty or missing user_id
    #[error("user_id required")]
    MissingUserId,

    /// Sum of quantities in the cart is zero
    #[error("cart is empty")]
    CartEmpty,

    #[error("failed to fetch cart: {0}")]
    CartUnavailable(#[source] DependencyError),

    #[error("payment failed: {0}")]
    PaymentFailed(#[source] DependencyError),

    /// Payment call succeeded but the charge was not accepted
    #[error("payment not successful: {payment_id} returned {status}")]
    PaymentDeclined {
        payment_id: PaymentId,
        status: PaymentStatus,
    },
}

/// Response data for a successful checkout
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutResult {
    pub order_id: OrderId,
    pub payment_id: PaymentId,
    pub total: Decimal,
}

/// Checkout Service - owns the only multi-call flow in the order service
pub struct CheckoutService {
    cart: Arc<dyn CartClient>,
    payment: Arc<dyn PaymentClient>,
    store: Arc<OrderStore>,
    clock: MonotonicClock,
    currency: String,
    payment_source: String,
}

impl CheckoutService {
    pub fn new(
        cart: Arc<dyn CartClient>,
        payment: Arc<dyn PaymentClient>,
        store: Arc<OrderStore>,
        upstream: &UpstreamConfig,
    ) -> Self {
        Self {
            cart,
            payment,
            store,
            clock: MonotonicClock::new(),
            currency: upstream.currency.clone(),
            payment_source: upstream.payment_source.clone(),
        }
    }

    /// Run a checkout for `user_id`
    pub async fn checkout(&self, user_id: &str) -> Result<CheckoutResult, CheckoutError> {
        if user_id.is_empty() {
            return Err(CheckoutError::MissingUserId);
        }
        tracing::info!(user_id, "[CHECKOUT] started");

        // 1. Fetch cart
        let cart = self.cart.fetch_cart(user_id).await.map_err(|e| {
            tracing::warn!(user_id, cause = e.cause(), "[CHECKOUT] cart fetch failed: {}", e);
            CheckoutError::CartUnavailable(e)
        })?;
        if cart.user_id != user_id {
            tracing::warn!(
                user_id,
                cart_user_id = %cart.user_id,
                "[CHECKOUT] cart-service answered for a different user"
            );
        }

        // 2. Placeholder pricing: every unit costs 1
        let quantity = cart.total_quantity();
        if quantity == 0 {
            tracing::info!(user_id, "[CHECKOUT] rejected: cart is empty");
            return Err(CheckoutError::CartEmpty);
        }
        let total = Decimal::from(quantity);

        // 3. Charge
        let request = PaymentRequest {
            user_id: user_id.to_string(),
            amount: total,
            currency: self.currency.clone(),
            source: self.payment_source.clone(),
        };
        let payment = self.payment.charge(&request).await.map_err(|e| {
            tracing::warn!(user_id, cause = e.cause(), "[CHECKOUT] payment call failed: {}", e);
            CheckoutError::PaymentFailed(e)
        })?;
        if !payment.status.is_success() {
            tracing::warn!(
                user_id,
                payment_id = %payment.payment_id,
                status = %payment.status,
                "[CHECKOUT] payment not successful"
            );
            return Err(CheckoutError::PaymentDeclined {
                payment_id: payment.payment_id,
                status: payment.status,
            });
        }

        // 4. Persist
        let order = Order {
            order_id: OrderId::new(),
            user_id: user_id.to_string(),
            items: cart.items,
            total,
            payment_id: payment.payment_id,
            status: OrderStatus::Completed,
            created_at: self.clock.now(),
        };
        let result = CheckoutResult {
            order_id: order.order_id,
            payment_id: order.payment_id.clone(),
            total,
        };
        self.store.append(order);

        tracing::info!(
            user_id,
            order_id = %result.order_id,
            payment_id = %result.payment_id,
            total = %result.total,
            "[CHECKOUT] ✅ order completed"
        );
        Ok(result)
    }
}
