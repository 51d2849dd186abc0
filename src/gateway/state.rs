use std::sync::Arc;

use anyhow::Context;

use crate::clients::{CartClient, HttpCartClient, HttpPaymentClient, PaymentClient, http_client};
use crate::config::UpstreamConfig;
use crate::store::OrderStore;

use super::services::{CheckoutService, OrderQueryService};

/// Shared application state
///
/// The order store is the only mutable state shared between requests.
pub struct AppState {
    /// Checkout orchestration (cart -> payment -> store)
    pub checkout: CheckoutService,
    /// Order read path
    pub orders: OrderQueryService,
    /// Order ledger, shared by both services
    pub store: Arc<OrderStore>,
}

impl AppState {
    pub fn new(
        cart: Arc<dyn CartClient>,
        payment: Arc<dyn PaymentClient>,
        upstream: &UpstreamConfig,
    ) -> Self {
        let store = Arc::new(OrderStore::new());
        Self {
            checkout: CheckoutService::new(cart, payment, store.clone(), upstream),
            orders: OrderQueryService::new(store.clone()),
            store,
        }
    }

    /// Wire HTTP clients for cart-service and payment-service
    pub fn from_config(upstream: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = http_client(upstream.timeout()).context("failed to build HTTP client")?;
        let cart = Arc::new(HttpCartClient::new(client.clone(), &upstream.cart_url)?);
        let payment = Arc::new(HttpPaymentClient::new(client, &upstream.payment_url)?);
        Ok(Self::new(cart, payment, upstream))
    }
}
