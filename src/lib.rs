//! Order Service
//!
//! Owns checkout for the demo shop: fetches the user's cart from
//! cart-service, charges payment-service, and records the resulting order
//! in an in-memory ledger.
//!
//! # Modules
//!
//! - [`core_types`] - Identifier types (OrderId, UserId, PaymentId)
//! - [`models`] - Cart, payment and order records
//! - [`clients`] - cart-service / payment-service HTTP clients
//! - [`store`] - Append-only in-memory order ledger
//! - [`clock`] - Non-decreasing UTC clock for `created_at`
//! - [`gateway`] - HTTP surface: router, handlers, services
//! - [`config`] / [`logging`] - YAML config and tracing setup

// Core types - must be first!
pub mod core_types;

pub mod clients;
pub mod clock;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod store;

// Convenient re-exports at crate root
pub use clients::{CartClient, Dependency, DependencyError, PaymentClient};
pub use core_types::{OrderId, PaymentId, UserId};
pub use gateway::services::{CheckoutError, CheckoutResult, CheckoutService, OrderQueryService};
pub use gateway::state::AppState;
pub use models::{
    CartLine, CartSnapshot, Order, OrderStatus, PaymentRequest, PaymentResult, PaymentStatus,
};
pub use store::OrderStore;
