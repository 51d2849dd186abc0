//! Gateway Services Layer
//!
//! Business logic behind the HTTP handlers. Handlers stay thin adapters
//! that translate requests and map service errors to status codes.

pub mod checkout;
pub mod order;

pub use checkout::{CheckoutError, CheckoutResult, CheckoutService};
pub use order::{OrderQueryError, OrderQueryService};
