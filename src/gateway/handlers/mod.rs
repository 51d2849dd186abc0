//! HTTP handlers

pub mod health;
pub mod order;

pub use health::{HealthResponse, health_check};
pub use order::{checkout, get_orders, get_orders_without_user};

