//! Gateway types module
//!
//! ## Submodules
//! - [`request`]: Request bodies
//! - [`response`]: Response DTOs, `ApiError` and error codes

pub mod request;
pub mod response;

pub use request::CheckoutRequest;
pub use response::{ApiError, ApiResult, CheckoutResponse, ErrorResponse, error_codes, ok};
