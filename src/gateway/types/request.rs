//! Request bodies

use serde::Deserialize;
use utoipa::ToSchema;

/// `POST /order/checkout` body
///
/// `user_id` may be absent or null; the checkout service rejects it then.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    #[serde(default)]
    #[schema(example = "u1")]
    pub user_id: Option<String>,
}
