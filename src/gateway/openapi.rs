//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8005/docs`
//! - OpenAPI JSON: `http://localhost:8005/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{CheckoutRequest, CheckoutResponse, ErrorResponse};
use crate::models::{CartLine, Order, OrderStatus};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "1.0.0",
        description = "Checkout orchestration and order history for the demo shop.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8005", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::order::checkout,
        crate::gateway::handlers::order::get_orders,
    ),
    components(
        schemas(
            HealthResponse,
            CheckoutRequest,
            CheckoutResponse,
            ErrorResponse,
            Order,
            OrderStatus,
            CartLine,
        )
    ),
    tags(
        (name = "Orders", description = "Checkout and order history"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
