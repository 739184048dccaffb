//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`
//!
//! Paths are documented under the default `/api/v1` prefix.

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{OrderDto, OrderItemDto};
use crate::models::OrderStatus;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop Orders API",
        version = "1.0.0",
        description = "Place orders from user carts and look them up by order or by user.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::order::get_order_by_id,
        crate::gateway::handlers::order::get_orders_by_user_id,
    ),
    components(
        schemas(HealthResponse, OrderDto, OrderItemDto, OrderStatus)
    ),
    tags(
        (name = "System", description = "Service health"),
        (name = "Orders", description = "Order placement and lookup")
    )
)]
pub struct ApiDoc;
