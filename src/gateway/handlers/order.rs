//! Order handlers (create, get by id, list by user)
//!
//! Each handler makes one call into the [`OrderService`](crate::gateway::services::OrderService)
//! and wraps the outcome in the `{message, data}` envelope. Failures are
//! converted through `From<OrderError> for ApiError`; extractor rejections
//! are wrapped the same way so malformed ids still get the envelope.

use std::sync::Arc;

use axum::extract::{
    Path, Query, State,
    rejection::{PathRejection, QueryRejection},
};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, CreateOrderParams, OrderDto, messages, ok};

/// Create order endpoint
///
/// POST {prefix}/orders/order?userId={user_id}
#[utoipa::path(
    post,
    path = "/api/v1/orders/order",
    params(CreateOrderParams),
    responses(
        (status = 200, description = "Order created from the user's cart", body = OrderDto, content_type = "application/json"),
        (status = 400, description = "Cart is empty, totals overflow, or userId missing/malformed"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Unclassified failure")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CreateOrderParams>, QueryRejection>,
) -> ApiResult<OrderDto> {
    let Query(params) = params?;
    let user_id = params.user_id;
    tracing::info!("[TRACE] Create Order: Received from User {}", user_id);

    let order = state
        .order_service
        .place_order(user_id)
        .await
        .map_err(|e| {
            tracing::warn!("[TRACE] Create Order for User {} failed: {}", user_id, e);
            ApiError::from(e)
        })?;
    let dto = state.order_service.convert_to_dto(&order);

    tracing::info!(
        "[TRACE] Create Order {}: Created for User {}",
        dto.id,
        user_id
    );
    ok(messages::ORDER_CREATED, dto)
}

/// Get single order by ID
///
/// GET {prefix}/orders/{order_id}/order
#[utoipa::path(
    get,
    path = "/api/v1/orders/{order_id}/order",
    params(
        ("order_id" = u64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order details", body = OrderDto, content_type = "application/json"),
        (status = 400, description = "Malformed order id"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Unclassified failure")
    ),
    tag = "Orders"
)]
pub async fn get_order_by_id(
    State(state): State<Arc<AppState>>,
    order_id: Result<Path<u64>, PathRejection>,
) -> ApiResult<OrderDto> {
    let Path(order_id) = order_id?;
    tracing::debug!("[TRACE] Get Order {}", order_id);

    match state.order_service.get_order(order_id).await {
        Ok(order) => ok(messages::ORDER_FETCHED, order),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Get all orders of a user
///
/// GET {prefix}/orders/{user_id}/orders
///
/// A user without orders yields 404, not an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/orders/{user_id}/orders",
    params(
        ("user_id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Orders of the user, ascending by id", body = Vec<OrderDto>, content_type = "application/json"),
        (status = 400, description = "Malformed user id"),
        (status = 404, description = "User has no orders"),
        (status = 500, description = "Unclassified failure")
    ),
    tag = "Orders"
)]
pub async fn get_orders_by_user_id(
    State(state): State<Arc<AppState>>,
    user_id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Vec<OrderDto>> {
    let Path(user_id) = user_id?;
    tracing::debug!("[TRACE] Get Orders of User {}", user_id);

    match state.order_service.get_orders_by_user_id(user_id).await {
        Ok(orders) => ok(messages::ORDER_FETCHED, orders),
        Err(e) => ApiError::from(e).into_err(),
    }
}
