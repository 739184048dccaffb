//! Order Service - the collaborator behind the order handlers
//!
//! Handlers depend on the [`OrderService`] trait only, so any backing store
//! can be plugged in through [`AppState`](crate::gateway::state::AppState).

use async_trait::async_trait;
use thiserror::Error;

use crate::gateway::types::OrderDto;
use crate::models::Order;

/// Order service error
///
/// Closed set of failure kinds. Each kind maps to exactly one HTTP status in
/// the gateway layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// User, order, or order list does not exist
    #[error("{0}")]
    NotFound(String),

    /// Request violates a domain rule (e.g. empty cart)
    #[error("{0}")]
    InvalidRequest(String),

    /// Anything unclassified
    #[error("{0}")]
    Internal(String),
}

/// Order domain operations consumed by the HTTP layer
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Turn the user's cart into a new order
    async fn place_order(&self, user_id: u64) -> Result<Order, OrderError>;

    /// Look up a single order; `NotFound` when absent
    async fn get_order(&self, order_id: u64) -> Result<OrderDto, OrderError>;

    /// All orders of a user; `NotFound` when the user has none
    async fn get_orders_by_user_id(&self, user_id: u64) -> Result<Vec<OrderDto>, OrderError>;

    /// Project a domain order onto its wire shape
    fn convert_to_dto(&self, order: &Order) -> OrderDto {
        OrderDto::from(order)
    }
}
