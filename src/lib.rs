//! Shop Orders - order REST API
//!
//! Three endpoints place an order from a user's cart and look orders up,
//! answering with a uniform `{message, data}` envelope.
//!
//! # Modules
//!
//! - [`models`] - Order domain records (Order, OrderItem, CartItem)
//! - [`gateway`] - axum router, handlers, envelope types, order service
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;

// Convenient re-exports at crate root
pub use gateway::services::{InMemoryOrderService, OrderError, OrderService};
pub use gateway::types::{ApiResponse, OrderDto, OrderItemDto};
pub use models::{CartItem, Order, OrderItem, OrderStatus};
