//! HTTP handlers
//!
//! - [`order`]: create / get / list orders
//! - [`health`]: liveness probe

pub mod health;
pub mod order;

pub use health::{HealthResponse, health_check};
pub use order::{create_order, get_order_by_id, get_orders_by_user_id};
