//! Gateway Services Layer
//!
//! Business logic behind the HTTP handlers. Handlers are thin adapters that
//! delegate to an [`OrderService`] and map its [`OrderError`] to a status.

pub mod memory;
pub mod order;

pub use memory::InMemoryOrderService;
pub use order::{OrderError, OrderService};
