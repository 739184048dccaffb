//! Gateway types module
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: Unified `{message, data}` envelope
//! - [`OrderDto`]: Order projection returned to clients
//!
//! ## Input Types
//! - [`CreateOrderParams`]: Query string of the create-order route
//!
//! ## Submodules
//! - [`order`]: Order wire types
//! - [`response`]: Envelope, error mapping and fixed messages

pub mod order;
pub mod response;

// Re-export commonly used types at module root
pub use order::{CreateOrderParams, OrderDto, OrderItemDto};
pub use response::{ApiError, ApiResponse, ApiResult, messages, ok};
