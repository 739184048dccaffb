use std::sync::Arc;

use super::services::OrderService;

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    /// Order collaborator, immutable after construction
    pub order_service: Arc<dyn OrderService>,
}

impl AppState {
    pub fn new(order_service: Arc<dyn OrderService>) -> Self {
        Self { order_service }
    }
}
