//! In-memory order service
//!
//! Keeps users, carts and orders in concurrent maps. Used by the binary when
//! no external store is configured, and by the HTTP tests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::{DashMap, DashSet};

use super::order::{OrderError, OrderService};
use crate::config::SeedConfig;
use crate::gateway::types::OrderDto;
use crate::models::{CartItem, Order};

pub struct InMemoryOrderService {
    users: DashSet<u64>,
    carts: DashMap<u64, Vec<CartItem>>,
    orders: DashMap<u64, Order>,
    order_id_gen: AtomicU64,
}

impl Default for InMemoryOrderService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryOrderService {
    pub fn new() -> Self {
        Self {
            users: DashSet::new(),
            carts: DashMap::new(),
            orders: DashMap::new(),
            order_id_gen: AtomicU64::new(1),
        }
    }

    /// Build a service pre-populated with the configured users and carts
    pub fn from_seed(seed: &SeedConfig) -> Result<Self, OrderError> {
        let service = Self::new();
        for user in &seed.users {
            service.register_user(user.user_id);
            for item in &user.cart {
                service.add_to_cart(user.user_id, item.clone())?;
            }
        }
        tracing::info!(
            "[SEED] {} users, {} cart lines loaded",
            service.users.len(),
            service.carts.iter().map(|c| c.len()).sum::<usize>()
        );
        Ok(service)
    }

    pub fn register_user(&self, user_id: u64) {
        self.users.insert(user_id);
    }

    /// Add a line to the user's cart, registering the user if needed.
    /// Lines for a product already in the cart are merged; a merge that
    /// overflows the quantity leaves the cart unchanged.
    pub fn add_to_cart(&self, user_id: u64, item: CartItem) -> Result<(), OrderError> {
        self.register_user(user_id);
        let mut cart = self.carts.entry(user_id).or_default();
        match cart.iter_mut().find(|c| c.product_id == item.product_id) {
            Some(existing) => existing
                .merge_quantity(item.quantity)
                .map_err(|e| OrderError::InvalidRequest(e.to_string())),
            None => {
                cart.push(item);
                Ok(())
            }
        }
    }

    /// Snapshot of the user's cart
    pub fn cart(&self, user_id: u64) -> Vec<CartItem> {
        self.carts
            .get(&user_id)
            .map(|c| c.value().clone())
            .unwrap_or_default()
    }

    fn next_order_id(&self) -> u64 {
        self.order_id_gen.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderService for InMemoryOrderService {
    async fn place_order(&self, user_id: u64) -> Result<Order, OrderError> {
        if !self.users.contains(&user_id) {
            return Err(OrderError::NotFound(format!("User not found: {}", user_id)));
        }

        // The order is built and the cart emptied under the cart's entry lock:
        // concurrent placements cannot order the same lines twice, and a
        // rejected cart stays intact.
        let order = {
            let mut cart = match self.carts.get_mut(&user_id) {
                Some(cart) if !cart.is_empty() => cart,
                _ => {
                    return Err(OrderError::InvalidRequest(format!(
                        "Cart is empty for user {}",
                        user_id
                    )));
                }
            };
            let order = Order::from_cart(self.next_order_id(), user_id, &cart).map_err(|e| {
                tracing::warn!("[ORDER] Rejected cart of user {}: {}", user_id, e);
                OrderError::InvalidRequest(e.to_string())
            })?;
            cart.clear();
            order
        };

        tracing::info!(
            "[ORDER] Placed order {} for user {}: {} items, total {}",
            order.order_id,
            user_id,
            order.items.len(),
            order.total_amount
        );
        self.orders.insert(order.order_id, order.clone());

        Ok(order)
    }

    async fn get_order(&self, order_id: u64) -> Result<OrderDto, OrderError> {
        self.orders
            .get(&order_id)
            .map(|o| self.convert_to_dto(&o))
            .ok_or_else(|| OrderError::NotFound(format!("Order not found: {}", order_id)))
    }

    async fn get_orders_by_user_id(&self, user_id: u64) -> Result<Vec<OrderDto>, OrderError> {
        let mut orders: Vec<OrderDto> = self
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .map(|o| self.convert_to_dto(&o))
            .collect();

        if orders.is_empty() {
            return Err(OrderError::NotFound(format!(
                "No orders found for user {}",
                user_id
            )));
        }

        orders.sort_by_key(|o| o.id);
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedUser;
    use rust_decimal::Decimal;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn item(product_id: u64, quantity: u32, cents: i64) -> CartItem {
        CartItem {
            product_id,
            product_name: format!("product-{}", product_id),
            quantity,
            unit_price: Decimal::new(cents, 2),
        }
    }

    #[tokio::test]
    async fn test_place_order_consumes_cart() {
        let svc = InMemoryOrderService::new();
        svc.add_to_cart(7, item(1, 2, 1000)).unwrap();
        svc.add_to_cart(7, item(2, 1, 550)).unwrap();

        let order = svc.place_order(7).await.unwrap();
        assert_eq!(order.order_id, 1);
        assert_eq!(order.user_id, 7);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total_amount, Decimal::new(2550, 2));
        assert!(svc.cart(7).is_empty());

        let fetched = svc.get_order(order.order_id).await.unwrap();
        assert_eq!(fetched, svc.convert_to_dto(&order));
    }

    #[tokio::test]
    async fn test_add_to_cart_merges_same_product() {
        let svc = InMemoryOrderService::new();
        svc.add_to_cart(1, item(9, 1, 100)).unwrap();
        svc.add_to_cart(1, item(9, 4, 100)).unwrap();

        let cart = svc.cart(1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 5);
    }

    #[tokio::test]
    async fn test_place_order_unknown_user() {
        let svc = InMemoryOrderService::new();
        let err = svc.place_order(99).await.unwrap_err();
        assert_eq!(err, OrderError::NotFound("User not found: 99".into()));
    }

    #[tokio::test]
    async fn test_place_order_empty_cart() {
        let svc = InMemoryOrderService::new();
        svc.register_user(3);
        let err = svc.place_order(3).await.unwrap_err();
        assert!(matches!(err, OrderError::InvalidRequest(_)));

        // Cart is gone after the first placement
        svc.add_to_cart(3, item(1, 1, 100)).unwrap();
        svc.place_order(3).await.unwrap();
        assert!(matches!(
            svc.place_order(3).await,
            Err(OrderError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_get_order_not_found() {
        let svc = InMemoryOrderService::new();
        let err = svc.get_order(404).await.unwrap_err();
        assert_eq!(err.to_string(), "Order not found: 404");
    }

    #[tokio::test]
    async fn test_orders_by_user_sorted_and_scoped() {
        let svc = InMemoryOrderService::new();
        for _ in 0..3 {
            svc.add_to_cart(1, item(1, 1, 100)).unwrap();
            svc.place_order(1).await.unwrap();
            svc.add_to_cart(2, item(2, 1, 200)).unwrap();
            svc.place_order(2).await.unwrap();
        }

        let orders = svc.get_orders_by_user_id(1).await.unwrap();
        assert_eq!(orders.len(), 3);
        assert!(orders.iter().all(|o| o.user_id == 1));
        assert!(orders.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_orders_by_user_none_is_not_found() {
        let svc = InMemoryOrderService::new();
        svc.register_user(5);
        let err = svc.get_orders_by_user_id(5).await.unwrap_err();
        assert!(matches!(err, OrderError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_from_seed() {
        let seed = SeedConfig {
            users: vec![
                SeedUser {
                    user_id: 7,
                    cart: vec![item(1, 1, 999)],
                },
                SeedUser {
                    user_id: 8,
                    cart: vec![],
                },
            ],
        };
        let svc = InMemoryOrderService::from_seed(&seed).unwrap();
        assert_eq!(svc.cart(7).len(), 1);
        assert!(matches!(
            svc.place_order(8).await,
            Err(OrderError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_overflowing_total_keeps_cart() {
        let svc = InMemoryOrderService::new();
        let mut line = item(1, 3, 0);
        line.unit_price = Decimal::MAX;
        svc.add_to_cart(7, line.clone()).unwrap();

        let err = svc.place_order(7).await.unwrap_err();
        assert!(matches!(err, OrderError::InvalidRequest(_)));
        assert_eq!(svc.cart(7), vec![line]);
        assert!(matches!(
            svc.get_orders_by_user_id(7).await,
            Err(OrderError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_add_to_cart_quantity_overflow_rejected() {
        let svc = InMemoryOrderService::new();
        svc.add_to_cart(1, item(9, u32::MAX, 100)).unwrap();

        let err = svc.add_to_cart(1, item(9, 1, 100)).unwrap_err();
        assert!(matches!(err, OrderError::InvalidRequest(_)));
        assert_eq!(svc.cart(1)[0].quantity, u32::MAX);
    }

    #[tokio::test]
    async fn test_from_seed_rejects_overflowing_cart() {
        let seed = SeedConfig {
            users: vec![SeedUser {
                user_id: 1,
                cart: vec![item(9, u32::MAX, 100), item(9, 1, 100)],
            }],
        };
        assert!(InMemoryOrderService::from_seed(&seed).is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_placements_order_cart_once() {
        const RACERS: usize = 16;
        let svc = Arc::new(InMemoryOrderService::new());
        svc.add_to_cart(7, item(1, 2, 1000)).unwrap();
        svc.add_to_cart(7, item(2, 1, 500)).unwrap();

        let handles: Vec<_> = (0..RACERS)
            .map(|_| {
                let svc = svc.clone();
                tokio::spawn(async move { svc.place_order(7).await })
            })
            .collect();

        let mut placed = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(order) => {
                    placed += 1;
                    assert_eq!(order.total_amount, Decimal::new(2500, 2));
                }
                Err(OrderError::InvalidRequest(_)) => rejected += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(placed, 1);
        assert_eq!(rejected, RACERS - 1);
        assert_eq!(svc.get_orders_by_user_id(7).await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_users_get_unique_order_ids() {
        const USERS: u64 = 32;
        let svc = Arc::new(InMemoryOrderService::new());
        for user_id in 1..=USERS {
            svc.add_to_cart(user_id, item(user_id, 1, 100)).unwrap();
        }

        let handles: Vec<_> = (1..=USERS)
            .map(|user_id| {
                let svc = svc.clone();
                tokio::spawn(async move { svc.place_order(user_id).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let order = handle.await.unwrap().unwrap();
            assert!(ids.insert(order.order_id), "duplicate id {}", order.order_id);
        }
        assert_eq!(ids.len(), USERS as usize);

        for user_id in 1..=USERS {
            let orders = svc.get_orders_by_user_id(user_id).await.unwrap();
            assert_eq!(orders.len(), 1);
        }
    }
}
