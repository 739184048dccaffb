//! Order wire types
//!
//! `OrderDto` is what leaves the service boundary; the domain `Order` never
//! reaches the client directly.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{Order, OrderItem, OrderStatus};

/// Order line as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    #[schema(example = 1001)]
    pub product_id: u64,
    #[schema(example = "Mechanical keyboard")]
    pub product_name: String,
    #[schema(example = 2)]
    pub quantity: u32,
    /// Unit price, decimal string
    #[schema(value_type = String, example = "49.90")]
    pub price: Decimal,
}

/// Order as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    #[schema(example = 42)]
    pub id: u64,
    #[schema(example = 7)]
    pub user_id: u64,
    pub order_date: DateTime<Utc>,
    /// Sum of line totals, decimal string
    #[schema(value_type = String, example = "99.80")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub items: Vec<OrderItemDto>,
}

impl From<&OrderItem> for OrderItemDto {
    fn from(item: &OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name.clone(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

impl From<&Order> for OrderDto {
    fn from(order: &Order) -> Self {
        Self {
            id: order.order_id,
            user_id: order.user_id,
            order_date: order.order_date,
            total_amount: order.total_amount,
            status: order.status,
            items: order.items.iter().map(OrderItemDto::from).collect(),
        }
    }
}

/// Query string of `POST /orders/order`
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateOrderParams {
    /// Owner of the cart to turn into an order
    #[serde(rename = "userId")]
    pub user_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CartItem;

    #[test]
    fn test_dto_projection_camel_case() {
        let cart = vec![CartItem {
            product_id: 5,
            product_name: "Desk lamp".to_string(),
            quantity: 3,
            unit_price: Decimal::new(1250, 2),
        }];
        let order = Order::from_cart(42, 7, &cart).unwrap();
        let json = serde_json::to_value(OrderDto::from(&order)).unwrap();

        assert_eq!(json["id"], 42);
        assert_eq!(json["userId"], 7);
        assert_eq!(json["totalAmount"], "37.50");
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["items"][0]["productName"], "Desk lamp");
        assert_eq!(json["items"][0]["price"], "12.50");
        assert!(json["orderDate"].is_string());
    }
}
