//! Order domain records
//!
//! These are the records owned by the order service. The HTTP layer never
//! builds them itself; it only receives [`OrderDto`](crate::gateway::types::OrderDto)
//! projections back from the service.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Order amount arithmetic left the representable range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Line total overflows for product {product_id}")]
    LineOverflow { product_id: u64 },
    #[error("Order total overflows")]
    TotalOverflow,
    #[error("Quantity overflows for product {product_id}")]
    QuantityOverflow { product_id: u64 },
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// One line of a placed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: u64,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price at the time the order was placed
    pub price: Decimal,
}

impl OrderItem {
    /// price * quantity
    pub fn line_total(&self) -> Result<Decimal, AmountError> {
        self.price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or(AmountError::LineOverflow {
                product_id: self.product_id,
            })
    }
}

/// A placed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_id: u64,
    pub user_id: u64,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Build a pending order from cart lines. The total is derived from the lines.
    pub fn from_cart(
        order_id: u64,
        user_id: u64,
        cart: &[CartItem],
    ) -> Result<Self, AmountError> {
        let items: Vec<OrderItem> = cart
            .iter()
            .map(|c| OrderItem {
                product_id: c.product_id,
                product_name: c.product_name.clone(),
                quantity: c.quantity,
                price: c.unit_price,
            })
            .collect();
        let mut total_amount = Decimal::ZERO;
        for item in &items {
            total_amount = total_amount
                .checked_add(item.line_total()?)
                .ok_or(AmountError::TotalOverflow)?;
        }

        Ok(Self {
            order_id,
            user_id,
            order_date: Utc::now(),
            total_amount,
            status: OrderStatus::Pending,
            items,
        })
    }
}

/// Cart line waiting to be turned into an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: u64,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl CartItem {
    /// Fold another line for the same product into this one
    pub fn merge_quantity(&mut self, quantity: u32) -> Result<(), AmountError> {
        self.quantity = self
            .quantity
            .checked_add(quantity)
            .ok_or(AmountError::QuantityOverflow {
                product_id: self.product_id,
            })?;
        Ok(())
    }
}
