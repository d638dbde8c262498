//! Order types.

use crate::cart::{Cart, Customization};
use crate::checkout::{ContactInfo, DeliveryInfo};
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    #[default]
    Pending,
    /// Order confirmed and being prepared.
    Confirmed,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// A line in a placed order, snapshotted from the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// Product ordered.
    pub product_id: ProductId,
    /// Product name at order time.
    pub name: String,
    /// Chosen options.
    pub customization: Customization,
    /// Quantity.
    pub quantity: i64,
    /// Unit price at order time.
    pub unit_price: Money,
    /// Unit price times quantity.
    pub total: Money,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Customer contact details.
    pub contact: ContactInfo,
    /// Delivery details.
    pub delivery: DeliveryInfo,
    /// Items in the order.
    pub line_items: Vec<OrderLineItem>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Delivery cost.
    pub delivery_total: Money,
    /// Amount due.
    pub grand_total: Money,
    /// Order status.
    pub status: OrderStatus,
    /// Unix timestamp the order was placed.
    pub placed_at: i64,
}

impl Order {
    /// Build an order from the cart and the collected checkout information.
    pub fn from_cart(cart: &Cart, contact: ContactInfo, delivery: DeliveryInfo) -> Self {
        let line_items: Vec<OrderLineItem> = cart
            .items()
            .iter()
            .map(|item| OrderLineItem {
                product_id: item.product_id,
                name: item.name.clone(),
                customization: item.customization.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                total: item.subtotal(),
            })
            .collect();

        let pricing = cart.pricing();
        let placed_at = current_timestamp();

        Self {
            id: OrderId::generate(),
            order_number: format!("BH-{}", placed_at),
            contact,
            delivery,
            line_items,
            subtotal: pricing.subtotal,
            delivery_total: pricing.delivery_total,
            grand_total: pricing.grand_total,
            status: OrderStatus::Pending,
            placed_at,
        }
    }

    /// Sum of quantities across the order.
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
