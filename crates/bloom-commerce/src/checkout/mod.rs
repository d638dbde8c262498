//! Checkout module.
//!
//! Contains the multi-step checkout flow, the information it collects, and
//! the resulting orders.

mod flow;
mod info;
mod order;

pub use flow::{CheckoutFlow, CheckoutStep};
pub use info::{ContactInfo, DeliveryInfo, DeliveryWindow};
pub use order::{Order, OrderLineItem, OrderStatus};
