//! Shopping cart module.
//!
//! Contains the cart, its line items, customizations, and pricing.

mod cart;
mod customization;
mod pricing;

pub use cart::{Cart, LineItem};
pub use customization::Customization;
pub use pricing::{CartPricing, LineItemPricing};
