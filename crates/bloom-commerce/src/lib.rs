//! E-commerce domain types and logic for the Bloom Haven flower storefront.
//!
//! This crate provides the headless domain layer for the storefront:
//!
//! - **Catalog**: Products and the catalog provider seam
//! - **Cart**: Shopping cart with customized line items and pricing
//! - **Browse**: In-memory filtering and sorting of the product list
//! - **Checkout**: Multi-step checkout flow and orders
//!
//! # Example
//!
//! ```rust,ignore
//! use bloom_commerce::prelude::*;
//!
//! let roses = Product::new(ProductId::new(1), "Red Roses", Money::from_decimal(29.99));
//!
//! let mut cart = Cart::new();
//! cart.add_item(&roses, 2, Customization::new());
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.subtotal().amount(), "59.98");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{CatalogProvider, Product, StaticCatalog};

    // Cart
    pub use crate::cart::{Cart, CartPricing, Customization, LineItem, LineItemPricing};

    // Browse
    pub use crate::browse::{BrowseQuery, Filter, SortKey};

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStep, ContactInfo, DeliveryInfo, DeliveryWindow, Order,
        OrderLineItem, OrderStatus,
    };
}
