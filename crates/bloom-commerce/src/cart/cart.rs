//! Cart and line item types.

use crate::cart::{CartPricing, Customization, LineItemPricing};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Display fields are denormalized copies captured at add time, not
/// re-fetched from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub unit_price: Money,
    /// Image URLs at add time.
    pub images: Vec<String>,
    /// Chosen options (possibly empty).
    pub customization: Customization,
    /// Quantity.
    pub quantity: i64,
}

impl LineItem {
    fn from_product(product: &Product, quantity: i64, customization: Customization) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            images: product.images.clone(),
            customization,
            quantity,
        }
    }

    /// Line subtotal (unit price times quantity).
    pub fn subtotal(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// An ordered sequence of cart line items.
///
/// Two line items never share both a product ID and a customization; adds
/// with a matching pair merge into the existing entry. Display order is
/// insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If a line item with the same product ID and customization exists, its
    /// quantity is incremented; otherwise a new line item is appended.
    /// Quantity is taken as given; callers are expected to pass positive
    /// values.
    pub fn add_item(&mut self, product: &Product, quantity: i64, customization: Customization) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id && i.customization == customization)
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items
                .push(LineItem::from_product(product, quantity, customization));
        }
    }

    /// Remove every line item for a product, regardless of customization.
    ///
    /// Removing an absent product is a no-op. Returns whether anything was
    /// removed.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Set the quantity on every line item for a product.
    ///
    /// A quantity of zero or less behaves exactly like `remove_item`. The
    /// quantity is set, not added. Returns whether any line item matched.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        let mut matched = false;
        for item in self.items.iter_mut().filter(|i| i.product_id == product_id) {
            item.quantity = quantity;
            matched = true;
        }
        matched
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all line items.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Find the line item for an exact (product, customization) pair.
    pub fn get_item(
        &self,
        product_id: ProductId,
        customization: &Customization,
    ) -> Option<&LineItem> {
        self.items
            .iter()
            .find(|i| i.product_id == product_id && &i.customization == customization)
    }

    /// Sum of line subtotals.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc.plus(i.subtotal()))
    }

    /// Full pricing breakdown. Delivery is free on every order.
    pub fn pricing(&self) -> CartPricing {
        let line_items = self
            .items
            .iter()
            .map(|item| LineItemPricing {
                product_id: item.product_id,
                unit_price: item.unit_price,
                quantity: item.quantity,
                subtotal: item.subtotal(),
            })
            .collect();

        let subtotal = self.subtotal();
        CartPricing {
            subtotal,
            delivery_total: Money::zero(),
            grand_total: subtotal,
            line_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roses() -> Product {
        Product::new(ProductId::new(1), "Red Roses", Money::from_decimal(29.99))
    }

    fn lilies() -> Product {
        Product::new(ProductId::new(2), "White Lilies", Money::from_decimal(24.99))
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal().amount(), "0.00");
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 2, Customization::new());

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.subtotal().amount(), "59.98");
    }

    #[test]
    fn test_add_same_item_merges() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 2, Customization::new());
        cart.add_item(&roses(), 1, Customization::new());

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.subtotal().amount(), "89.97");
    }

    #[test]
    fn test_repeated_adds_accumulate_into_one_line() {
        let mut cart = Cart::new();
        let customization = Customization::new().with("color", "Red");
        for _ in 0..5 {
            cart.add_item(&roses(), 2, customization.clone());
        }

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 10);
    }

    #[test]
    fn test_distinct_customizations_stay_separate() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 1, Customization::new().with("color", "Red"));
        cart.add_item(&roses(), 1, Customization::new().with("color", "White"));
        cart.add_item(&roses(), 1, Customization::new());

        assert_eq!(cart.unique_item_count(), 3);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_customization_merge_ignores_option_order() {
        let mut cart = Cart::new();
        cart.add_item(
            &roses(),
            1,
            Customization::new().with("color", "Red").with("giftMessage", "hi"),
        );
        cart.add_item(
            &roses(),
            1,
            Customization::new().with("giftMessage", "hi").with("color", "Red"),
        );

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut cart = Cart::new();
        cart.add_item(&lilies(), 1, Customization::new());
        cart.add_item(&roses(), 1, Customization::new());

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["White Lilies", "Red Roses"]);
    }

    #[test]
    fn test_merge_keeps_original_position() {
        let mut cart = Cart::new();
        cart.add_item(&lilies(), 1, Customization::new());
        cart.add_item(&roses(), 1, Customization::new());
        cart.add_item(&lilies(), 2, Customization::new());

        assert_eq!(cart.items()[0].name, "White Lilies");
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_remove_item_drops_all_customizations() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 1, Customization::new().with("color", "Red"));
        cart.add_item(&roses(), 1, Customization::new().with("color", "White"));
        cart.add_item(&lilies(), 1, Customization::new());

        assert!(cart.remove_item(ProductId::new(1)));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.items()[0].name, "White Lilies");
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 1, Customization::new());

        let before = cart.clone();
        assert!(!cart.remove_item(ProductId::new(99)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 3, Customization::new());

        assert!(cart.update_quantity(ProductId::new(1), 1));
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 1, Customization::new());

        assert!(cart.update_quantity(ProductId::new(1), 0));
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 2, Customization::new());

        assert!(cart.update_quantity(ProductId::new(1), -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_applies_to_every_variant() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 1, Customization::new().with("color", "Red"));
        cart.add_item(&roses(), 5, Customization::new().with("color", "White"));

        assert!(cart.update_quantity(ProductId::new(1), 2));
        assert!(cart.items().iter().all(|i| i.quantity == 2));
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 1, Customization::new());

        let before = cart.clone();
        assert!(!cart.update_quantity(ProductId::new(99), 4));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 2, Customization::new());
        cart.add_item(&lilies(), 1, Customization::new());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().amount(), "0.00");
    }

    #[test]
    fn test_count_is_sum_of_quantities() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 2, Customization::new());
        cart.add_item(&lilies(), 3, Customization::new());

        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_get_item_is_customization_precise() {
        let mut cart = Cart::new();
        let red = Customization::new().with("color", "Red");
        let white = Customization::new().with("color", "White");
        cart.add_item(&roses(), 1, red.clone());
        cart.add_item(&roses(), 4, white.clone());

        assert_eq!(cart.get_item(ProductId::new(1), &red).unwrap().quantity, 1);
        assert_eq!(cart.get_item(ProductId::new(1), &white).unwrap().quantity, 4);
        assert!(cart
            .get_item(ProductId::new(1), &Customization::new())
            .is_none());
    }

    #[test]
    fn test_denormalized_price_survives_catalog_changes() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 1, Customization::new());

        // Later catalog price changes do not affect items already in the cart.
        let mut repriced = roses();
        repriced.price = Money::from_decimal(99.99);

        assert_eq!(cart.items()[0].unit_price.amount(), "29.99");
    }

    #[test]
    fn test_pricing_breakdown() {
        let mut cart = Cart::new();
        cart.add_item(&roses(), 2, Customization::new());
        cart.add_item(&lilies(), 1, Customization::new());

        let pricing = cart.pricing();
        assert_eq!(pricing.subtotal.amount(), "84.97");
        assert!(pricing.delivery_total.is_zero());
        assert_eq!(pricing.grand_total, pricing.subtotal);
        assert_eq!(pricing.line_items.len(), 2);
        assert_eq!(pricing.line_items[0].subtotal.amount(), "59.98");
    }

    #[test]
    fn test_serde_roundtrip_preserves_everything() {
        let mut cart = Cart::new();
        cart.add_item(&lilies(), 2, Customization::new().with("color", "White"));
        cart.add_item(&roses(), 1, Customization::new().with("giftMessage", "hi"));

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(cart, back);
        let names: Vec<&str> = back.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["White Lilies", "Red Roses"]);
    }
}
