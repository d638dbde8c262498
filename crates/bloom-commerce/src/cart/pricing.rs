//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Delivery cost (free on every order today).
    pub delivery_total: Money,
    /// Amount due (subtotal + delivery).
    pub grand_total: Money,
    /// Per-line breakdown in display order.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Check if delivery is free.
    pub fn free_delivery(&self) -> bool {
        self.delivery_total.is_zero()
    }
}

/// Pricing for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Unit price times quantity.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_delivery() {
        let pricing = CartPricing {
            subtotal: Money::new(5998),
            delivery_total: Money::zero(),
            grand_total: Money::new(5998),
            line_items: vec![],
        };
        assert!(pricing.free_delivery());
    }
}
