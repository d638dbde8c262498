//! Product type.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the flower catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current price.
    pub price: Money,
    /// Original price before markdown (for showing discounts).
    pub original_price: Option<Money>,
    /// Full description.
    pub description: String,
    /// Category (e.g., "Bouquets", "Arrangements").
    pub category: String,
    /// Image URLs, first is the primary display image.
    pub images: Vec<String>,
    /// Available color choices.
    pub colors: Vec<String>,
    /// Occasion tags (e.g., "Birthday", "Anniversary").
    pub occasions: Vec<String>,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// Average customer rating (0.0 - 5.0).
    pub rating: f64,
    /// Number of customer reviews.
    pub review_count: i64,
}

impl Product {
    /// Create a new product with the required display fields.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            original_price: None,
            description: String::new(),
            category: String::new(),
            images: Vec::new(),
            colors: Vec::new(),
            occasions: Vec::new(),
            in_stock: true,
            rating: 0.0,
            review_count: 0,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the available colors.
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    /// Set the occasion tags.
    pub fn with_occasions(mut self, occasions: Vec<String>) -> Self {
        self.occasions = occasions;
        self
    }

    /// Add an image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// Mark the product out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// The primary display image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Confirm the product can be added to a cart.
    pub fn ensure_in_stock(&self) -> Result<(), CommerceError> {
        if self.in_stock {
            Ok(())
        } else {
            Err(CommerceError::OutOfStock(self.id))
        }
    }

    /// Check if the product is marked down from an original price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|orig| orig.cents > self.price.cents)
            .unwrap_or(false)
    }

    /// Calculate the markdown percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|orig| {
            if orig.cents > self.price.cents {
                let savings = orig.cents - self.price.cents;
                Some((savings as f64 / orig.cents as f64) * 100.0)
            } else {
                None
            }
        })
    }
}
