//! Product filters.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A predicate over products.
///
/// List-valued filters match when any listed value matches (OR within a
/// filter); a query ANDs its filters together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Match a single category.
    Category(String),
    /// Match any of several categories.
    Categories(Vec<String>),
    /// Match products offering any of the given colors.
    Colors(Vec<String>),
    /// Match products tagged with any of the given occasions.
    Occasions(Vec<String>),
    /// Match products priced within the range (inclusive).
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Match only in-stock products.
    InStock,
    /// Match products rated at least this highly.
    MinRating(f64),
    /// Case-insensitive text search over name, description, and category.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(category: impl Into<String>) -> Self {
        Filter::Category(category.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        Filter::InStock
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(category) => product.category == *category,
            Filter::Categories(categories) => categories.contains(&product.category),
            Filter::Colors(colors) => product.colors.iter().any(|c| colors.contains(c)),
            Filter::Occasions(occasions) => {
                product.occasions.iter().any(|o| occasions.contains(o))
            }
            Filter::PriceRange { min, max } => {
                min.map_or(true, |m| product.price >= m) && max.map_or(true, |m| product.price <= m)
            }
            Filter::InStock => product.in_stock,
            Filter::MinRating(min) => product.rating >= *min,
            Filter::Text(query) => {
                let query = query.to_lowercase();
                product.name.to_lowercase().contains(&query)
                    || product.description.to_lowercase().contains(&query)
                    || product.category.to_lowercase().contains(&query)
            }
        }
    }
}
