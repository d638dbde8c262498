//! Browse query builder.

use crate::browse::Filter;
use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for shop listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Sort by name A-Z.
    #[default]
    NameAsc,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
}

impl SortKey {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::NameAsc => a.name.cmp(&b.name),
            SortKey::PriceAsc => a.price.cmp(&b.price),
            SortKey::PriceDesc => b.price.cmp(&a.price),
            SortKey::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
        }
    }
}

/// A shop browse query: filters plus a sort order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BrowseQuery {
    /// Filters to apply (ANDed together).
    pub filters: Vec<Filter>,
    /// Sort order for the result.
    pub sort: SortKey,
}

impl BrowseQuery {
    /// Create an empty query (everything, sorted by name).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text search.
    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        if !query.is_empty() {
            self.filters.push(Filter::Text(query));
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Check whether a product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Apply the query to a product list, returning the filtered and sorted
    /// view. The sort is stable, so ties keep their catalog order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut result: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        result.sort_by(|a, b| self.sort.compare(a, b));
        result
    }
}
