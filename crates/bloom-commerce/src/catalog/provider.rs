//! Catalog provider seam.
//!
//! Consumers render the shop from `list_products` and product detail pages
//! from `product`. The cart never calls the provider itself; callers hand it
//! fully-formed `Product` data at add time.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Source of product data for the storefront.
pub trait CatalogProvider {
    /// List all products in catalog order.
    fn list_products(&self) -> Result<Vec<Product>, CommerceError>;

    /// Look up a single product by ID.
    fn product(&self, id: ProductId) -> Result<Product, CommerceError>;
}

/// An in-memory catalog over a fixed product list.
///
/// Preserves the order products were loaded in.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Create a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn list_products(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.products.clone())
    }

    fn product(&self, id: ProductId) -> Result<Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CommerceError::ProductNotFound(id))
    }
}
