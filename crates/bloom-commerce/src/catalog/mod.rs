//! Product catalog module.
//!
//! Contains the product type and the catalog provider seam.

mod product;
mod provider;

pub use product::Product;
pub use provider::{CatalogProvider, StaticCatalog};
