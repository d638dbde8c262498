//! Browse module.
//!
//! In-memory filtering and sorting of the product list, as used by the shop
//! and collection pages.

mod filter;
mod query;

pub use filter::Filter;
pub use query::{BrowseQuery, SortKey};
