//! Persistent, observable cart store for the Bloom Haven storefront.
//!
//! The [`CartStore`] is the single source of truth for cart contents during a
//! session. It rehydrates from an injected [`CartStorage`] backend at
//! construction, persists after every mutation, and notifies subscribers so
//! view code can re-render.
//!
//! Storage failures never abort a mutation: the in-memory cart stays
//! authoritative, the failure is logged, and the next mutation tries to
//! persist again.
//!
//! # Example
//!
//! ```rust,ignore
//! use bloom_commerce::prelude::*;
//! use bloom_store::{CartStore, MemoryStorage};
//!
//! let mut store = CartStore::new(MemoryStorage::new());
//! let roses = Product::new(ProductId::new(1), "Red Roses", Money::from_decimal(29.99));
//!
//! store.add_item(&roses, 2, Customization::new());
//! assert_eq!(store.count(), 2);
//! assert_eq!(store.total(), "59.98");
//! ```

mod error;
mod storage;
mod store;

pub use error::StoreError;
pub use storage::{CartStorage, FileStorage, MemoryStorage};
pub use store::{CartStore, DEFAULT_CART_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CartStorage, CartStore, FileStorage, MemoryStorage, StoreError};
}
