//! The cart store.

use crate::{CartStorage, StoreError};
use bloom_commerce::cart::{Cart, Customization, LineItem};
use bloom_commerce::catalog::Product;
use bloom_commerce::ids::ProductId;
use tracing::warn;

/// Storage key carried over from the original storefront.
pub const DEFAULT_CART_KEY: &str = "bloom-haven-cart";

type Subscriber = Box<dyn Fn(&Cart)>;

/// Single source of truth for cart contents during a session.
///
/// The store owns the [`Cart`]; consumers mutate it only through these
/// operations and read the committed state freely. Every mutation applies
/// in memory first, then persists synchronously and notifies subscribers.
/// A storage failure is logged and swallowed: the mutation still succeeds
/// and the next one retries the write.
pub struct CartStore<S: CartStorage> {
    cart: Cart,
    storage: S,
    key: String,
    subscribers: Vec<Subscriber>,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store over the default cart key, rehydrating any previously
    /// persisted state.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_CART_KEY)
    }

    /// Create a store over a specific key.
    ///
    /// Unreadable storage or malformed persisted state yields an empty cart;
    /// both are warnings, never failures.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = match storage.read(&key) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(cart) => cart,
                Err(e) => {
                    warn!(key = %key, error = %e, "discarding malformed persisted cart");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "cart storage unavailable, starting empty");
                Cart::new()
            }
        };

        Self {
            cart,
            storage,
            key,
            subscribers: Vec::new(),
        }
    }

    /// Add a product to the cart, merging with an existing line item that
    /// has the same product ID and customization.
    pub fn add_item(&mut self, product: &Product, quantity: i64, customization: Customization) {
        self.cart.add_item(product, quantity, customization);
        self.commit();
    }

    /// Remove every line item for a product, regardless of customization.
    /// Removing an absent product is a no-op.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let removed = self.cart.remove_item(product_id);
        if removed {
            self.commit();
        }
        removed
    }

    /// Set the quantity on every line item for a product; a quantity of zero
    /// or less removes them instead.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        let changed = self.cart.update_quantity(product_id, quantity);
        if changed {
            self.commit();
        }
        changed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.commit();
    }

    /// Sum of quantities across all line items; 0 for an empty cart.
    pub fn count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Cart total as a fixed-point two-decimal string; "0.00" for an empty
    /// cart.
    pub fn total(&self) -> String {
        self.cart.subtotal().amount()
    }

    /// The line items in display order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// The committed cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Register a listener invoked after every committed mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&Cart) + 'static) {
        self.subscribers.push(Box::new(listener));
    }

    /// Persist the current cart, ignoring (but logging) failures.
    fn commit(&mut self) {
        if let Err(e) = self.persist() {
            warn!(key = %self.key, error = %e, "failed to persist cart, keeping in-memory state");
        }
        for listener in &self.subscribers {
            listener(&self.cart);
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        let payload = serde_json::to_string(&self.cart)?;
        self.storage.write(&self.key, &payload)
    }
}
