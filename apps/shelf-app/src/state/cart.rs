//! # Cart Store
//!
//! The one cart of the running application, shared by every screen.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   run() ── CartStore::new() ──┬── clone ──► HomeScreen                  │
//! │                               └── clone ──► CartScreen                  │
//! │                                                                         │
//! │   Clones share one Arc<Mutex<CartState>>. Screens never hold the        │
//! │   CartState itself; they dispatch actions and read snapshots.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is built explicitly and handed to consumers, so every test
//! gets a fresh cart.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shelf_core::{CartAction, CartChange, CartLineItem, CartState, Money, Product, ProductId};
use tracing::debug;

/// Shared handle to the cart state.
///
/// ## Why Mutex?
/// Every operation is a single reducer step, so the lock is held for
/// microseconds. It lets the handle cross into an async UI shell.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Arc<Mutex<CartState>>,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn new() -> Self {
        CartStore::default()
    }

    /// A reducer step can't leave the cart half-updated, so a poisoned
    /// lock still guards a valid cart.
    fn lock(&self) -> MutexGuard<'_, CartState> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies one action to the shared cart.
    pub fn dispatch(&self, action: CartAction) -> CartChange {
        let change = self.lock().apply(action);
        debug!(?change, "Cart action applied");
        change
    }

    /// Adds `product` unless it is already in the cart.
    pub fn add_to_cart(&self, product: &Product, quantity: u32) -> CartChange {
        self.dispatch(CartAction::Add {
            product: product.clone(),
            quantity,
        })
    }

    pub fn increment_quantity(&self, id: ProductId) -> CartChange {
        self.dispatch(CartAction::Increment(id))
    }

    /// Removes the line-item when its quantity is 1.
    pub fn decrement_quantity(&self, id: ProductId) -> CartChange {
        self.dispatch(CartAction::Decrement(id))
    }

    /// Snapshot of the line-items in insertion order.
    pub fn items(&self) -> Vec<CartLineItem> {
        self.lock().items().to_vec()
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.lock().quantity_of(id)
    }

    pub fn total(&self) -> Money {
        self.lock().total()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use shelf_app::state::CartStore;
    ///
    /// let store = CartStore::new();
    /// assert!(store.with_cart(|cart| cart.is_empty()));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        f(&self.lock())
    }
}
