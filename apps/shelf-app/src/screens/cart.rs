//! # Cart Screen
//!
//! Line-items with quantity steppers and the cart total.

use serde::Serialize;
use shelf_core::{CartChange, ProductId};

use super::rating_label;
use crate::state::{CartStore, ConfigState};

/// Shown instead of the list when the cart has no items.
pub const EMPTY_CART_TEXT: &str = "Your cart is empty";

/// Header title of the cart screen.
pub const CART_TITLE: &str = "Cart";

/// One line-item, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRow {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub rating_label: String,
    /// Unit price
    pub price_label: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum CartView {
    Empty {
        message: String,
    },
    #[serde(rename_all = "camelCase")]
    Items {
        rows: Vec<CartRow>,
        /// Exact total, formatted to two decimals
        total_label: String,
    },
}

/// View-model of the cart screen.
#[derive(Debug, Clone)]
pub struct CartScreen {
    store: CartStore,
    config: ConfigState,
}

impl CartScreen {
    pub fn new(store: CartStore, config: ConfigState) -> Self {
        CartScreen { store, config }
    }

    pub fn title(&self) -> &str {
        CART_TITLE
    }

    /// Current rows and total, read in one lock.
    pub fn view(&self) -> CartView {
        let symbol = &self.config.currency_symbol;
        self.store.with_cart(|cart| {
            if cart.is_empty() {
                return CartView::Empty {
                    message: EMPTY_CART_TEXT.to_string(),
                };
            }

            let rows = cart
                .items()
                .iter()
                .map(|item| CartRow {
                    id: item.id,
                    title: item.title.clone(),
                    image: item.image.clone(),
                    rating_label: rating_label(&item.rating),
                    price_label: item.price.label(symbol),
                    quantity: item.quantity,
                })
                .collect();

            CartView::Items {
                rows,
                total_label: cart.total().label(symbol),
            }
        })
    }

    pub fn increment(&self, id: ProductId) -> CartChange {
        self.store.increment_quantity(id)
    }

    /// At quantity 1 this removes the row.
    pub fn decrement(&self, id: ProductId) -> CartChange {
        self.store.decrement_quantity(id)
    }
}
