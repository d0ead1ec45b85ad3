//! # Cart Reducer
//!
//! The cart state and the only three ways to change it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Event              CartAction               Cart State Change       │
//! │  ────────              ──────────               ─────────────────       │
//! │                                                                         │
//! │  "Add to Bag" ───────► Add { product, 1 } ────► items.push(item)        │
//! │                                                  (no-op if present)     │
//! │                                                                         │
//! │  "+" ────────────────► Increment(id) ─────────► items[i].qty += 1       │
//! │                                                                         │
//! │  "-" ────────────────► Decrement(id) ─────────► items[i].qty -= 1       │
//! │                                                  (qty 1 → removed)      │
//! │                                                                         │
//! │  Cart screen ────────► total_amount() ────────► (read only, derived)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line-item per product id
//! - Every line-item present has `quantity >= 1`
//! - Items keep insertion order
//!
//! None of the operations can fail. Unknown ids are ignored.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{self, Money};
use crate::types::{Product, ProductId, Rating};
use crate::{DEFAULT_QUANTITY, MAX_ITEM_QUANTITY};

// =============================================================================
// Line Item
// =============================================================================

/// A product in the cart together with its purchase quantity.
///
/// Product fields are copied when the item is added, so the cart keeps
/// rendering consistently even if the catalog is reloaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    /// Product id; unique within the cart.
    pub id: ProductId,

    pub title: String,

    #[serde(with = "money::as_decimal")]
    #[ts(type = "number")]
    pub price: Money,

    pub image: String,

    pub rating: Rating,

    /// Always >= 1 while the item is in the cart.
    pub quantity: u32,
}

impl CartLineItem {
    /// Creates a line-item from a catalog product.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        CartLineItem {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            rating: product.rating,
            quantity,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Actions
// =============================================================================

/// A requested cart mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Append `product` with `quantity` unless it is already in the cart.
    Add { product: Product, quantity: u32 },

    /// Raise the quantity of a line-item by one.
    Increment(ProductId),

    /// Lower the quantity of a line-item by one, removing it at zero.
    Decrement(ProductId),
}

impl CartAction {
    /// `Add` with the default quantity of 1.
    pub fn add(product: Product) -> Self {
        CartAction::Add {
            product,
            quantity: DEFAULT_QUANTITY,
        }
    }
}

/// What a reduced action did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added { id: ProductId, quantity: u32 },
    QuantityChanged { id: ProductId, quantity: u32 },
    Removed { id: ProductId },
    Unchanged,
}

// =============================================================================
// Cart State
// =============================================================================

/// Ordered line-items of the cart.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Applies one action. See [`reduce`].
    pub fn apply(&mut self, action: CartAction) -> CartChange {
        reduce(self, action)
    }

    /// Line-items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Quantity of `id` in the cart, 0 when absent.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, |item| item.quantity)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Exact cart total. See [`total_amount`].
    pub fn total(&self) -> Money {
        total_amount(self)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Applies `action` to `state`.
///
/// ## Behavior
/// - `Add`: appends when the product id is absent; a present id or a
///   zero quantity leaves the cart untouched. The quantity is clamped to
///   [`MAX_ITEM_QUANTITY`]
/// - `Increment`: `quantity + 1`, up to [`MAX_ITEM_QUANTITY`]
/// - `Decrement`: `quantity - 1`; a line-item at quantity 1 is removed
/// - Actions on ids not in the cart are no-ops
pub fn reduce(state: &mut CartState, action: CartAction) -> CartChange {
    match action {
        CartAction::Add { product, quantity } => {
            if quantity == 0 || state.position(product.id).is_some() {
                return CartChange::Unchanged;
            }
            let quantity = quantity.min(MAX_ITEM_QUANTITY);
            state
                .items
                .push(CartLineItem::from_product(&product, quantity));
            CartChange::Added {
                id: product.id,
                quantity,
            }
        }
        CartAction::Increment(id) => match state.items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.quantity < MAX_ITEM_QUANTITY => {
                item.quantity += 1;
                CartChange::QuantityChanged {
                    id,
                    quantity: item.quantity,
                }
            }
            _ => CartChange::Unchanged,
        },
        CartAction::Decrement(id) => match state.position(id) {
            Some(index) if state.items[index].quantity > 1 => {
                let item = &mut state.items[index];
                item.quantity -= 1;
                CartChange::QuantityChanged {
                    id,
                    quantity: item.quantity,
                }
            }
            Some(index) => {
                state.items.remove(index);
                CartChange::Removed { id }
            }
            None => CartChange::Unchanged,
        },
    }
}

/// Sum of `price × quantity` over every line-item. Zero for an empty cart.
///
/// ## Example
/// ```rust
/// use shelf_core::cart::{total_amount, CartAction, CartState};
/// use shelf_core::{Money, Product, Rating};
///
/// let mut cart = CartState::new();
/// assert_eq!(total_amount(&cart), Money::zero());
///
/// cart.apply(CartAction::add(Product {
///     id: 1,
///     title: "Backpack".into(),
///     price: Money::from_cents(1000),
///     description: None,
///     category: None,
///     image: String::new(),
///     rating: Rating::default(),
/// }));
/// cart.apply(CartAction::Increment(1));
/// assert_eq!(total_amount(&cart).cents(), 2000);
/// ```
pub fn total_amount(state: &CartState) -> Money {
    state.items.iter().map(CartLineItem::line_total).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_PRICE_CENTS;

    fn test_product(id: ProductId, price_cents: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            description: None,
            category: None,
            image: format!("https://example.com/{}.jpg", id),
            rating: Rating { rate: 4.1, count: 259 },
        }
    }

    fn cart_with(id: ProductId, price_cents: i64, quantity: u32) -> CartState {
        let mut cart = CartState::new();
        cart.apply(CartAction::Add {
            product: test_product(id, price_cents),
            quantity,
        });
        cart
    }

    #[test]
    fn test_add_to_empty_cart() {
        let mut cart = CartState::new();
        let change = cart.apply(CartAction::add(test_product(1, 999)));

        assert_eq!(change, CartChange::Added { id: 1, quantity: 1 });
        assert_eq!(cart.len(), 1);
        let item = &cart.items()[0];
        assert_eq!(item.id, 1);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.title, "Product 1");
        assert_eq!(item.rating.count, 259);
    }

    #[test]
    fn test_add_with_initial_quantity() {
        let cart = cart_with(4, 250, 3);
        assert_eq!(cart.quantity_of(4), 3);
        assert_eq!(cart.total().cents(), 750);
    }

    #[test]
    fn test_add_existing_product_is_noop() {
        let mut cart = cart_with(1, 999, 2);
        let before = cart.clone();

        let change = cart.apply(CartAction::add(test_product(1, 1)));

        assert_eq!(change, CartChange::Unchanged);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut cart = CartState::new();
        let change = cart.apply(CartAction::Add {
            product: test_product(1, 100),
            quantity: 0,
        });

        assert_eq!(change, CartChange::Unchanged);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut cart = CartState::new();
        for id in [5, 2, 9] {
            cart.apply(CartAction::add(test_product(id, 100)));
        }
        let ids: Vec<_> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_increment() {
        for q in [1, 2, 17] {
            let mut cart = cart_with(1, 100, q);
            let change = cart.apply(CartAction::Increment(1));
            assert_eq!(change, CartChange::QuantityChanged { id: 1, quantity: q + 1 });
            assert_eq!(cart.quantity_of(1), q + 1);
        }
    }

    #[test]
    fn test_add_clamps_to_max_quantity() {
        let mut cart = CartState::new();
        let change = cart.apply(CartAction::Add {
            product: test_product(1, 3_000_000_000),
            quantity: u32::MAX,
        });

        assert_eq!(
            change,
            CartChange::Added {
                id: 1,
                quantity: MAX_ITEM_QUANTITY
            }
        );
        assert_eq!(cart.total().cents(), 3_000_000_000 * 999);
    }

    #[test]
    fn test_increment_stops_at_max_quantity() {
        let mut cart = cart_with(1, 1, MAX_ITEM_QUANTITY - 1);

        assert_eq!(
            cart.apply(CartAction::Increment(1)),
            CartChange::QuantityChanged {
                id: 1,
                quantity: MAX_ITEM_QUANTITY
            }
        );
        assert_eq!(cart.apply(CartAction::Increment(1)), CartChange::Unchanged);
        assert_eq!(cart.quantity_of(1), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_total_at_price_and_quantity_ceilings() {
        let mut cart = CartState::new();
        for id in 1..=3 {
            cart.apply(CartAction::Add {
                product: test_product(id, MAX_PRICE_CENTS),
                quantity: MAX_ITEM_QUANTITY,
            });
            cart.apply(CartAction::Increment(id));
        }

        assert_eq!(cart.total().cents(), MAX_PRICE_CENTS * 999 * 3);
    }

    #[test]
    fn test_decrement_above_one() {
        for q in [2, 3, 40] {
            let mut cart = cart_with(1, 100, q);
            cart.apply(CartAction::Decrement(1));
            assert_eq!(cart.quantity_of(1), q - 1);
            assert_eq!(cart.len(), 1);
        }
    }

    #[test]
    fn test_decrement_at_one_removes_item() {
        let mut cart = cart_with(1, 100, 1);
        cart.apply(CartAction::add(test_product(2, 300)));

        let change = cart.apply(CartAction::Decrement(1));

        assert_eq!(change, CartChange::Removed { id: 1 });
        assert!(cart.get(1).is_none());
        assert_eq!(cart.quantity_of(1), 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].id, 2);
    }

    #[test]
    fn test_absent_id_leaves_cart_unchanged() {
        let mut cart = cart_with(1, 100, 2);
        let before = cart.clone();

        assert_eq!(cart.apply(CartAction::Increment(42)), CartChange::Unchanged);
        assert_eq!(cart.apply(CartAction::Decrement(42)), CartChange::Unchanged);
        assert_eq!(cart, before);

        let mut empty = CartState::new();
        empty.apply(CartAction::Decrement(1));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(total_amount(&CartState::new()), Money::zero());

        let mut cart = cart_with(1, 10995, 2);
        cart.apply(CartAction::Add {
            product: test_product(2, 2230),
            quantity: 3,
        });

        // 109.95 × 2 + 22.30 × 3
        assert_eq!(total_amount(&cart).cents(), 21990 + 6690);
        assert_eq!(cart.total_quantity(), 5);
    }

    /// Add → increment → decrement twice, with the remove-at-one policy
    #[test]
    fn test_cart_scenario() {
        let mut cart = CartState::new();

        cart.apply(CartAction::add(test_product(1, 1000)));
        assert_eq!(cart.total().to_string(), "10.00");

        cart.apply(CartAction::Increment(1));
        assert_eq!(cart.quantity_of(1), 2);
        assert_eq!(cart.total().to_string(), "20.00");

        cart.apply(CartAction::Decrement(1));
        assert_eq!(cart.quantity_of(1), 1);
        assert_eq!(cart.total().to_string(), "10.00");

        cart.apply(CartAction::Decrement(1));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_line_item_wire_format() {
        let cart = cart_with(3, 5599, 1);
        let json = serde_json::to_value(&cart.items()[0]).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["price"], serde_json::json!(55.99));
        assert_eq!(json["quantity"], 1);
    }
}
