//! # shelf-core: Pure Cart Logic for Shelf
//!
//! This crate is the **heart** of Shelf. It holds the catalog record types
//! and the cart reducer as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shelf Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Shell (renders view-models)               │   │
//! │  │          Home screen  ──────────►  Cart screen                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │   shelf-app: CartStore, HomeScreen, CartScreen                  │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────┐  ┌────────────▼───────────────────┐   │
//! │  │  ★ shelf-core (THIS) ★      │  │  shelf-catalog                 │   │
//! │  │  Money • Product • Cart     │◄─│  GET /products → Vec<Product>  │   │
//! │  │  NO I/O • PURE FUNCTIONS    │  │                                │   │
//! │  └─────────────────────────────┘  └────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog records (Product, Rating)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart state, actions and the reducer
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shelf_core::cart::{CartAction, CartState};
//! use shelf_core::{Money, Product, Rating};
//!
//! let product = Product {
//!     id: 1,
//!     title: "Backpack".to_string(),
//!     price: Money::from_cents(10995),
//!     description: None,
//!     category: None,
//!     image: "https://example.com/backpack.jpg".to_string(),
//!     rating: Rating { rate: 3.9, count: 120 },
//! };
//!
//! let mut cart = CartState::new();
//! cart.apply(CartAction::add(product));
//! cart.apply(CartAction::Increment(1));
//!
//! assert_eq!(cart.quantity_of(1), 2);
//! assert_eq!(cart.total().label("₹"), "₹219.90");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{total_amount, CartAction, CartChange, CartLineItem, CartState};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity a product enters the cart with when none is given.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Maximum quantity of a single product in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering and keeps every cart total well
/// inside `i64` cents. `Add` clamps to it and `Increment` stops at it.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Highest unit price accepted from the catalog, in cents (100 million).
pub const MAX_PRICE_CENTS: i64 = 10_000_000_000;
