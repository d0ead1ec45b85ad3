//! # Screens
//!
//! Headless view-models for the two screens of the storefront. A UI shell
//! renders what [`HomeScreen`] and [`CartScreen`] produce and forwards taps
//! back to them.
//!
//! ```text
//! ┌──────────────────────────┐   add_to_bag → Route::Cart   ┌──────────────────────────┐
//! │  HomeScreen              │ ───────────────────────────► │  CartScreen              │
//! │  catalog cards, +/-      │                              │  line-items, +/-, total  │
//! └────────────┬─────────────┘                              └────────────┬─────────────┘
//!              │                 both dispatch to one CartStore          │
//!              └─────────────────────────────┬───────────────────────────┘
//!                                            ▼
//!                                        CartStore
//! ```

pub mod cart;
pub mod home;

pub use cart::{CartRow, CartScreen, CartView};
pub use home::{CardControl, CatalogView, HomeScreen, ProductCard};

use serde::Serialize;
use shelf_core::Rating;

/// Where the shell should navigate after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    Cart,
}

/// Cuts `title` to `max_chars` characters and appends "..." when it was longer.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    match title.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &title[..cut]),
        None => title.to_string(),
    }
}

/// "⭐ 3.9 (120)"
pub fn rating_label(rating: &Rating) -> String {
    format!("⭐ {} ({})", rating.rate, rating.count)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use shelf_core::{Money, Product, ProductId, Rating};

    pub fn product(id: ProductId, price_cents: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            description: None,
            category: None,
            image: format!("https://example.com/{}.jpg", id),
            rating: Rating { rate: 3.9, count: 120 },
        }
    }
}
