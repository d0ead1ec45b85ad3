//! # Domain Types
//!
//! Catalog records as the remote product listing delivers them.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    Product      │        │     Rating      │                        │
//! │  │  ─────────────  │        │  ─────────────  │                        │
//! │  │  id             │  ────► │  rate (0-5)     │                        │
//! │  │  title          │        │  count          │                        │
//! │  │  price (Money)  │        └─────────────────┘                        │
//! │  │  image (URL)    │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names match the catalog's JSON, so these types decode the
//! response directly.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{self, Money};

/// Identifier of a catalog product. Also the line-item key in the cart.
pub type ProductId = u32;

// =============================================================================
// Rating
// =============================================================================

/// Aggregate customer rating of a product. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average score, 0.0 - 5.0.
    pub rate: f64,

    /// Number of ratings behind the average.
    pub count: u32,
}

// =============================================================================
// Product
// =============================================================================

/// A product offered by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Unit price. Decimal on the wire, cents in memory.
    #[serde(with = "money::as_decimal")]
    #[ts(type = "number")]
    pub price: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,

    /// Image URL.
    pub image: String,

    pub rating: Rating,
}
