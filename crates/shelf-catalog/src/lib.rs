//! # shelf-catalog: Remote Product Catalog
//!
//! Fetches the product listing the home screen shows.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HomeScreen::mount ──► CatalogSource::fetch_products                    │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                        HttpCatalog ── GET ──► catalog endpoint          │
//! │                              │                                          │
//! │                   2xx + JSON │ anything else                            │
//! │                              ▼        └──────► CatalogError             │
//! │                        Vec<Product>                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#![deny(unsafe_code)]

mod client;
mod config;
mod error;
mod parsing;

// ============================================================================
// Public API
// ============================================================================

pub use client::{CatalogSource, HttpCatalog};
pub use config::{CatalogConfig, DEFAULT_ENDPOINT};
pub use error::{CatalogError, CatalogResult};
pub use parsing::decode_products;
