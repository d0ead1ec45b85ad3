//! # Home Screen
//!
//! Product list fetched from the catalog, with per-product cart controls.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   new() ──► Loading ── mount() ──┬── Ok  ──► Loaded(products)           │
//! │                                  │                                      │
//! │                                  └── Err ──► Failed("Failed to load     │
//! │                                               products.")               │
//! │                                               + exactly one Alert       │
//! │                                                                         │
//! │   One fetch per screen instance. A failed screen stays failed.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shelf_catalog::CatalogSource;
use shelf_core::{CartChange, Product, ProductId, DEFAULT_QUANTITY};
use tracing::{debug, info};

use super::{rating_label, truncate_title, Route};
use crate::alert::{Alert, AlertSink};
use crate::error::AppError;
use crate::state::{CartStore, ConfigState};

/// Inline text that replaces the product list after a failed fetch.
pub const LOAD_FAILED_TEXT: &str = "Failed to load products.";

/// Heading above the product grid.
pub const SECTION_TITLE: &str = "Suggested For You!";

/// What the product area of the screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state", content = "data")]
pub enum CatalogView {
    Loading,
    Loaded(Vec<Product>),
    Failed(String),
}

/// Control rendered under a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum CardControl {
    /// Product not in the cart yet
    AddToBag,
    /// "-  quantity  +"
    Stepper { quantity: u32 },
}

/// One product card, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price_label: String,
    pub rating_label: String,
    pub control: CardControl,
}

/// View-model of the product list screen.
#[derive(Debug)]
pub struct HomeScreen {
    store: CartStore,
    config: ConfigState,
    view: CatalogView,
    mounted: bool,
}

impl HomeScreen {
    pub fn new(store: CartStore, config: ConfigState) -> Self {
        HomeScreen {
            store,
            config,
            view: CatalogView::Loading,
            mounted: false,
        }
    }

    /// Header title, e.g. the store name.
    pub fn title(&self) -> &str {
        &self.config.store_title
    }

    /// Heading above the product grid.
    pub fn section_title(&self) -> &str {
        SECTION_TITLE
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Loads the catalog. Only the first call fetches.
    ///
    /// ## Failure
    /// The error is logged, the view becomes [`CatalogView::Failed`] and
    /// one alert goes to `alerts`. There is no retry.
    pub async fn mount(&mut self, catalog: &dyn CatalogSource, alerts: &dyn AlertSink) {
        if self.mounted {
            debug!("Home screen already mounted, skipping fetch");
            return;
        }
        self.mounted = true;

        match catalog.fetch_products().await {
            Ok(products) => {
                info!(count = products.len(), "Catalog loaded");
                self.view = CatalogView::Loaded(products);
            }
            Err(e) => {
                let err = AppError::from(e);
                self.view = CatalogView::Failed(LOAD_FAILED_TEXT.to_string());
                alerts.alert(Alert::error(err.user_message()));
            }
        }
    }

    /// Cards for every loaded product; empty while loading or after failure.
    pub fn cards(&self) -> Vec<ProductCard> {
        let CatalogView::Loaded(products) = &self.view else {
            return Vec::new();
        };

        self.store.with_cart(|cart| {
            products
                .iter()
                .map(|product| {
                    let quantity = cart.quantity_of(product.id);
                    ProductCard {
                        id: product.id,
                        title: truncate_title(&product.title, self.config.title_max_chars),
                        image: product.image.clone(),
                        price_label: product.price.label(&self.config.currency_symbol),
                        rating_label: rating_label(&product.rating),
                        control: if quantity > 0 {
                            CardControl::Stepper { quantity }
                        } else {
                            CardControl::AddToBag
                        },
                    }
                })
                .collect()
        })
    }

    /// "Add to Bag": puts one unit in the cart and asks to open the cart.
    ///
    /// Returns `None` when `id` is not a loaded product.
    pub fn add_to_bag(&self, id: ProductId) -> Option<Route> {
        let product = self.product(id)?;
        self.store.add_to_cart(product, DEFAULT_QUANTITY);
        Some(Route::Cart)
    }

    pub fn increment(&self, id: ProductId) -> CartChange {
        self.store.increment_quantity(id)
    }

    pub fn decrement(&self, id: ProductId) -> CartChange {
        self.store.decrement_quantity(id)
    }

    fn product(&self, id: ProductId) -> Option<&Product> {
        match &self.view {
            CatalogView::Loaded(products) => products.iter().find(|p| p.id == id),
            _ => None,
        }
    }
}
