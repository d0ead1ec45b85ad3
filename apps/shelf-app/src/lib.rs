//! # Shelf Application Library
//!
//! Application layer of Shelf: the shared cart store, configuration, and
//! the view-models of the home and cart screens.
//!
//! ## Module Organization
//! ```text
//! shelf_app/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Shared cart store
//! │   └── config.rs   ◄─── Configuration state
//! ├── screens/
//! │   ├── mod.rs      ◄─── Routes, label helpers
//! │   ├── home.rs     ◄─── Product list screen
//! │   └── cart.rs     ◄─── Cart screen
//! ├── alert.rs        ◄─── Alert sink
//! └── error.rs        ◄─── Application error type
//! ```

pub mod alert;
pub mod error;
pub mod screens;
pub mod state;

use std::process::ExitCode;

use shelf_catalog::HttpCatalog;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use alert::LogAlerts;
use error::AppResult;
use screens::{CartScreen, CartView, CatalogView, HomeScreen};
use state::{CartStore, ConfigState};

/// Runs the application headless against the configured catalog.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ─── tracing-subscriber, RUST_LOG or default      │
/// │  2. Load Configuration ─── SHELF_* environment variables                │
/// │  3. Build Catalog Client ─ reqwest, configured timeout                  │
/// │  4. Create CartStore ───── one store, cloned into each screen           │
/// │  5. Mount Home Screen ──── single catalog fetch                         │
/// │  6. Log cards & cart ───── FAILURE exit code if the catalog failed      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> AppResult<ExitCode> {
    init_tracing();

    info!("Starting Shelf");

    let config = ConfigState::from_env()?;
    info!(catalog_url = %config.catalog_url, "Configuration loaded");

    let catalog = HttpCatalog::new(config.catalog_config()?)?;

    let store = CartStore::new();
    let mut home = HomeScreen::new(store.clone(), config.clone());
    let cart = CartScreen::new(store, config);

    home.mount(&catalog, &LogAlerts).await;

    if let CatalogView::Failed(message) = home.view() {
        warn!(%message, "Home screen failed to load");
        return Ok(ExitCode::FAILURE);
    }

    info!(title = home.title(), section = home.section_title(), "Home screen ready");
    for card in home.cards() {
        info!(
            id = card.id,
            title = %card.title,
            price = %card.price_label,
            rating = %card.rating_label,
            "Product"
        );
    }

    if let CartView::Empty { message } = cart.view() {
        info!(%message, "Cart screen ready");
    }

    Ok(ExitCode::SUCCESS)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shelf_core=trace` - Show trace for one crate only
/// - Default: INFO, DEBUG for shelf crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,shelf_app=debug,shelf_catalog=debug,shelf_core=debug")
    });

    // A subscriber may already be installed by an embedding shell
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
