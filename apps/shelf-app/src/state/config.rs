//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHELF_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::time::Duration;

use serde::Serialize;
use shelf_catalog::{CatalogConfig, DEFAULT_ENDPOINT};

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Product listing URL
    pub catalog_url: String,

    /// Catalog request timeout in seconds
    pub request_timeout_secs: u64,

    /// Currency symbol placed before every price label
    pub currency_symbol: String,

    /// Header title of the home screen
    pub store_title: String,

    /// Product titles longer than this are cut and suffixed with "..."
    pub title_max_chars: usize,
}

impl Default for ConfigState {
    /// Defaults: rupee prices, 20-character card titles.
    fn default() -> Self {
        ConfigState {
            catalog_url: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 30,
            currency_symbol: "₹".to_string(),
            store_title: "Flipkart".to_string(),
            title_max_chars: 20,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHELF_CATALOG_URL`: Override the product listing URL
    /// - `SHELF_REQUEST_TIMEOUT_SECS`: Override the request timeout
    /// - `SHELF_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `SHELF_STORE_TITLE`: Override the home screen title
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(url) = lookup("SHELF_CATALOG_URL") {
            config.catalog_url = url;
        }

        if let Some(raw) = lookup("SHELF_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(AppError::config(
                        "SHELF_REQUEST_TIMEOUT_SECS",
                        format!("expected a positive number of seconds, got {raw:?}"),
                    ))
                }
            };
        }

        if let Some(symbol) = lookup("SHELF_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(title) = lookup("SHELF_STORE_TITLE") {
            config.store_title = title;
        }

        Ok(config)
    }

    /// Catalog client configuration derived from this state.
    pub fn catalog_config(&self) -> AppResult<CatalogConfig> {
        CatalogConfig::new()
            .with_endpoint(&self.catalog_url)
            .map(|c| c.with_timeout(Duration::from_secs(self.request_timeout_secs)))
            .map_err(|e| AppError::config("SHELF_CATALOG_URL", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.catalog_url, "https://fakestoreapi.com/products");
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.title_max_chars, 20);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("SHELF_CATALOG_URL", "http://localhost:3000/products"),
            ("SHELF_REQUEST_TIMEOUT_SECS", " 5 "),
            ("SHELF_CURRENCY_SYMBOL", "$"),
            ("SHELF_STORE_TITLE", "Corner Shop"),
        ]))
        .unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.store_title, "Corner Shop");
        let catalog = config.catalog_config().unwrap();
        assert_eq!(catalog.endpoint().port(), Some(3000));
        assert_eq!(catalog.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        for raw in ["abc", "0", "-3"] {
            let err = ConfigState::from_lookup(lookup(&[("SHELF_REQUEST_TIMEOUT_SECS", raw)]))
                .unwrap_err();
            assert!(matches!(err, AppError::Config { ref key, .. } if key == "SHELF_REQUEST_TIMEOUT_SECS"));
        }
    }

    #[test]
    fn test_bad_catalog_url_is_config_error() {
        let config =
            ConfigState::from_lookup(lookup(&[("SHELF_CATALOG_URL", "not a url")])).unwrap();
        let err = config.catalog_config().unwrap_err();
        assert!(matches!(err, AppError::Config { ref key, .. } if key == "SHELF_CATALOG_URL"));
    }
}
