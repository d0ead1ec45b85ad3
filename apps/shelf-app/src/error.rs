//! # Application Error Type
//!
//! Unified error type for the application layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shelf                                  │
//! │                                                                         │
//! │  HomeScreen::mount                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CatalogSource::fetch_products                                          │
//! │         │                                                               │
//! │         ├── CatalogError::Network / Status ──┐                          │
//! │         ├── CatalogError::Decode ────────────┼──► AppError ──► Alert    │
//! │         │                                    │     (user_message)       │
//! │         ▼                                    │                          │
//! │  Vec<Product> ──► CatalogView::Loaded        └──► tracing::error!       │
//! │                                                   (full detail)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The user only ever sees `user_message()`. Transport and decode details
//! go to the log.

use serde::Serialize;
use shelf_catalog::CatalogError;
use thiserror::Error;

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the application layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// The product listing could not be loaded.
    #[error("Catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    /// A configuration value could not be used.
    #[error("Invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },
}

/// Machine-readable error codes for the UI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Transport failure or non-success status
    CatalogUnavailable,

    /// Response was not a product listing
    CatalogInvalid,

    /// Bad configuration value
    Configuration,
}

impl AppError {
    pub fn config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Config {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Catalog(CatalogError::Decode(_)) => ErrorCode::CatalogInvalid,
            AppError::Catalog(CatalogError::InvalidEndpoint(_)) => ErrorCode::Configuration,
            AppError::Catalog(_) => ErrorCode::CatalogUnavailable,
            AppError::Config { .. } => ErrorCode::Configuration,
        }
    }

    /// Message safe to show to the user. Logs the underlying detail.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Catalog(e) => {
                tracing::error!(error = %e, code = ?self.code(), "Catalog load failed");
                "Failed to load products. Please try again later.".to_string()
            }
            AppError::Config { .. } => self.to_string(),
        }
    }
}
