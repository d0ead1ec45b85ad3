//! Error types for catalog operations.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while fetching the product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The endpoint answered with a non-success status.
    #[error("Catalog request failed with status {status}: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not JSON, or not a list of products.
    #[error("Invalid catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint is not a valid URL.
    #[error("Invalid catalog endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),
}
