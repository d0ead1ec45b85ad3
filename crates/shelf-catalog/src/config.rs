//! Public configuration for the catalog client.

use std::time::Duration;

use url::Url;

use crate::error::CatalogResult;

/// Product listing used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Configuration for [`HttpCatalog`](crate::HttpCatalog).
///
/// # Example
///
/// ```
/// use shelf_catalog::CatalogConfig;
/// use std::time::Duration;
///
/// let config = CatalogConfig::new()
///     .with_endpoint("https://example.com/api/products")
///     .unwrap()
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.endpoint().host_str(), Some("example.com"));
/// ```
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub(crate) endpoint: Url,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is valid"),
            user_agent: concat!("shelf-catalog/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl CatalogConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the product listing URL. Fails when `endpoint` does not parse.
    pub fn with_endpoint(mut self, endpoint: &str) -> CatalogResult<Self> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    /// Set the request timeout. Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string for the request.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
