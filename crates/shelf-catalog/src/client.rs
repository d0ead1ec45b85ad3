//! Catalog port and its HTTP implementation.

use async_trait::async_trait;
use shelf_core::Product;
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::parsing::decode_products;

// ============================================================================
// Port
// ============================================================================

/// Anything that can list purchasable products.
///
/// Screens depend on this trait rather than on [`HttpCatalog`], so tests
/// can substitute a fake.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full product listing.
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>>;
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Catalog backed by a single `GET` to the configured endpoint.
///
/// No retry, pagination or authentication: one request, one answer.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    /// Create a client with the given configuration.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(CatalogError::Client)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        let url = self.config.endpoint.as_str();
        debug!(%url, "Fetching catalog");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Catalog request rejected");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let products = decode_products(&body)?;
        debug!(count = products.len(), "Catalog decoded");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves `response` verbatim to the first connection and returns the
    /// catalog URL pointing at it.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/products")
    }

    fn catalog_at(url: &str) -> HttpCatalog {
        let config = CatalogConfig::new()
            .with_endpoint(url)
            .unwrap()
            .with_timeout(Duration::from_secs(5));
        HttpCatalog::new(config).unwrap()
    }

    #[test]
    fn test_client_keeps_config() {
        let config = CatalogConfig::new().with_timeout(Duration::from_secs(5));
        let catalog = HttpCatalog::new(config).unwrap();
        assert_eq!(catalog.config().timeout(), Duration::from_secs(5));
    }

    /// Nothing listens on the discard port, so the request fails in transport
    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let config = CatalogConfig::new()
            .with_endpoint("http://127.0.0.1:9/products")
            .unwrap()
            .with_timeout(Duration::from_secs(2));
        let catalog = HttpCatalog::new(config).unwrap();

        let err = catalog.fetch_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Network(_)));
    }

    #[tokio::test]
    async fn test_non_success_status_is_status_error() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let err = catalog_at(&url).fetch_products().await.unwrap_err();

        match err {
            CatalogError::Status { status, url: failed } => {
                assert_eq!(status, 503);
                assert_eq!(failed, url);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_html_body_is_decode_error() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 13\r\nConnection: close\r\n\r\n<html></html>",
        )
        .await;

        let err = catalog_at(&url).fetch_products().await.unwrap_err();

        assert!(matches!(err, CatalogError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_json_listing_is_decoded() {
        let url = serve_once(concat!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 94\r\nConnection: close\r\n\r\n",
            r#"[{"id":1,"title":"Backpack","price":109.95,"image":"x.jpg","rating":{"rate":3.9,"count":120}}]"#,
        ))
        .await;

        let products = catalog_at(&url).fetch_products().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price.cents(), 10995);
    }

    #[tokio::test]
    async fn test_port_is_object_safe() {
        struct Fixed;

        #[async_trait]
        impl CatalogSource for Fixed {
            async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
                decode_products("[]")
            }
        }

        let source: Box<dyn CatalogSource> = Box::new(Fixed);
        assert!(source.fetch_products().await.unwrap().is_empty());
    }
}
