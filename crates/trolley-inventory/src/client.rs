//! # Inventory Client
//!
//! The lookup seam the cart store depends on, and its HTTP implementation.
//!
//! ## Endpoints
//! ```text
//! GET {base_url}/products/{id}  → { "id": 1, "title": "...", "price": 169.9, "image": "..." }
//! GET {base_url}/stock/{id}    → { "id": 1, "amount": 3 }
//! ```
//!
//! The service reports prices as decimal floats; the adapter converts them
//! to integer cents at this boundary so the rest of the workspace never
//! handles floating-point money.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{InventoryError, InventoryResult};
use trolley_core::{ProductId, ProductRecord, StockLevel};

// =============================================================================
// Inventory Client Trait
// =============================================================================

/// Abstraction over remote product and stock lookups.
///
/// The cart store is generic over this trait so tests can substitute an
/// in-memory implementation. Calls can fail but are not cancellable;
/// implementations should bound their own request time.
pub trait InventoryClient: Send + Sync {
    /// Resolves full product metadata by id.
    fn product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = InventoryResult<ProductRecord>> + Send;

    /// Resolves the current stock level by id.
    fn stock(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = InventoryResult<StockLevel>> + Send;
}

// =============================================================================
// Configuration
// =============================================================================

/// Inventory client configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = InventoryConfig::new("http://localhost:3333")
///     .timeout(Duration::from_secs(5));
/// let client = HttpInventoryClient::new(config)?;
/// ```
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// Base URL of the inventory service.
    pub base_url: String,

    /// Per-request timeout.
    /// Default: 10 seconds
    pub timeout: Duration,
}

impl InventoryConfig {
    /// Creates a configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        InventoryConfig {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// Product payload as the service reports it (decimal price).
#[derive(Debug, Deserialize)]
struct ProductPayload {
    id: ProductId,
    title: String,
    price: f64,
    #[serde(default)]
    image: Option<String>,
}

impl ProductPayload {
    /// Converts the wire payload into the domain record, rounding the
    /// decimal price to integer cents.
    fn into_record(self) -> ProductRecord {
        ProductRecord {
            id: self.id,
            title: self.title,
            price_cents: (self.price * 100.0).round() as i64,
            image: self.image,
        }
    }
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// Inventory client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    /// HTTP client with the configured timeout.
    http: Client,
    /// Base URL, trailing slash stripped.
    base_url: String,
}

impl HttpInventoryClient {
    /// Creates a client from the given configuration.
    ///
    /// ## Errors
    /// Returns [`InventoryError::InvalidBaseUrl`] when the base URL does not
    /// parse, and [`InventoryError::Transport`] when the HTTP client cannot
    /// be constructed.
    pub fn new(config: InventoryConfig) -> InventoryResult<Self> {
        Url::parse(&config.base_url)
            .map_err(|_| InventoryError::InvalidBaseUrl(config.base_url.clone()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InventoryError::Transport(e.to_string()))?;

        Ok(HttpInventoryClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, segment: &str, product_id: ProductId) -> String {
        format!("{}/{}/{}", self.base_url, segment, product_id)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        product_id: ProductId,
    ) -> InventoryResult<T> {
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| InventoryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InventoryError::Status {
                product_id,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| InventoryError::Decode(e.to_string()))
    }
}

impl InventoryClient for HttpInventoryClient {
    fn product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = InventoryResult<ProductRecord>> + Send {
        async move {
            let url = self.endpoint("products", product_id);
            let payload: ProductPayload = self.get_json(url, product_id).await?;
            let record = payload.into_record();

            debug!(product_id = %product_id, title = %record.title, "Product resolved");
            Ok(record)
        }
    }

    fn stock(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = InventoryResult<StockLevel>> + Send {
        async move {
            let url = self.endpoint("stock", product_id);
            // The stock payload also carries the product id; serde ignores
            // fields StockLevel does not declare.
            let stock: StockLevel = self.get_json(url, product_id).await?;

            debug!(product_id = %product_id, amount = stock.amount, "Stock resolved");
            Ok(stock)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_payload_price_converts_to_cents() {
        let payload: ProductPayload = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Tênis de Caminhada Leve Confortável",
                "price": 179.9,
                "image": "https://img.example/shoes.jpg"
            }"#,
        )
        .unwrap();

        let record = payload.into_record();
        assert_eq!(record.id, ProductId::new(1));
        assert_eq!(record.price_cents, 17990);
        assert_eq!(record.image.as_deref(), Some("https://img.example/shoes.jpg"));
    }

    #[test]
    fn test_product_payload_image_is_optional() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{ "id": 2, "title": "Socks", "price": 9.99 }"#).unwrap();

        assert!(payload.image.is_none());
        assert_eq!(payload.into_record().price_cents, 999);
    }

    #[test]
    fn test_stock_payload_ignores_extra_fields() {
        let stock: StockLevel = serde_json::from_str(r#"{ "id": 3, "amount": 5 }"#).unwrap();
        assert_eq!(stock.amount, 5);
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client =
            HttpInventoryClient::new(InventoryConfig::new("http://localhost:3333/")).unwrap();

        assert_eq!(
            client.endpoint("products", ProductId::new(7)),
            "http://localhost:3333/products/7"
        );
        assert_eq!(
            client.endpoint("stock", ProductId::new(7)),
            "http://localhost:3333/stock/7"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = HttpInventoryClient::new(InventoryConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_config_builder_sets_timeout() {
        let config = InventoryConfig::new("http://localhost:3333")
            .timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
