//! Product catalog client
//!
//! Fetches the product list from the catalog service with a single blocking
//! HTTP GET. Failures are returned as [`SalesError::Catalog`] values; callers
//! turn them into an empty [`CatalogMapping`](crate::types::CatalogMapping).

use crate::core::traits::CatalogSource;
use crate::types::{CatalogProduct, CatalogResponse, SalesError};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use std::time::Duration;
use tracing::debug;

/// Catalog backed by an HTTP endpoint returning `{"products": [...]}`
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    /// Create a client for `url` with the given request timeout
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SalesError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// The endpoint this client queries
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch_products(&self) -> Result<Vec<CatalogProduct>, SalesError> {
        debug!(url = %self.url, "requesting product catalog");

        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, concat!("sales-analytics/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()?
            .error_for_status()?;

        let body: CatalogResponse = response.json()?;
        Ok(body.products)
    }
}

/// Catalog that never answers
///
/// Used when catalog lookups are disabled; every record ends up unmatched.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineCatalog;

impl CatalogSource for OfflineCatalog {
    fn fetch_products(&self) -> Result<Vec<CatalogProduct>, SalesError> {
        Err(SalesError::catalog("catalog lookups disabled"))
    }
}

/// Catalog serving a fixed product list
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<CatalogProduct>,
}

impl StaticCatalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }
}

impl CatalogSource for StaticCatalog {
    fn fetch_products(&self) -> Result<Vec<CatalogProduct>, SalesError> {
        Ok(self.products.clone())
    }
}
