//! HTTP client for the Metro directory and catalog endpoints.

use std::time::Duration;

use reqwest::Client;

use metrocollect_core::ProductRecord;

use crate::directory::filter_store_ids;
use crate::error::ScraperError;
use crate::normalize::normalize_product;
use crate::query::CategoryQuery;
use crate::types::{CatalogResponse, DirectoryResponse};

/// HTTP client shared by every fetch in a collection run.
///
/// One pooled `reqwest::Client` backs both endpoints for the duration of a
/// run; dropping the `CatalogClient` releases the pool. Non-2xx responses
/// surface as typed errors with the response body preserved so callers can
/// log it. No retries — a failed request is reported once and dropped.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the configured timeout and `User-Agent`.
    ///
    /// The per-request timeout bounds how long a single hung store can stall
    /// a joint wait over many concurrent fetches.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the trade-center directory and returns the ids of stores
    /// located in one of `target_cities`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx status; carries the
    ///   response body.
    /// - [`ScraperError::Deserialize`] — response body is not the expected
    ///   directory shape.
    /// - [`ScraperError::Http`] — network failure or timeout.
    pub async fn fetch_store_ids(
        &self,
        directory_url: &str,
        target_cities: &[String],
    ) -> Result<Vec<i64>, ScraperError> {
        let response = self.client.get(directory_url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: directory_url.to_owned(),
                body,
            });
        }

        let parsed =
            serde_json::from_str::<DirectoryResponse>(&body).map_err(|e| {
                ScraperError::Deserialize {
                    context: format!("trade-center directory from {directory_url}"),
                    source: e,
                }
            })?;

        Ok(filter_store_ids(&parsed.data, target_cities))
    }

    /// Fetches every product for one store with a single oversized-page
    /// category query and returns them normalized, in upstream order.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx status; carries the
    ///   response body.
    /// - [`ScraperError::Deserialize`] — response body is not the expected
    ///   catalog shape.
    /// - [`ScraperError::Http`] — network failure or timeout.
    pub async fn fetch_store_products(
        &self,
        catalog_url: &str,
        query: &CategoryQuery,
        site_origin: &str,
    ) -> Result<Vec<ProductRecord>, ScraperError> {
        let store_id = query.variables.store_id;
        tracing::debug!(store_id, "fetching products for tradecenter");

        let response = self.client.post(catalog_url).json(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: catalog_url.to_owned(),
                body,
            });
        }

        let parsed =
            serde_json::from_str::<CatalogResponse>(&body).map_err(|e| {
                ScraperError::Deserialize {
                    context: format!("catalog products for store {store_id} from {catalog_url}"),
                    source: e,
                }
            })?;

        let products: Vec<ProductRecord> = parsed
            .data
            .category
            .products
            .into_iter()
            .map(|product| normalize_product(product, site_origin))
            .collect();
        tracing::debug!(store_id, count = products.len(), "products fetched for tradecenter");

        Ok(products)
    }
}
