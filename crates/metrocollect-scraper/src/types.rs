//! Wire types for the Metro directory and catalog endpoints.
//!
//! ## Observed shapes
//!
//! ### Directory (`GET /api/v1/tradecenters/`)
//! Each entry carries far more than we read (address, coordinates, opening
//! hours); only `store_id` and `city` are modeled and the rest is ignored on
//! deserialization.
//!
//! ### Catalog (`POST /products-api/graph`)
//! GraphQL-shaped response. `stocks` is an array per product; only index 0
//! is consulted for pricing. `prices.old_price` is `null` unless a promotion
//! is currently active, in which case it holds the standing (pre-discount)
//! price and `price` holds the discounted one.
//!
//! ### Product ids
//! Observed as JSON numbers on live responses, but the id is treated as an
//! opaque string downstream; [`RawProductId`] accepts either form.

use serde::Deserialize;

/// Top-level response from the trade-center directory endpoint.
#[derive(Debug, Deserialize)]
pub struct DirectoryResponse {
    pub data: Vec<StoreLocation>,
}

/// A single trade center from the directory. Transient — read once, used
/// only for city filtering.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreLocation {
    pub store_id: i64,
    pub city: String,
}

/// Top-level response from the catalog endpoint.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub data: CatalogData,
}

#[derive(Debug, Deserialize)]
pub struct CatalogData {
    pub category: Category,
}

#[derive(Debug, Deserialize)]
pub struct Category {
    pub products: Vec<RawProduct>,
}

/// A single product as returned by the catalog query.
#[derive(Debug, Deserialize)]
pub struct RawProduct {
    pub id: RawProductId,
    pub name: String,
    /// Path relative to the consumer storefront origin,
    /// e.g. `/products/kofe-v-zernah-123.html`.
    pub url: String,
    /// Stock records; only the first is consulted. May be empty.
    #[serde(default)]
    pub stocks: Vec<RawStock>,
    pub manufacturer: RawManufacturer,
}

/// Product id as sent by the catalog: a JSON number on observed responses,
/// but accepted as a string too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawProductId {
    Number(i64),
    Text(String),
}

impl RawProductId {
    /// Renders the id in its string form.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            RawProductId::Number(n) => n.to_string(),
            RawProductId::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawStock {
    pub prices: RawPrices,
}

#[derive(Debug, Deserialize)]
pub struct RawPrices {
    /// Current selling price.
    pub price: Option<f64>,
    /// Standing price, set only while a promotion is active; `null` otherwise.
    pub old_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RawManufacturer {
    pub name: String,
}
