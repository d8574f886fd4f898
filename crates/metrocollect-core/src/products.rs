use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A product normalized from one store's catalog response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Catalog product id, rendered as a string to avoid precision loss.
    pub id: String,
    pub name: String,
    /// Absolute product page URL on the consumer storefront.
    pub url: String,
    /// Standing price. `None` only when the store reported no stock record
    /// for the product.
    pub regular_price: Option<f64>,
    /// Discounted price, set only while a promotion is active.
    pub promotional_price: Option<f64>,
    /// Manufacturer name.
    pub brand: String,
}

impl ProductRecord {
    /// Returns `true` if a promotion is currently active for this product.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.promotional_price.is_some()
    }
}

/// Snapshot of one collection run, keyed by store label.
///
/// A key is present iff that store's fetch succeeded; failed stores are
/// absent rather than mapped to an empty list. Product order within a store
/// mirrors the upstream response. The ordered map gives the output file a
/// stable key order across runs.
pub type CollectedData = BTreeMap<String, Vec<ProductRecord>>;

/// Map key for one store's products in [`CollectedData`].
#[must_use]
pub fn store_label(store_id: i64) -> String {
    format!("tradecenter {store_id}")
}
