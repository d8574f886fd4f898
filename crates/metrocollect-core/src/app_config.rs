use std::path::PathBuf;

/// Runtime configuration for a collection run.
///
/// Every field has a default suitable for a production run against the live
/// endpoints; see [`crate::load_app_config`] for the env vars that override
/// them. Tests construct this directly with endpoint URLs pointing at a
/// local mock server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory endpoint listing every trade center.
    pub directory_url: String,
    /// GraphQL catalog endpoint, queried once per store.
    pub catalog_url: String,
    /// Origin prepended to the relative product URLs from the catalog.
    /// This is the consumer storefront, not the API host.
    pub product_site_origin: String,
    /// Cities whose stores are included in the run.
    pub target_cities: Vec<String>,
    /// Category slug passed in the catalog query variables.
    pub category_slug: String,
    /// Whether the catalog query is restricted to in-stock products.
    pub in_stock_only: bool,
    /// Page size for the single catalog request per store.
    pub page_size: i64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Where the collected snapshot is written. Overwritten each run.
    pub output_path: PathBuf,
    pub log_level: String,
}
