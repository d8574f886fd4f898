//! Fan-out over stores and the fold into the collected snapshot.

use futures::future::join_all;

use metrocollect_core::{store_label, AppConfig, CollectedData};
use metrocollect_scraper::{CatalogClient, CategoryQuery, ScraperError};

/// Runs one full collection pass.
///
/// Fetches the store directory once, then launches one catalog fetch per
/// store — all at once — and awaits them jointly. Successful stores are
/// folded into the returned map after the joint wait; failed stores are
/// logged and omitted, so a present key always means a successful fetch.
///
/// Never returns an error: a failed directory fetch yields an empty
/// snapshot, which the caller still dumps.
pub async fn run(config: &AppConfig) -> CollectedData {
    let mut collected = CollectedData::new();

    let client = match CatalogClient::new(config.request_timeout_secs, &config.user_agent) {
        Ok(client) => client,
        Err(error) => {
            tracing::error!(error = %error, "failed to construct HTTP client");
            return collected;
        }
    };

    tracing::debug!(url = %config.directory_url, "fetching all trade centers");
    let store_ids = match client
        .fetch_store_ids(&config.directory_url, &config.target_cities)
        .await
    {
        Ok(ids) => ids,
        Err(error) => {
            log_directory_error(&config.directory_url, &error);
            return collected;
        }
    };
    tracing::debug!(
        count = store_ids.len(),
        cities = ?config.target_cities,
        ids = ?store_ids,
        "filtered trade centers"
    );

    if store_ids.is_empty() {
        return collected;
    }

    let client = &client;
    let fetches = store_ids.iter().map(|&store_id| {
        let query = CategoryQuery::for_store(
            store_id,
            &config.category_slug,
            config.in_stock_only,
            config.page_size,
        );
        async move {
            let result = client
                .fetch_store_products(&config.catalog_url, &query, &config.product_site_origin)
                .await;
            (store_id, query, result)
        }
    });

    let mut failed = 0usize;
    for (store_id, query, result) in join_all(fetches).await {
        match result {
            Ok(products) => {
                collected.insert(store_label(store_id), products);
            }
            Err(error) => {
                failed += 1;
                log_store_error(store_id, &config.catalog_url, &query, &error);
            }
        }
    }

    if failed > 0 {
        tracing::warn!(
            failed,
            total = store_ids.len(),
            "some tradecenters failed during collection"
        );
    }

    collected
}

/// Logs a failed directory fetch with the detail the run report needs:
/// endpoint, status, and response body when available.
fn log_directory_error(directory_url: &str, error: &ScraperError) {
    match error {
        ScraperError::UnexpectedStatus { status, url, body } => {
            tracing::error!(
                status = *status,
                url = %url,
                body = %body,
                "error while fetching all trade centers"
            );
        }
        other => {
            tracing::error!(
                url = %directory_url,
                error = %other,
                "error while fetching all trade centers"
            );
        }
    }
}

/// Logs a failed per-store fetch: endpoint, serialized query payload, and
/// status plus body when the failure was an unexpected status.
fn log_store_error(
    store_id: i64,
    catalog_url: &str,
    query: &CategoryQuery,
    error: &ScraperError,
) {
    let payload =
        serde_json::to_string(query).unwrap_or_else(|_| "<unserializable query>".to_owned());
    match error {
        ScraperError::UnexpectedStatus { status, url, body } => {
            tracing::error!(
                store_id,
                url = %url,
                query = %payload,
                status = *status,
                body = %body,
                "error while fetching products for tradecenter"
            );
        }
        other => {
            tracing::error!(
                store_id,
                url = %catalog_url,
                query = %payload,
                error = %other,
                "error while fetching products for tradecenter"
            );
        }
    }
}
