use std::path::Path;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use metrocollect_core::{AppConfig, CollectedData};

use super::*;

/// Config pointing both endpoints at the given mock server.
fn test_config(server_uri: &str, output_path: &Path) -> AppConfig {
    AppConfig {
        directory_url: format!("{server_uri}/api/v1/tradecenters/"),
        catalog_url: format!("{server_uri}/products-api/graph"),
        product_site_origin: "https://online.metro-cc.ru".to_owned(),
        target_cities: vec!["Москва".to_owned(), "Санкт-Петербург".to_owned()],
        category_slug: "kofe".to_owned(),
        in_stock_only: true,
        page_size: 1000,
        request_timeout_secs: 5,
        user_agent: "metrocollect-test/0.1".to_owned(),
        output_path: output_path.to_path_buf(),
        log_level: "debug".to_owned(),
    }
}

async fn mount_directory(server: &MockServer, stores: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/tradecenters/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({ "data": stores })))
        .mount(server)
        .await;
}

/// Mounts a catalog response for one specific store id.
async fn mount_catalog_for_store(
    server: &MockServer,
    store_id: i64,
    template: ResponseTemplate,
) {
    Mock::given(method("POST"))
        .and(path("/products-api/graph"))
        .and(body_partial_json(json!({"variables": {"storeId": store_id}})))
        .respond_with(template)
        .mount(server)
        .await;
}

fn two_products_json() -> serde_json::Value {
    json!({
        "data": {
            "category": {
                "products": [
                    {
                        "id": 201,
                        "name": "Кофе зерновой",
                        "url": "/p/201",
                        "stocks": [{"prices": {"price": 899.0, "old_price": null}}],
                        "manufacturer": {"name": "Lavazza"}
                    },
                    {
                        "id": 202,
                        "name": "Кофе молотый",
                        "url": "/p/202",
                        "stocks": [{"prices": {"price": 449.0, "old_price": 599.0}}],
                        "manufacturer": {"name": "Jacobs"}
                    }
                ]
            }
        }
    })
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[tokio::test]
async fn run_directory_500_yields_empty_snapshot_without_panicking() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tradecenters/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    // The catalog endpoint must never be hit when the directory fails.
    Mock::given(method("POST"))
        .and(path("/products-api/graph"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(&server.uri(), &dir.path().join("out.json"));

    let data = run(&config).await;
    assert!(data.is_empty(), "expected empty snapshot, got: {data:?}");
}

#[tokio::test]
async fn run_directory_unreachable_yields_empty_snapshot() {
    // Nothing listens on this port; the network error is caught, not raised.
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config("http://127.0.0.1:1", &dir.path().join("out.json"));

    let data = run(&config).await;
    assert!(data.is_empty());
}

#[tokio::test]
async fn run_no_stores_in_target_cities_yields_empty_snapshot() {
    let server = MockServer::start().await;

    mount_directory(&server, json!([{"store_id": 9, "city": "Казань"}])).await;

    Mock::given(method("POST"))
        .and(path("/products-api/graph"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(&server.uri(), &dir.path().join("out.json"));

    let data = run(&config).await;
    assert!(data.is_empty());
}

#[tokio::test]
async fn run_keeps_successful_store_and_omits_failed_one() {
    let server = MockServer::start().await;

    mount_directory(
        &server,
        json!([
            {"store_id": 1, "city": "Москва"},
            {"store_id": 2, "city": "Санкт-Петербург"}
        ]),
    )
    .await;

    mount_catalog_for_store(
        &server,
        1,
        ResponseTemplate::new(200).set_body_json(&two_products_json()),
    )
    .await;
    mount_catalog_for_store(&server, 2, ResponseTemplate::new(404)).await;

    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(&server.uri(), &dir.path().join("out.json"));

    let data = run(&config).await;

    assert_eq!(data.len(), 1, "exactly one key expected, got: {data:?}");
    let products = &data["tradecenter 1"];
    assert_eq!(products.len(), 2);
    // Upstream order is preserved.
    assert_eq!(products[0].id, "201");
    assert_eq!(products[1].id, "202");
    // Price normalization carried through the full pipeline.
    assert_eq!(products[0].regular_price, Some(899.0));
    assert_eq!(products[0].promotional_price, None);
    assert_eq!(products[1].regular_price, Some(599.0));
    assert_eq!(products[1].promotional_price, Some(449.0));
}

#[tokio::test]
async fn run_all_stores_succeed_yields_one_key_per_store() {
    let server = MockServer::start().await;

    mount_directory(
        &server,
        json!([
            {"store_id": 1, "city": "Москва"},
            {"store_id": 2, "city": "Санкт-Петербург"},
            {"store_id": 3, "city": "Paris"}
        ]),
    )
    .await;

    let empty_catalog = json!({"data": {"category": {"products": []}}});
    mount_catalog_for_store(
        &server,
        1,
        ResponseTemplate::new(200).set_body_json(&empty_catalog),
    )
    .await;
    mount_catalog_for_store(
        &server,
        2,
        ResponseTemplate::new(200).set_body_json(&empty_catalog),
    )
    .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(&server.uri(), &dir.path().join("out.json"));

    let data = run(&config).await;

    let keys: Vec<_> = data.keys().cloned().collect();
    assert_eq!(keys, vec!["tradecenter 1", "tradecenter 2"]);
    // A successful fetch with zero products still gets its key; only failed
    // fetches are omitted.
    assert!(data["tradecenter 1"].is_empty());
}

// ---------------------------------------------------------------------------
// dump
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dump_then_parse_reproduces_snapshot_exactly() {
    let server = MockServer::start().await;

    mount_directory(&server, json!([{"store_id": 1, "city": "Москва"}])).await;
    mount_catalog_for_store(
        &server,
        1,
        ResponseTemplate::new(200).set_body_json(&two_products_json()),
    )
    .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let output_path = dir.path().join("data").join("collected_data.json");
    let config = test_config(&server.uri(), &output_path);

    let data = run(&config).await;
    dump(&config.output_path, &data).await.expect("dump failed");

    let written = tokio::fs::read_to_string(&output_path)
        .await
        .expect("output file missing");
    // Human-readable indentation, non-ASCII names verbatim.
    assert!(written.contains("\n  "), "expected pretty-printed output");
    assert!(written.contains("Кофе зерновой"));

    let decoded: CollectedData = serde_json::from_str(&written).expect("output must parse back");
    assert_eq!(decoded, data);
}

#[tokio::test]
async fn dump_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output_path = dir.path().join("collected_data.json");

    let mut first = CollectedData::new();
    first.insert("tradecenter 1".to_owned(), vec![]);
    dump(&output_path, &first).await.expect("first dump failed");

    let second = CollectedData::new();
    dump(&output_path, &second).await.expect("second dump failed");

    let written = tokio::fs::read_to_string(&output_path)
        .await
        .expect("output file missing");
    let decoded: CollectedData = serde_json::from_str(&written).expect("output must parse back");
    assert!(decoded.is_empty(), "second dump should replace the first");
}
