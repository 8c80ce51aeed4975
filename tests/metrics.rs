// tests/metrics.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use recensor::config::AppConfig;

// Build full in-process app with /metrics mounted.
fn build_app() -> Router {
    let mut cfg = AppConfig::default();
    cfg.server.debug_routes = true;
    recensor::app_with_config(cfg).expect("app_with_config should build Router in tests")
}

async fn scrape(app: Router) -> String {
    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    // axum::body::to_bytes requires an explicit limit
    let body = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap(); // 1 MiB
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn metrics_endpoint_contains_expected_series_after_search() {
    let app = build_app();

    let r = app
        .clone()
        .oneshot(
            Request::get("/search?q=Samsung%20TV")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(r.status(), StatusCode::OK);

    let text = scrape(app).await;
    for needle in [
        "recensor_search_requests_total",
        "recensor_products_scored_total",
        "recensor_trust_overall",
        "recensor_search_max_query_len",
    ] {
        assert!(
            text.contains(needle),
            "metrics exposition missing '{needle}'\n{text}"
        );
    }
}

#[tokio::test]
async fn building_twice_reuses_recorder() {
    // Second install in the same process must not fail.
    let _first = build_app();
    let second = build_app();
    let text = scrape(second).await;
    assert!(text.contains("recensor_search_max_query_len"), "{text}");
}
