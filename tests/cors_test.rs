mod common;

use common::{TestApp, TEST_ORIGIN};
use reqwest::Client;

#[tokio::test]
async fn allowed_origin_receives_cors_header() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/hello", app.address))
        .header("origin", TEST_ORIGIN)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(TEST_ORIGIN)
    );
}

#[tokio::test]
async fn other_origin_does_not_receive_cors_header() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/hello", app.address))
        .header("origin", "http://evil.example.com")
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn preflight_allows_frontend_post() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/data", app.address),
        )
        .header("origin", TEST_ORIGIN)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(TEST_ORIGIN)
    );

    let allowed_methods = response
        .headers()
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(allowed_methods.contains("POST"));
}
