//! Base URL resolution from the process environment.
//!
//! Kept in its own test binary because it mutates process-wide environment
//! variables.

use serde_json::{json, Value};
use transport_core::config::BASE_URL_ENV;
use transport_core::{ApiClient, ClientConfig};

#[tokio::test]
async fn base_url_comes_from_environment() {
    // Unset: same-origin, paths are used as given.
    std::env::remove_var(BASE_URL_ENV);
    assert_eq!(ClientConfig::from_env().base_url, "");

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    std::env::set_var(BASE_URL_ENV, server.url());
    let client = ApiClient::from_env();
    assert_eq!(client.base_url(), server.url());

    // The client keeps the URL it was built with.
    std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:1");
    let health: Value = client.fetch_data("/health").await.unwrap();
    assert_eq!(health, json!({ "ok": true }));

    mock.assert_async().await;
}
