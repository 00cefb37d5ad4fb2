//! HTTP fetcher against a local server

mod helpers;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use go_stats::{ConfigFetcher, FetchConfig, FetchError, HttpConfigFetcher};
use helpers::{serve, spawn_config_server};

fn fetcher_for(url: &str) -> HttpConfigFetcher {
    let config = FetchConfig::new()
        .with_url(url)
        .with_credentials("user", "password");
    HttpConfigFetcher::new(config).expect("client should build")
}

#[tokio::test]
async fn test_fetch_sets_basic_auth() {
    let (url, seen) = spawn_config_server("CONFIG\n").await;

    fetcher_for(&url).fetch().await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1, "exactly one request should be made");
    let auth = seen[0]
        .get("authorization")
        .expect("Authorization header should be set")
        .to_str()
        .unwrap();
    // base64("user:password")
    assert_eq!(auth, "Basic dXNlcjpwYXNzd29yZA==");
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let (url, _) = spawn_config_server("CONFIG\n").await;

    let body = fetcher_for(&url).fetch().await.unwrap();
    assert_eq!(body, b"CONFIG\n");
}

#[tokio::test]
async fn test_fetch_ignores_status_code() {
    let app = Router::new().route(
        "/config.xml",
        get(|| async { (StatusCode::UNAUTHORIZED, "Unauthorized") }),
    );
    let base = serve(app).await;

    let body = fetcher_for(&format!("{}/config.xml", base))
        .fetch()
        .await
        .unwrap();
    assert_eq!(body, b"Unauthorized");
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let err = fetcher_for("http://127.0.0.1:1/go/api/admin/config.xml")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Request(_)));
}
