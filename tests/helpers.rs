//! Test utility functions for go-stats

#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::Router;
use go_stats::{ConfigFetcher, FetchError};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Mock fetcher that returns a predefined body
pub struct MockFetcher {
    body: Option<Vec<u8>>,
    calls: Arc<AtomicUsize>,
}

impl MockFetcher {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: Some(body.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A fetcher whose request always fails
    pub fn unreachable() -> Self {
        Self {
            body: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigFetcher for MockFetcher {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.body {
            Some(body) => Ok(body.clone()),
            None => {
                // Port 1 on localhost is never listening
                let err = reqwest::get("http://127.0.0.1:1/").await.unwrap_err();
                Err(FetchError::Request(err))
            }
        }
    }
}

/// Headers of every request the test server received
pub type SeenHeaders = Arc<Mutex<Vec<HeaderMap>>>;

/// Local stand-in for a GoCD server that answers every GET with `body`
pub async fn spawn_config_server(body: &'static str) -> (String, SeenHeaders) {
    let seen: SeenHeaders = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/go/api/admin/config.xml",
            get(move |State(seen): State<SeenHeaders>, headers: HeaderMap| async move {
                seen.lock().unwrap().push(headers);
                body
            }),
        )
        .with_state(seen.clone());

    let url = serve(app).await;
    (format!("{}/go/api/admin/config.xml", url), seen)
}

/// Serve `app` on an ephemeral port and return its base URL
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
