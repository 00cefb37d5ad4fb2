//! Retrieval of the server configuration document

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use http::{FetchConfig, HttpConfigFetcher};

/// Error types for fetching the configuration
///
/// Any of these means no document was retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Trait for configuration retrieval - allows for different implementations
#[async_trait]
pub trait ConfigFetcher: Send + Sync {
    /// Fetch the raw configuration document
    async fn fetch(&self) -> Result<Vec<u8>, FetchError>;
}
