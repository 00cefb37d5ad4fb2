//! HTTPS fetcher with basic authentication

use super::{ConfigFetcher, FetchError};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Default location of the GoCD admin config endpoint
pub const DEFAULT_URL: &str = "http://localhost:8153/go/api/admin/config.xml";

/// Configuration for the HTTP fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// URL of the config file
    pub url: String,

    /// Basic auth user
    pub user: String,

    /// Basic auth password
    pub password: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user: "user".to_string(),
            password: "pwd".to_string(),
        }
    }
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = user.into();
        self.password = password.into();
        self
    }
}

/// Fetches the config with a single GET
///
/// Server certificates are never verified, so self-signed GoCD servers work
/// out of the box. The status code is not interpreted: any response whose
/// body can be read is returned as-is.
#[derive(Debug, Clone)]
pub struct HttpConfigFetcher {
    config: FetchConfig,
    client: reqwest::Client,
}

impl HttpConfigFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(FetchError::Client)?;
        warn!("TLS certificate verification is disabled");

        Ok(Self { config, client })
    }
}

#[async_trait]
impl ConfigFetcher for HttpConfigFetcher {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        info!("Fetching config from {}", self.config.url);

        let resp = self
            .client
            .get(&self.config.url)
            .basic_auth(&self.config.user, Some(&self.config.password))
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = resp.status();
        if status.is_success() {
            debug!("Server responded with {}", status);
        } else {
            warn!("Server responded with {}, using body anyway", status);
        }

        let body = resp.bytes().await.map_err(FetchError::Body)?;
        debug!("Read {} bytes", body.len());
        Ok(body.to_vec())
    }
}
