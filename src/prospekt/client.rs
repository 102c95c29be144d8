//! HTTP client for prospektmaschine.de using wreq for TLS fingerprint emulation.

use crate::config::Config;
use crate::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;
use wreq_util::Emulation;

/// Trait for fetching listing pages - enables mocking for tests.
#[async_trait]
pub trait FlyerSource: Send + Sync {
    /// Fetches the page at `url` and returns its raw HTML.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Listing page client with browser impersonation.
pub struct ProspektClient {
    client: Client,
    accept_language: String,
}

impl ProspektClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            builder = builder.proxy(wreq::Proxy::all(proxy_url)?);
        }

        Ok(Self { client: builder.build()?, accept_language: config.accept_language.clone() })
    }
}

#[async_trait]
impl FlyerSource for ProspektClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8")
            .header("Accept-Language", self.accept_language.as_str())
            .header("Cache-Control", "no-cache")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus { status: status.as_u16(), url: url.to_string() });
        }

        let body = response.text().await?;
        info!("Fetched listing page: {} ({} bytes)", url, body.len());
        Ok(body)
    }
}
