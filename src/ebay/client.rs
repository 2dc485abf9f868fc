//! HTTP client for eBay requests using wreq for TLS fingerprint emulation.

use crate::config::Config;
use crate::ebay::sites::Site;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::RngExt;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Trait for eBay page fetching - enables mocking for tests.
#[async_trait]
pub trait EbayFetch: Send + Sync {
    /// Performs a keyword search and returns the HTML response.
    async fn search(&self, query: &str) -> Result<String>;

    /// Fetches an arbitrary page (item page or explicit search URL).
    async fn page(&self, url: &str) -> Result<String>;

    /// Returns the configured marketplace.
    fn site(&self) -> Site;
}

/// eBay HTTP client with browser impersonation and anti-bot measures.
pub struct EbayClient {
    client: Client,
    site: Site,
    delay_ms: u64,
    delay_jitter_ms: u64,
    base_url: Option<String>,
}

impl EbayClient {
    /// Creates a new eBay client with the given configuration.
    pub async fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None).await
    }

    /// Creates a new eBay client with an optional custom base URL (for testing).
    pub async fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10));

        // Configure proxy if specified
        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            site: config.site,
            delay_ms: config.delay_ms,
            delay_jitter_ms: config.delay_jitter_ms,
            base_url,
        })
    }

    /// Returns the base URL (custom for testing, or site-based for production).
    fn base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| self.site.base_url())
    }

    /// Performs a GET request with all anti-bot measures.
    async fn get(&self, url: &str) -> Result<String> {
        // Add human-like delay with jitter
        self.delay().await;

        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8")
            .header("Accept-Language", self.site.accept_language())
            .header("Accept-Encoding", "gzip, deflate, br")
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .header("Sec-Ch-Ua", "\"Chromium\";v=\"131\", \"Not_A Brand\";v=\"24\"")
            .header("Sec-Ch-Ua-Mobile", "?0")
            .header("Sec-Ch-Ua-Platform", "\"macOS\"")
            .header("Sec-Fetch-Dest", "document")
            .header("Sec-Fetch-Mode", "navigate")
            .header("Sec-Fetch-Site", "none")
            .header("Sec-Fetch-User", "?1")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == 503 {
            warn!("Rate limited (503). Consider using a proxy or increasing delay.");
            anyhow::bail!("Rate limited by eBay. Try increasing --delay or using a proxy.");
        }

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }

    /// Adds a random delay to mimic human behavior.
    async fn delay(&self) {
        if self.delay_ms == 0 {
            return;
        }

        let jitter = if self.delay_jitter_ms > 0 {
            rand::rng().random_range(0..=self.delay_jitter_ms)
        } else {
            0
        };

        let total_delay = self.delay_ms + jitter;
        debug!("Delaying {}ms", total_delay);
        tokio::time::sleep(Duration::from_millis(total_delay)).await;
    }
}

#[async_trait]
impl EbayFetch for EbayClient {
    async fn search(&self, query: &str) -> Result<String> {
        let url = format!("{}/sch/i.html?_nkw={}", self.base_url(), urlencoding::encode(query));

        info!("Searching: {}", query);
        self.get(&url).await
    }

    async fn page(&self, url: &str) -> Result<String> {
        info!("Fetching page: {}", url);
        self.get(url).await
    }

    fn site(&self) -> Site {
        self.site
    }
}
