//! Item lookup command implementation.

use crate::config::Config;
use crate::ebay::client::{EbayClient, EbayFetch};
use crate::ebay::models::DetailRecord;
use crate::ebay::parser::Parser;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::info;

/// Fetches explicit item URLs and prints their extracted records.
pub struct ItemCommand {
    config: Config,
}

impl ItemCommand {
    /// Creates a new item command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches a single item page and returns formatted output.
    pub async fn execute(&self, url: &str) -> Result<String> {
        let client = EbayClient::new(&self.config).await.context("Failed to create HTTP client")?;

        self.execute_with_client(&client, url).await
    }

    /// Fetches a single item with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl EbayFetch, url: &str) -> Result<String> {
        Self::validate_url(url)?;

        info!("Looking up item: {}", url);

        let html = client.page(url).await?;
        let record = Parser::new().parse_item(&html)?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_record(&record))
    }

    /// Fetches multiple item pages.
    pub async fn execute_batch(&self, urls: &[String]) -> Result<String> {
        let client = EbayClient::new(&self.config).await.context("Failed to create HTTP client")?;

        self.execute_batch_with_client(&client, urls).await
    }

    /// Fetches multiple items with a provided client (for testing).
    pub async fn execute_batch_with_client(
        &self,
        client: &impl EbayFetch,
        urls: &[String],
    ) -> Result<String> {
        let parser = Parser::new();
        let mut records: Vec<DetailRecord> = Vec::new();

        for url in urls {
            if Self::validate_url(url).is_err() {
                eprintln!("Skipping invalid item URL: {}", url);
                continue;
            }

            info!("Looking up item: {}", url);

            match client.page(url).await {
                Ok(html) => match parser.parse_item(&html) {
                    Ok(record) => records.push(record),
                    Err(e) => eprintln!("Failed to parse {}: {}", url, e),
                },
                Err(e) => eprintln!("Failed to fetch {}: {}", url, e),
            }
        }

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_records(&records))
    }

    fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("Invalid item URL: '{}'. Expected an absolute http(s) URL.", url);
        }
        Ok(())
    }
}
