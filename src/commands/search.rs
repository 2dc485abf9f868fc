//! Search command implementation: the fetch-extract-average driver.

use crate::config::Config;
use crate::ebay::client::{EbayClient, EbayFetch};
use crate::ebay::models::DetailRecord;
use crate::ebay::parser::Parser;
use crate::format::Formatter;
use crate::stats::average_price;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Executes a keyword search and averages item prices.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &str) -> Result<String> {
        let client = EbayClient::new(&self.config).await.context("Failed to create HTTP client")?;

        self.execute_with_client(&client, query).await
    }

    /// Executes against an explicit search-results URL.
    pub async fn execute_url(&self, url: &str) -> Result<String> {
        let client = EbayClient::new(&self.config).await.context("Failed to create HTTP client")?;

        self.execute_url_with_client(&client, url).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl EbayFetch,
        query: &str,
    ) -> Result<String> {
        info!("Searching for: {}", query);

        let html = client.search(query).await?;
        self.run(client, &html).await
    }

    /// Executes against an explicit search URL with a provided client.
    pub async fn execute_url_with_client(
        &self,
        client: &impl EbayFetch,
        url: &str,
    ) -> Result<String> {
        info!("Fetching search results: {}", url);

        let html = client.page(url).await?;
        self.run(client, &html).await
    }

    /// Collects item links from search HTML, fetches each item page, and
    /// formats the records plus the currency-filtered average.
    ///
    /// A failed item fetch or a blocked item page is logged and skipped;
    /// it contributes no record and never aborts the batch.
    async fn run(&self, client: &impl EbayFetch, search_html: &str) -> Result<String> {
        let parser = Parser::new();

        let mut links = parser.parse_search(search_html)?;
        links.truncate(self.config.max_items);
        debug!("Fetching {} item pages", links.len());

        let mut records: Vec<DetailRecord> = Vec::new();

        for url in &links {
            let html = match client.page(url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("Skipping {}: {}", url, e);
                    continue;
                }
            };

            match parser.parse_item(&html) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping {}: {}", url, e),
            }
        }

        let currency = self.config.currency_filter();
        let summary = average_price(&records, &currency);

        info!(
            "Extracted {} records, {} qualifying for {} average",
            records.len(),
            summary.as_ref().map_or(0, |s| s.sample_count),
            currency
        );

        let formatter = Formatter::new(self.config.format);
        Ok(format!(
            "{}\n\n{}",
            formatter.format_records(&records),
            formatter.format_summary(summary.as_ref())
        ))
    }
}
