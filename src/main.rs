//! ebay-crawler - Fast, stateless eBay price research CLI
//!
//! Uses TLS fingerprint emulation for reliable scraping.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ebay_crawler::commands::{ItemCommand, SearchCommand};
use ebay_crawler::config::{Config, OutputFormat};
use ebay_crawler::ebay::sites::Site;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ebay-crawler",
    version,
    about = "Fast, stateless eBay price research CLI",
    long_about = "Searches eBay listings, extracts per-item details, and reports the \
                  average price over a currency-filtered set of results."
)]
struct Cli {
    /// eBay marketplace to search
    #[arg(short, long, default_value = "us", global = true)]
    site: Site,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "EBAY_PROXY")]
    proxy: Option<String>,

    /// Delay between requests in milliseconds
    #[arg(long, default_value = "2000", global = true, env = "EBAY_DELAY")]
    delay: u64,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search listings and average their prices
    #[command(alias = "s")]
    Search {
        /// Search query
        #[arg(required_unless_present = "url")]
        query: Option<String>,

        /// Maximum number of item pages to fetch
        #[arg(short, long, default_value = "10")]
        max: usize,

        /// Currency token to average over (defaults to the site's token)
        #[arg(long, env = "EBAY_CURRENCY")]
        currency: Option<String>,

        /// Use an explicit search-results URL instead of building one
        #[arg(long)]
        url: Option<String>,
    },

    /// Look up item pages by URL
    #[command(alias = "i")]
    Item {
        /// Item page URL(s)
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// List supported marketplaces
    Sites,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.site = cli.site;
    config.format = cli.format;
    config.delay_ms = cli.delay;

    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    match cli.command {
        Commands::Search { query, max, currency, url } => {
            config.max_items = max;

            if let Some(currency) = currency {
                config.currency = Some(currency);
            }

            let cmd = SearchCommand::new(config);
            let output = match (url, query) {
                (Some(url), _) => cmd.execute_url(&url).await?,
                (None, Some(query)) => cmd.execute(&query).await?,
                // Unreachable: clap requires one of the two.
                (None, None) => anyhow::bail!("A search query or --url is required"),
            };
            println!("{}", output);
        }

        Commands::Item { urls } => {
            let cmd = ItemCommand::new(config);

            let output = if urls.len() == 1 {
                cmd.execute(&urls[0]).await?
            } else {
                cmd.execute_batch(&urls).await?
            };

            println!("{}", output);
        }

        Commands::Sites => {
            println!("Supported eBay marketplaces:\n");
            println!("{:<6} {:<20} {:<10}", "Code", "Domain", "Currency");
            println!("{:-<6} {:-<20} {:-<10}", "", "", "");

            for site in Site::all() {
                println!(
                    "{:<6} {:<20} {:<10}",
                    site.to_string(),
                    site.domain(),
                    site.currency_token()
                );
            }
        }
    }

    Ok(())
}
