//! ebay-crawler - Fast, stateless eBay price research CLI
//!
//! Searches eBay listings, extracts per-item details with fallback CSS
//! selectors, and averages prices over a currency-filtered result set.

pub mod commands;
pub mod config;
pub mod ebay;
pub mod format;
pub mod stats;

pub use config::Config;
pub use ebay::models::DetailRecord;
pub use ebay::sites::Site;
pub use stats::{average_price, PriceSummary};
