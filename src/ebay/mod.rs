//! eBay-specific modules for HTTP client, parsing, and data models.

pub mod client;
pub mod extract;
pub mod models;
pub mod parser;
pub mod selectors;
pub mod sites;

pub use client::{EbayClient, EbayFetch};
pub use models::DetailRecord;
pub use parser::Parser;
pub use sites::Site;
