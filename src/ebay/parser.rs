//! HTML parser for eBay search results and item pages.

use crate::ebay::extract::extract;
use crate::ebay::models::DetailRecord;
use crate::ebay::selectors::{errors, item, search};
use anyhow::Result;
use scraper::Html;
use tracing::{debug, trace};

/// Parser for eBay HTML pages.
#[derive(Debug, Default)]
pub struct Parser;

impl Parser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses an item detail page into a record.
    ///
    /// Fails only on blocked/challenge pages. Missing fields never fail:
    /// a page matching none of our selectors parses into an all-absent
    /// record.
    pub fn parse_item(&self, html: &str) -> Result<DetailRecord> {
        let document = Html::parse_document(html);
        self.check_for_challenge(&document)?;

        let record = self.build_record(&document);
        trace!("Parsed item: {:?}", record.title);
        Ok(record)
    }

    /// Parses a search results page into the ranked item-page URLs.
    pub fn parse_search(&self, html: &str) -> Result<Vec<String>> {
        let document = Html::parse_document(html);
        self.check_for_challenge(&document)?;

        let links = self.collect_links(&document);
        debug!("Collected {} item links", links.len());
        Ok(links)
    }

    /// Builds a detail record from a parsed item page.
    ///
    /// Pure function of the document: same input, same record.
    pub fn build_record(&self, document: &Html) -> DetailRecord {
        let title = extract(document, &item::TITLE);

        // Currency and price share one node: "US $150.00" carries both.
        let (currency, price) = match extract(document, &item::PRICE) {
            Some(raw) => Self::split_price(&raw),
            None => (None, None),
        };

        let total_sold = extract(document, &item::SOLD).and_then(|raw| Self::first_token(&raw));

        DetailRecord { title, price, currency, total_sold }
    }

    /// Collects item-page URLs from a search results document, in
    /// document order, first entry dropped.
    ///
    /// The first hit on an eBay results page is a promoted placement, not
    /// a ranked result. With zero or one links the result is empty: the
    /// drop-first policy degrades to empty, it never underflows.
    pub fn collect_links(&self, document: &Html) -> Vec<String> {
        for selector in search::ITEM_LINK.iter() {
            let links: Vec<String> = document
                .select(selector)
                .filter_map(|e| e.value().attr("href"))
                .map(String::from)
                .collect();

            if !links.is_empty() {
                return links.into_iter().skip(1).collect();
            }
        }
        Vec::new()
    }

    /// Checks for captcha or interstitial challenge pages.
    fn check_for_challenge(&self, document: &Html) -> Result<()> {
        for selector in errors::CHALLENGE.iter() {
            if document.select(selector).next().is_some() {
                anyhow::bail!(
                    "Challenge page detected. eBay is blocking requests. \
                    Try using a proxy or waiting before retrying."
                );
            }
        }
        Ok(())
    }

    /// Splits raw price text into (currency token, price string).
    ///
    /// Two whitespace-separated tokens split directly: "US $150.00" ->
    /// ("US", "$150.00"); "EUR 100,00" -> ("EUR", "100,00"). The UK
    /// marketplace prints a single token with the symbol glued to the
    /// digits, so "£45.00" splits into ("£", "45.00"). Anything else
    /// ("InvalidPrice") carries no recognizable token and yields neither.
    fn split_price(raw: &str) -> (Option<String>, Option<String>) {
        let mut parts = raw.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some(currency), Some(amount)) => {
                (Some(currency.to_string()), Some(amount.to_string()))
            }
            (Some(token), None) => Self::split_symbol_price(token),
            _ => (None, None),
        }
    }

    /// Splits a glued symbol-price token like "£45.00" into ("£", "45.00").
    fn split_symbol_price(token: &str) -> (Option<String>, Option<String>) {
        const SYMBOLS: &[char] = &['£', '€', '$'];

        let mut chars = token.chars();
        match chars.next() {
            Some(symbol) if SYMBOLS.contains(&symbol) => {
                let amount = chars.as_str();
                if amount.starts_with(|c: char| c.is_ascii_digit()) {
                    (Some(symbol.to_string()), Some(amount.to_string()))
                } else {
                    (None, None)
                }
            }
            _ => (None, None),
        }
    }

    /// Returns the first whitespace token: "1,234 sold" -> "1,234".
    fn first_token(raw: &str) -> Option<String> {
        raw.split_whitespace().next().map(String::from)
    }
}
