//! CSS selectors for eBay HTML parsing.
//!
//! Each field gets an ordered fallback list rather than a single selector:
//! eBay's markup is the most volatile part of this system, and old listing
//! templates coexist with new ones. The first selector in a list that
//! structurally matches wins. Extend a list here when eBay changes their
//! HTML; call sites never need to change.
//!
//! **Update process**: When parsing fails, capture HTML sample,
//! add a selector to the relevant list, and add a test fixture.

use scraper::Selector;
use std::sync::LazyLock;

fn parse_all(css: &[&str]) -> Vec<Selector> {
    css.iter().map(|s| Selector::parse(s).unwrap()).collect()
}

/// Selectors for search results pages.
pub mod search {
    use super::*;

    /// Item page links, in document order. The first hit on the page is a
    /// promoted placement and gets dropped by the link collector.
    pub static ITEM_LINK: LazyLock<Vec<Selector>> = LazyLock::new(|| {
        parse_all(&[
            "a.s-item__link",
            "a[href*='/itm/']",
        ])
    });
}

/// Selectors for item detail pages, newest template last.
pub mod item {
    use super::*;

    /// Listing title.
    pub static TITLE: LazyLock<Vec<Selector>> = LazyLock::new(|| {
        parse_all(&[
            "h1#itemTitle",
            "h1.x-item-title__mainTitle span.ux-textspans--BOLD",
            "h1.x-item-title__mainTitle",
        ])
    });

    /// Price text, currency token included ("US $150.00").
    pub static PRICE: LazyLock<Vec<Selector>> = LazyLock::new(|| {
        parse_all(&[
            "span#prcIsum",
            "span#mm-saleDscPrc",
            ".x-price-primary span.ux-textspans",
        ])
    });

    /// Quantity-sold text ("25 sold").
    pub static SOLD: LazyLock<Vec<Selector>> = LazyLock::new(|| {
        parse_all(&[
            "span.vi-qtyS a",
            "a.vi-txt-underline",
            ".x-quantity__availability span.ux-textspans--SECONDARY",
        ])
    });
}

/// Selectors for detecting blocked or interstitial pages.
pub mod errors {
    use super::*;

    /// Captcha / "Pardon Our Interruption" challenge.
    pub static CHALLENGE: LazyLock<Vec<Selector>> = LazyLock::new(|| {
        parse_all(&[
            "form[action*='captcha']",
            "img[src*='captcha']",
            "#distilIdentificationBlock",
        ])
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_selectors_compile() {
        // Force evaluation of all lazy selector lists to ensure they compile
        assert!(!search::ITEM_LINK.is_empty());
        assert!(!item::TITLE.is_empty());
        assert!(!item::PRICE.is_empty());
        assert!(!item::SOLD.is_empty());
        assert!(!errors::CHALLENGE.is_empty());
    }

    #[test]
    fn test_legacy_template_matching() {
        let html = Html::parse_document(
            r#"<h1 id="itemTitle">Details about  Some Item</h1>
               <span id="prcIsum">US $10.00</span>"#,
        );

        assert!(html.select(&item::TITLE[0]).next().is_some());
        assert!(html.select(&item::PRICE[0]).next().is_some());
    }

    #[test]
    fn test_item_link_fallback_matches_itm_urls() {
        let html = Html::parse_document(
            r#"<a href="https://www.ebay.com/itm/123">plain link</a>"#,
        );

        assert!(html.select(&search::ITEM_LINK[0]).next().is_none());
        assert!(html.select(&search::ITEM_LINK[1]).next().is_some());
    }
}
