//! Resilient field extraction from parsed documents.
//!
//! Every extraction resolves to `Option<String>`: a selector that matches
//! nothing, a node with a missing attribute, or a mangled fragment all
//! yield `None`. Absence is data here, not an error.

use scraper::{Html, Selector};

/// Boilerplate lead-in eBay prepends to legacy listing titles.
const TITLE_BOILERPLATE: &str = "Details about";

/// Extracts cleaned text for a field, trying `selectors` in order.
///
/// The first selector with a structural match wins, even when the matched
/// node's text is empty. Only structural absence falls through to the
/// next selector.
pub fn extract(document: &Html, selectors: &[Selector]) -> Option<String> {
    for selector in selectors {
        if let Some(element) = document.select(selector).next() {
            let raw: String = element.text().collect();
            return Some(clean_text(&raw));
        }
    }
    None
}

/// Strips surrounding whitespace (including U+00A0) and the
/// "Details about" lead-in. Idempotent: cleaning clean text is a no-op.
pub fn clean_text(raw: &str) -> String {
    let mut text = raw.trim();
    while let Some(rest) = text.strip_prefix(TITLE_BOILERPLATE) {
        text = rest.trim_start();
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    static TITLE: LazyLock<Vec<Selector>> = LazyLock::new(|| {
        vec![
            Selector::parse("h1#itemTitle").unwrap(),
            Selector::parse("h1.fallback-title").unwrap(),
        ]
    });

    #[test]
    fn test_extract_first_selector_wins() {
        let html = Html::parse_document(
            r#"<h1 id="itemTitle">Primary</h1><h1 class="fallback-title">Secondary</h1>"#,
        );
        assert_eq!(extract(&html, &TITLE), Some("Primary".to_string()));
    }

    #[test]
    fn test_extract_falls_back_on_structural_absence() {
        let html = Html::parse_document(r#"<h1 class="fallback-title">Secondary</h1>"#);
        assert_eq!(extract(&html, &TITLE), Some("Secondary".to_string()));
    }

    #[test]
    fn test_extract_empty_text_still_wins() {
        // A structural match with empty text must not fall through.
        let html = Html::parse_document(
            r#"<h1 id="itemTitle"></h1><h1 class="fallback-title">Secondary</h1>"#,
        );
        assert_eq!(extract(&html, &TITLE), Some(String::new()));
    }

    #[test]
    fn test_extract_no_match_is_none() {
        let html = Html::parse_document("<p>nothing here</p>");
        assert_eq!(extract(&html, &TITLE), None);
    }

    #[test]
    fn test_extract_empty_selector_list() {
        let html = Html::parse_document("<h1 id=\"itemTitle\">x</h1>");
        assert_eq!(extract(&html, &[]), None);
    }

    #[test]
    fn test_clean_text_boilerplate_prefix() {
        assert_eq!(clean_text("Details about  LEGO Star Wars Set "), "LEGO Star Wars Set");
    }

    #[test]
    fn test_clean_text_idempotent() {
        let once = clean_text("Details about  LEGO Star Wars Set ");
        let twice = clean_text(&once);
        assert_eq!(once, twice);

        // Even stacked lead-ins reduce to a fixed point.
        let once = clean_text("Details about Details about Widget");
        assert_eq!(once, "Widget");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_clean_text_nbsp() {
        assert_eq!(clean_text("Details about \u{a0}Item with Special Chars™"), "Item with Special Chars™");
    }

    #[test]
    fn test_clean_text_no_boilerplate() {
        assert_eq!(clean_text("  plain title  "), "plain title");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_clean_text_boilerplate_mid_string_kept() {
        assert_eq!(clean_text("All Details about cars"), "All Details about cars");
    }

}
