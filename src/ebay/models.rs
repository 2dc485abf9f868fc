//! Data models for eBay listings.

use serde::{Deserialize, Serialize};

/// One item page's extracted fields.
///
/// Every field is optional: a listing can legitimately lack any of them,
/// and a record with all fields absent is still a valid record, produced
/// for example when eBay ships a template none of our selectors know.
/// Records are immutable once built and owned by whoever asked for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    /// Listing title, boilerplate lead-in stripped.
    pub title: Option<String>,
    /// Raw price string, currency symbol included ("$150.00").
    pub price: Option<String>,
    /// Marketplace currency token ("US", "EUR", ...).
    pub currency: Option<String>,
    /// Quantity-sold text as shown on the page ("1,234").
    pub total_sold: Option<String>,
}

impl DetailRecord {
    /// Returns true if no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.currency.is_none()
            && self.total_sold.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> DetailRecord {
        DetailRecord {
            title: Some("LEGO Star Wars Set".to_string()),
            price: Some("$150.00".to_string()),
            currency: Some("US".to_string()),
            total_sold: Some("25".to_string()),
        }
    }

    #[test]
    fn test_is_empty() {
        let record = DetailRecord { title: None, price: None, currency: None, total_sold: None };
        assert!(record.is_empty());

        assert!(!make_record().is_empty());

        let record = DetailRecord { total_sold: None, ..make_record() };
        assert!(!record.is_empty());
    }

    #[test]
    fn test_record_serde() {
        let record = make_record();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("LEGO Star Wars Set"));
        assert!(json.contains("$150.00"));

        let parsed: DetailRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_serde_absent_fields() {
        let record = DetailRecord { title: None, price: None, currency: None, total_sold: None };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: DetailRecord = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_empty());
    }
}
