//! Price aggregation across detail records.

use crate::ebay::models::DetailRecord;
use serde::Serialize;
use tracing::debug;

/// Average price over a currency-filtered record set.
///
/// Produced only when at least one record qualified: "no data" is
/// represented by the absence of a summary, never by a zero average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSummary {
    /// Arithmetic mean of the parsed prices.
    pub average: f64,
    /// Number of records that contributed to the mean.
    pub sample_count: usize,
    /// Currency token the records were filtered on.
    pub currency: String,
}

/// Averages the prices of records matching `currency`.
///
/// A record qualifies when its currency token equals the filter exactly;
/// records with an absent currency never qualify. Qualifying records with
/// an unparseable price are excluded from the mean, not counted as zero.
/// Returns `None` when nothing qualifies. Order independent.
pub fn average_price(records: &[DetailRecord], currency: &str) -> Option<PriceSummary> {
    let prices: Vec<f64> = records
        .iter()
        .filter(|r| r.currency.as_deref() == Some(currency))
        .filter_map(|r| r.price.as_deref().and_then(parse_amount))
        .collect();

    if prices.is_empty() {
        debug!("No qualifying {} prices among {} records", currency, records.len());
        return None;
    }

    let average = prices.iter().sum::<f64>() / prices.len() as f64;
    Some(PriceSummary { average, sample_count: prices.len(), currency: currency.to_string() })
}

/// Parses the leading numeric substring of a price string.
///
/// Currency symbols before the digits and grouping separators are
/// ignored, and both decimal conventions are accepted: "$1,234.56" ->
/// 1234.56, "100,00" -> 100.0, "1.234,56" -> 1234.56. Text with no
/// digits yields `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let numeric: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    normalize_separators(&numeric).parse().ok()
}

/// Rewrites a grouped numeric string into `f64`-parseable form.
///
/// When both '.' and ',' appear, the one further right is the decimal
/// mark. A lone comma group is a decimal mark only with exactly two
/// trailing digits ("100,00"); "1,234" is a thousands group. All other
/// separators are stripped.
fn normalize_separators(numeric: &str) -> String {
    let decimal_at = match (numeric.rfind('.'), numeric.rfind(',')) {
        (Some(dot), Some(comma)) => Some(dot.max(comma)),
        (Some(dot), None) => Some(dot),
        (None, Some(comma)) if numeric.len() == comma + 3 => Some(comma),
        _ => None,
    };

    numeric
        .char_indices()
        .filter_map(|(i, ch)| match ch {
            '.' | ',' if Some(i) == decimal_at => Some('.'),
            '.' | ',' => None,
            _ => Some(ch),
        })
        .collect()
}
