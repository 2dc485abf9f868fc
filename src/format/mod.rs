//! Output formatting for detail records (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::ebay::models::DetailRecord;
use crate::stats::PriceSummary;

const NA: &str = "N/A";

/// Formats records and aggregate summaries for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single record.
    pub fn format_record(&self, record: &DetailRecord) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Table => self.table_single(record),
            OutputFormat::Markdown => self.markdown_single(record),
            OutputFormat::Csv => self.csv_records(std::slice::from_ref(record)),
        }
    }

    /// Formats multiple records.
    pub fn format_records(&self, records: &[DetailRecord]) -> String {
        if records.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No items found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Table => self.table_records(records),
            OutputFormat::Markdown => self.markdown_records(records),
            OutputFormat::Csv => self.csv_records(records),
        }
    }

    /// Formats the average-price summary, or the explicit no-data outcome.
    pub fn format_summary(&self, summary: Option<&PriceSummary>) -> String {
        match (self.format, summary) {
            (OutputFormat::Json, Some(s)) => {
                serde_json::to_string_pretty(s).unwrap_or_else(|_| "{}".to_string())
            }
            (OutputFormat::Json, None) => "null".to_string(),
            (OutputFormat::Markdown, Some(s)) => format!(
                "**Average price:** {} {:.2} ({} items)",
                s.currency, s.average, s.sample_count
            ),
            (OutputFormat::Csv, Some(s)) => {
                format!("currency,average,sample_count\n{},{:.2},{}", s.currency, s.average, s.sample_count)
            }
            (OutputFormat::Csv, None) => "currency,average,sample_count".to_string(),
            (_, Some(s)) => {
                format!("Average price: {} {:.2} ({} items)", s.currency, s.average, s.sample_count)
            }
            (_, None) => "No qualifying items to average.".to_string(),
        }
    }

    // Table formatting

    fn table_single(&self, record: &DetailRecord) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Title:     {}", record.title.as_deref().unwrap_or(NA)));
        lines.push(format!("Price:     {}", record.price.as_deref().unwrap_or(NA)));
        lines.push(format!("Currency:  {}", record.currency.as_deref().unwrap_or(NA)));
        lines.push(format!("Sold:      {}", record.total_sold.as_deref().unwrap_or(NA)));

        lines.join("\n")
    }

    fn table_records(&self, records: &[DetailRecord]) -> String {
        let price_width = 12;
        let currency_width = 8;
        let sold_width = 8;
        let title_width = 50;

        let mut lines = Vec::new();

        // Header
        lines.push(format!(
            "{:<price_width$}  {:<currency_width$}  {:<sold_width$}  {}",
            "Price", "Currency", "Sold", "Title"
        ));
        lines.push(format!(
            "{:-<price_width$}  {:-<currency_width$}  {:-<sold_width$}  {:-<title_width$}",
            "", "", "", ""
        ));

        // Rows
        for record in records {
            let title = record.title.as_deref().unwrap_or(NA);
            let title = if title.chars().count() > title_width {
                let truncated: String = title.chars().take(title_width - 3).collect();
                format!("{}...", truncated)
            } else {
                title.to_string()
            };

            lines.push(format!(
                "{:>price_width$}  {:<currency_width$}  {:>sold_width$}  {}",
                record.price.as_deref().unwrap_or(NA),
                record.currency.as_deref().unwrap_or(NA),
                record.total_sold.as_deref().unwrap_or(NA),
                title
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} items", records.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, record: &DetailRecord) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", record.title.as_deref().unwrap_or("(untitled)")));
        lines.push(String::new());

        if let Some(price) = &record.price {
            let currency = record.currency.as_deref().unwrap_or("");
            lines.push(format!("- **Price:** {} {}", currency, price).trim_end().to_string());
        }
        if let Some(sold) = &record.total_sold {
            lines.push(format!("- **Sold:** {}", sold));
        }

        lines.join("\n")
    }

    fn markdown_records(&self, records: &[DetailRecord]) -> String {
        let mut lines = Vec::new();

        lines.push("| Price | Currency | Sold | Title |".to_string());
        lines.push("|-------|----------|------|-------|".to_string());

        for record in records {
            let title = record.title.as_deref().unwrap_or(NA);
            let title = if title.chars().count() > 40 {
                let truncated: String = title.chars().take(37).collect();
                format!("{}...", truncated)
            } else {
                title.to_string()
            };

            lines.push(format!(
                "| {} | {} | {} | {} |",
                record.price.as_deref().unwrap_or(NA),
                record.currency.as_deref().unwrap_or(NA),
                record.total_sold.as_deref().unwrap_or(NA),
                title
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} items found*", records.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "title,price,currency,total_sold".to_string()
    }

    fn csv_records(&self, records: &[DetailRecord]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for record in records {
            lines.push(format!(
                "{},{},{},{}",
                Self::csv_escape(record.title.as_deref().unwrap_or("")),
                Self::csv_escape(record.price.as_deref().unwrap_or("")),
                Self::csv_escape(record.currency.as_deref().unwrap_or("")),
                Self::csv_escape(record.total_sold.as_deref().unwrap_or("")),
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
