//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::ebay::sites::Site;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// eBay marketplace
    #[serde(default)]
    pub site: Site,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Base delay between requests in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Random jitter added to delay (0 to this value)
    #[serde(default = "default_delay_jitter_ms")]
    pub delay_jitter_ms: u64,

    /// Maximum number of item pages to fetch per search
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Currency token to average over; defaults to the site's token
    #[serde(default)]
    pub currency: Option<String>,
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_delay_jitter_ms() -> u64 {
    3000
}

fn default_max_items() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: Site::Us,
            proxy: None,
            delay_ms: default_delay_ms(),
            delay_jitter_ms: default_delay_jitter_ms(),
            max_items: default_max_items(),
            format: OutputFormat::Table,
            currency: None,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("ebay-crawler").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(site) = std::env::var("EBAY_SITE") {
            if let Ok(s) = site.parse() {
                self.site = s;
            }
        }

        if let Ok(proxy) = std::env::var("EBAY_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(delay) = std::env::var("EBAY_DELAY") {
            if let Ok(d) = delay.parse() {
                self.delay_ms = d;
            }
        }

        if let Ok(currency) = std::env::var("EBAY_CURRENCY") {
            self.currency = Some(currency);
        }

        self
    }

    /// Returns the currency token to average over.
    pub fn currency_filter(&self) -> String {
        self.currency.clone().unwrap_or_else(|| self.site.currency_token().to_string())
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site, Site::Us);
        assert_eq!(config.delay_ms, 2000);
        assert_eq!(config.delay_jitter_ms, 3000);
        assert_eq!(config.max_items, 10);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.proxy.is_none());
        assert!(config.currency.is_none());
    }

    #[test]
    fn test_currency_filter_defaults_to_site_token() {
        let config = Config::default();
        assert_eq!(config.currency_filter(), "US");

        let config = Config { site: Site::De, ..Config::default() };
        assert_eq!(config.currency_filter(), "EUR");

        let config = Config { currency: Some("GBP".to_string()), ..Config::default() };
        assert_eq!(config.currency_filter(), "GBP");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);

        let err = "invalid".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("Unknown format"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            site = "uk"
            delay_ms = 3000
            max_items = 25
            currency = "GBP"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site, Site::Uk);
        assert_eq!(config.delay_ms, 3000);
        assert_eq!(config.max_items, 25);
        assert_eq!(config.currency, Some("GBP".to_string()));
    }

    #[test]
    fn test_config_from_toml_all_fields() {
        let toml = r#"
            site = "de"
            proxy = "socks5://localhost:1080"
            delay_ms = 5000
            delay_jitter_ms = 2000
            max_items = 50
            format = "json"
            currency = "EUR"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site, Site::De);
        assert_eq!(config.proxy, Some("socks5://localhost:1080".to_string()));
        assert_eq!(config.delay_ms, 5000);
        assert_eq!(config.delay_jitter_ms, 2000);
        assert_eq!(config.max_items, 50);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.currency, Some("EUR".to_string()));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            site = "fr"
            delay_ms = 4000
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.site, Site::Fr);
        assert_eq!(config.delay_ms, 4000);
    }

    #[test]
    fn test_config_from_file_not_found() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let result = Config::from_file(file.path());
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            site = "au"
            max_items = 3
            "#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.site, Site::Au);
        assert_eq!(config.max_items, 3);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            site: Site::Uk,
            proxy: Some("socks5://localhost:1080".to_string()),
            delay_ms: 3000,
            delay_jitter_ms: 1500,
            max_items: 20,
            format: OutputFormat::Json,
            currency: Some("GBP".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.site, config.site);
        assert_eq!(parsed.proxy, config.proxy);
        assert_eq!(parsed.delay_ms, config.delay_ms);
        assert_eq!(parsed.max_items, config.max_items);
        assert_eq!(parsed.format, config.format);
        assert_eq!(parsed.currency, config.currency);
    }
}
