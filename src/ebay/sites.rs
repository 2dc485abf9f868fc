//! eBay marketplace domains and currency configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported eBay marketplaces with their domains and currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    #[default]
    Us,
    Uk,
    De,
    Fr,
    It,
    Es,
    Au,
    Ca,
}

impl Site {
    /// Returns the eBay domain for this marketplace.
    pub fn domain(&self) -> &'static str {
        match self {
            Site::Us => "ebay.com",
            Site::Uk => "ebay.co.uk",
            Site::De => "ebay.de",
            Site::Fr => "ebay.fr",
            Site::It => "ebay.it",
            Site::Es => "ebay.es",
            Site::Au => "ebay.com.au",
            Site::Ca => "ebay.ca",
        }
    }

    /// Returns the base URL for this marketplace.
    pub fn base_url(&self) -> String {
        format!("https://www.{}", self.domain())
    }

    /// Returns the currency token as it appears in listing price text.
    ///
    /// eBay prefixes prices with a short marketplace token rather than an
    /// ISO code: "US $150.00", "AU $89.95", "C $120.00", "EUR 100,00".
    /// The UK marketplace glues a bare symbol to the digits ("£45.00"),
    /// so its token is the symbol itself. This token is what detail
    /// records carry in their `currency` field and what the average-price
    /// filter matches against.
    pub fn currency_token(&self) -> &'static str {
        match self {
            Site::Us => "US",
            Site::Uk => "£",
            Site::De | Site::Fr | Site::It | Site::Es => "EUR",
            Site::Au => "AU",
            Site::Ca => "C",
        }
    }

    /// Returns the Accept-Language header value for this marketplace.
    pub fn accept_language(&self) -> &'static str {
        match self {
            Site::Us | Site::Ca | Site::Au => "en-US,en;q=0.9",
            Site::Uk => "en-GB,en;q=0.9",
            Site::De => "de-DE,de;q=0.9,en;q=0.8",
            Site::Fr => "fr-FR,fr;q=0.9,en;q=0.8",
            Site::It => "it-IT,it;q=0.9,en;q=0.8",
            Site::Es => "es-ES,es;q=0.9,en;q=0.8",
        }
    }

    /// Returns all supported marketplaces.
    pub fn all() -> &'static [Site] {
        &[Site::Us, Site::Uk, Site::De, Site::Fr, Site::It, Site::Es, Site::Au, Site::Ca]
    }
}

impl FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "us" | "com" => Ok(Site::Us),
            "uk" | "co.uk" => Ok(Site::Uk),
            "de" => Ok(Site::De),
            "fr" => Ok(Site::Fr),
            "it" => Ok(Site::It),
            "es" => Ok(Site::Es),
            "au" => Ok(Site::Au),
            "ca" => Ok(Site::Ca),
            _ => Err(format!(
                "Unknown site: '{}'. Supported: us, uk, de, fr, it, es, au, ca",
                s
            )),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Site::Us => "us",
            Site::Uk => "uk",
            Site::De => "de",
            Site::Fr => "fr",
            Site::It => "it",
            Site::Es => "es",
            Site::Au => "au",
            Site::Ca => "ca",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_default() {
        assert_eq!(Site::default(), Site::Us);
    }

    #[test]
    fn test_site_domains() {
        assert_eq!(Site::Us.domain(), "ebay.com");
        assert_eq!(Site::Uk.domain(), "ebay.co.uk");
        assert_eq!(Site::Au.domain(), "ebay.com.au");
    }

    #[test]
    fn test_site_base_url() {
        assert_eq!(Site::Us.base_url(), "https://www.ebay.com");
        assert_eq!(Site::De.base_url(), "https://www.ebay.de");
    }

    #[test]
    fn test_currency_tokens() {
        assert_eq!(Site::Us.currency_token(), "US");
        assert_eq!(Site::Uk.currency_token(), "£");
        assert_eq!(Site::De.currency_token(), "EUR");
        assert_eq!(Site::Fr.currency_token(), "EUR");
        assert_eq!(Site::Au.currency_token(), "AU");
        assert_eq!(Site::Ca.currency_token(), "C");
    }

    #[test]
    fn test_site_from_str() {
        assert_eq!("us".parse::<Site>().unwrap(), Site::Us);
        assert_eq!("UK".parse::<Site>().unwrap(), Site::Uk);
        assert_eq!("co.uk".parse::<Site>().unwrap(), Site::Uk);
        assert!("xx".parse::<Site>().is_err());
    }

    #[test]
    fn test_site_display_roundtrip() {
        for site in Site::all() {
            let parsed: Site = site.to_string().parse().unwrap();
            assert_eq!(parsed, *site);
        }
    }

    #[test]
    fn test_accept_language() {
        assert_eq!(Site::Us.accept_language(), "en-US,en;q=0.9");
        assert_eq!(Site::De.accept_language(), "de-DE,de;q=0.9,en;q=0.8");
    }
}
