use serde::Deserialize;

/// Main configuration structure for Sitefold
///
/// Every section and field has a default, so a missing config file and an
/// empty one both produce a usable configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub assets: AssetConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of concurrent fetches
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: u32,

    /// Overall per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: 8,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// User agent identification configuration
///
/// Assembled into a `name/version (+contact-url)` User-Agent header so site
/// operators can identify the mirroring client in their logs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the mirroring client
    pub name: String,

    /// Version of the mirroring client
    pub version: String,

    /// URL with information about the client
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "sitefold".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/sitefold/sitefold".to_string(),
        }
    }
}

/// Asset discovery configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Path prefixes that mark JS string literals as asset URLs
    #[serde(rename = "js-url-prefixes")]
    pub js_url_prefixes: Vec<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            js_url_prefixes: vec!["/wp-content/".to_string()],
        }
    }
}
