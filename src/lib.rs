//! Sitefold: mirror a live website into a self-contained static copy
//!
//! This crate implements a crawler that fetches a site starting from a seed
//! URL, discovers linked pages and referenced assets (including assets
//! referenced from inside fetched CSS and JS bodies), and persists every
//! fetched resource unmodified under a filesystem path derived from its URL.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod pathmap;
pub mod store;
pub mod summary;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sitefold operations
///
/// Per-URL fetch and persist failures are deliberately *not* represented
/// here: they are recorded in the [`summary::CrawlSummary`] and the crawl
/// continues. A crawl only fails as a whole when the seed cannot be fetched
/// or the output directory cannot be prepared.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to prepare output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Seed fetch failed for {url}: {reason}")]
    SeedFetch { url: String, reason: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for sitefold operations
pub type Result<T> = std::result::Result<T, MirrorError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::crawl;
pub use self::url::{normalize_url, DiscoveryContext, DomainScope, UrlClass};
pub use summary::{CrawlSummary, FailureRecord};
