//! Configuration module for Sitefold
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. A config file is optional; [`Config::default`] is a complete,
//! valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use sitefold::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitefold.toml")).unwrap();
//! println!("Crawler will use {} workers", config.crawler.max_concurrent_fetches);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AssetConfig, Config, CrawlerConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::load_config;
