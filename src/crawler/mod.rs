//! Crawler module for resource fetching and crawl orchestration
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and failure classification
//! - The frontier queue and dedup set
//! - The bounded worker pool and overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;

pub use coordinator::{Coordinator, CrawlPhase};
pub use fetcher::{build_http_client, fetch_url, FetchOutcome};
pub use frontier::{CrawlTask, Frontier};

use crate::config::Config;
use crate::summary::CrawlSummary;
use crate::MirrorError;
use std::path::Path;
use url::Url;

/// Runs a complete mirror crawl
///
/// This is the main entry point for mirroring a site. It will:
/// 1. Prepare (clear and recreate) the output directory
/// 2. Build the HTTP client
/// 3. Fetch the seed and crawl everything reachable in scope
/// 4. Persist each fetched resource under its mapped path
///
/// # Arguments
///
/// * `config` - The crawl configuration
/// * `seed` - The normalized seed URL
/// * `output_dir` - Where the mirror is written
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl completed; per-resource failures are inside
/// * `Err(MirrorError)` - The seed could not be fetched or the output
///   directory could not be prepared
pub async fn crawl(config: Config, seed: Url, output_dir: &Path) -> Result<CrawlSummary, MirrorError> {
    let coordinator = Coordinator::new(config, seed, output_dir)?;
    coordinator.run().await
}
