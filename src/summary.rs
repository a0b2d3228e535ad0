//! Crawl summary and final reporting
//!
//! Per-resource failures are collected here as data rather than surfaced as
//! errors, so a run with broken links still completes and reports them all
//! at the end.

use std::fmt;
use std::time::Duration;

/// Why a single resource could not be mirrored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Server answered with a non-success status
    HttpStatus(u16),

    /// Network-level failure (timeout, connection refused, ...)
    Network(String),

    /// Body was fetched but could not be written to disk
    Persist(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus(status) => write!(f, "HTTP {}", status),
            Self::Network(error) => write!(f, "Network error: {}", error),
            Self::Persist(error) => write!(f, "Persist error: {}", error),
        }
    }
}

/// One failed resource
#[derive(Debug, Clone)]
pub struct FailureRecord {
    /// The URL that failed
    pub url: String,

    /// Why it failed
    pub reason: FailureReason,
}

/// Final accounting of a crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlSummary {
    /// Resources fetched and written to the output directory
    pub fetched: u64,

    /// Resources that failed to fetch or persist
    pub failed: u64,

    /// Out-of-scope URLs that were never requested: discovered foreign
    /// references, plus redirect targets outside the scope
    pub skipped: u64,

    /// Wall-clock duration of the crawl
    pub elapsed: Duration,

    /// Every failure, in the order it happened
    pub failures: Vec<FailureRecord>,
}

impl CrawlSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successfully mirrored resource
    pub fn record_fetched(&mut self) {
        self.fetched += 1;
    }

    /// Records a skipped out-of-scope URL
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Records a failed resource
    pub fn record_failure(&mut self, url: String, reason: FailureReason) {
        self.failed += 1;
        self.failures.push(FailureRecord { url, reason });
    }

    /// Total number of fetch attempts
    pub fn attempted(&self) -> u64 {
        self.fetched + self.failed
    }
}

/// Prints the summary to stdout in a formatted manner
///
/// # Arguments
///
/// * `summary` - The summary to display
pub fn print_summary(summary: &CrawlSummary) {
    println!("=== Mirror Summary ===\n");

    println!("Overview:");
    println!("  Resources mirrored: {}", summary.fetched);
    println!("  Resources failed: {}", summary.failed);
    println!("  Out-of-scope URLs skipped: {}", summary.skipped);
    println!("  Elapsed: {:.1}s", summary.elapsed.as_secs_f64());
    println!();

    if !summary.failures.is_empty() {
        println!("Failures ({}):", summary.failures.len());
        for record in &summary.failures {
            println!("  - {} ({})", record.url, record.reason);
        }
        println!();
    }

    let success_rate = if summary.attempted() > 0 {
        (summary.fetched as f64 / summary.attempted() as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Success Rate: {:.1}% ({} / {} fetch attempts)",
        success_rate,
        summary.fetched,
        summary.attempted()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counters() {
        let mut summary = CrawlSummary::new();
        summary.record_fetched();
        summary.record_fetched();
        summary.record_skipped();
        summary.record_failure(
            "https://example.com/broken".to_string(),
            FailureReason::HttpStatus(500),
        );

        assert_eq!(summary.fetched, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.attempted(), 3);
        assert_eq!(summary.failures.len(), 1);
    }

    #[test]
    fn test_failure_reason_display() {
        assert_eq!(FailureReason::HttpStatus(404).to_string(), "HTTP 404");
        assert_eq!(
            FailureReason::Network("Request timeout".to_string()).to_string(),
            "Network error: Request timeout"
        );
        assert_eq!(
            FailureReason::Persist("read-only filesystem".to_string()).to_string(),
            "Persist error: read-only filesystem"
        );
    }

    #[test]
    fn test_failures_keep_order() {
        let mut summary = CrawlSummary::new();
        summary.record_failure("https://a/".to_string(), FailureReason::HttpStatus(404));
        summary.record_failure("https://b/".to_string(), FailureReason::HttpStatus(500));

        assert_eq!(summary.failures[0].url, "https://a/");
        assert_eq!(summary.failures[1].url, "https://b/");
    }
}
