//! Sitefold main entry point
//!
//! This is the command-line interface for the Sitefold website mirrorer.

use anyhow::Context;
use clap::Parser;
use sitefold::config::{load_config, Config};
use sitefold::crawler::crawl;
use sitefold::summary::print_summary;
use sitefold::url::normalize_url;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitefold: mirror a website into a static copy
///
/// Sitefold crawls a site from a seed URL, follows every in-scope page and
/// asset reference (including references inside CSS and JS), and writes each
/// fetched resource unmodified into the output directory under a path
/// derived from its URL.
#[derive(Parser, Debug)]
#[command(name = "sitefold")]
#[command(version)]
#[command(about = "Mirror a website into a static copy", long_about = None)]
struct Cli {
    /// Seed URL to start mirroring from
    #[arg(value_name = "SEED_URL")]
    seed_url: String,

    /// Output directory (cleared before the crawl)
    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be mirrored without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration; without a config file every default applies
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    // Normalize the seed URL
    let seed = normalize_url(&cli.seed_url)
        .with_context(|| format!("Invalid seed URL: {}", cli.seed_url))?;

    if cli.dry_run {
        handle_dry_run(&config, &seed, &cli.output);
        return Ok(());
    }

    // Run the crawl
    let summary = crawl(config, seed, &cli.output)
        .await
        .context("Mirror crawl failed")?;

    print_summary(&summary);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitefold=info,warn"),
            1 => EnvFilter::new("sitefold=debug,info"),
            2 => EnvFilter::new("sitefold=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the crawl setup
fn handle_dry_run(config: &Config, seed: &url::Url, output: &std::path::Path) {
    println!("=== Sitefold Dry Run ===\n");

    println!("Seed URL: {}", seed);
    if let Some(host) = seed.host_str() {
        println!("Scope: {} and subdomains", host);
    }
    println!("Output directory: {}", output.display());

    println!("\nCrawler Configuration:");
    println!(
        "  Max concurrent fetches: {}",
        config.crawler.max_concurrent_fetches
    );
    println!(
        "  Request timeout: {}s",
        config.crawler.request_timeout_secs
    );
    println!(
        "  Connect timeout: {}s",
        config.crawler.connect_timeout_secs
    );

    println!("\nUser Agent:");
    println!(
        "  {}/{} (+{})",
        config.user_agent.name, config.user_agent.version, config.user_agent.contact_url
    );

    println!("\nJS URL Prefixes ({}):", config.assets.js_url_prefixes.len());
    for prefix in &config.assets.js_url_prefixes {
        println!("  - {}", prefix);
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would clear {} and start mirroring", output.display());
}
