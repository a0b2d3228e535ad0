//! Crawl coordinator - main orchestration logic
//!
//! This module contains the main crawl loop that coordinates all aspects of
//! the mirroring process, including:
//! - Preparing the output directory and HTTP client
//! - Seeding and draining the frontier
//! - Running the bounded worker pool
//! - Folding worker outcomes back into the frontier and summary
//!
//! The frontier and summary are owned by the coordinator alone. Workers
//! fetch, persist and extract; everything they discover comes back over the
//! task's join handle and is applied single-threaded, so admission to the
//! crawl never races.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchOutcome};
use crate::crawler::frontier::{CrawlTask, Frontier};
use crate::extract::{Discovered, Extractor, ResourceKind};
use crate::pathmap::map_url;
use crate::store::MirrorStore;
use crate::summary::{CrawlSummary, FailureReason};
use crate::url::{classify, resolve_candidate, DiscoveryContext, DomainScope, UrlClass};
use crate::MirrorError;
use reqwest::Client;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use url::Url;

/// Progress is logged every this many fetch attempts
const PROGRESS_INTERVAL: u64 = 25;

/// Lifecycle of a crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlPhase {
    /// Created, nothing fetched yet
    Idle,
    /// Tasks queued and workers busy
    Running,
    /// Frontier empty, waiting for in-flight workers to finish
    Draining,
    /// All work finished
    Done,
}

/// Everything a worker needs to process one task
///
/// Cloned into each spawned task; all members are cheap handles.
#[derive(Clone)]
struct WorkerContext {
    client: Client,
    store: MirrorStore,
    extractor: Arc<Extractor>,
    scope: DomainScope,
}

/// What a worker produced for one task
#[derive(Debug)]
enum WorkerOutcome {
    /// Fetched and written to disk
    Saved {
        final_url: Url,
        discoveries: Vec<Discovered>,
    },

    /// Fetched but the write failed; discoveries are still processed so one
    /// bad file does not cut off the URLs referenced from it
    SaveFailed {
        final_url: Url,
        error: String,
        discoveries: Vec<Discovered>,
    },

    /// The fetch itself failed
    FetchFailed { reason: FailureReason },

    /// A redirect pointed outside the domain scope; the target was never
    /// requested
    RedirectedOffsite { target: Url },
}

/// A finished task paired with its outcome
#[derive(Debug)]
struct TaskOutcome {
    task: CrawlTask,
    outcome: WorkerOutcome,
}

/// Fetches, persists and extracts one task
///
/// Runs inside a spawned worker. Never touches the frontier or the summary;
/// everything the coordinator needs to know travels back in the outcome.
async fn process_task(ctx: WorkerContext, task: CrawlTask) -> TaskOutcome {
    let outcome = match fetch_url(&ctx.client, &task.url, &ctx.scope).await {
        FetchOutcome::Success {
            final_url,
            status,
            content_type,
            body,
        } => {
            // The fetcher stops redirect chains at the scope boundary, so
            // the final URL is always in scope here.
            let mapped = map_url(&final_url);
            let kind = ResourceKind::classify(&content_type, &mapped);

            let mut discoveries = ctx.extractor.extract(kind, &body);
            // Assets only feed further asset discovery; hyperlinks in an
            // asset body (an HTML snippet served as an asset, say) are
            // not followed.
            if task.class == UrlClass::Asset {
                discoveries.retain(|d| d.context == DiscoveryContext::AssetRef);
            }

            tracing::debug!(
                "Fetched {} (HTTP {}, {} bytes, {:?})",
                final_url,
                status,
                body.len(),
                kind
            );

            match ctx.store.write(&mapped, &body).await {
                Ok(()) => WorkerOutcome::Saved {
                    final_url,
                    discoveries,
                },
                Err(e) => WorkerOutcome::SaveFailed {
                    final_url,
                    error: e.to_string(),
                    discoveries,
                },
            }
        }

        FetchOutcome::RedirectedOffsite { target } => {
            WorkerOutcome::RedirectedOffsite { target }
        }

        FetchOutcome::HttpStatus { status } => WorkerOutcome::FetchFailed {
            reason: FailureReason::HttpStatus(status),
        },

        FetchOutcome::Network { error } => WorkerOutcome::FetchFailed {
            reason: FailureReason::Network(error),
        },
    };

    TaskOutcome { task, outcome }
}

/// Main crawl coordinator structure
pub struct Coordinator {
    ctx: WorkerContext,
    frontier: Frontier,
    summary: CrawlSummary,
    phase: CrawlPhase,
    max_concurrent: usize,
    seed: Url,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Prepares the output directory (clearing any previous contents) and
    /// builds the HTTP client. Both failures are fatal.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawl configuration
    /// * `seed` - The normalized seed URL
    /// * `output_dir` - Where the mirror is written
    pub fn new(config: Config, seed: Url, output_dir: &Path) -> Result<Self, MirrorError> {
        let scope = DomainScope::from_seed(&seed)?;
        let store = MirrorStore::prepare(output_dir)?;
        let client = build_http_client(&config.user_agent, &config.crawler)?;
        let extractor = Arc::new(Extractor::new(&config.assets.js_url_prefixes));

        tracing::info!(
            "Mirroring {} (scope: {} and subdomains) into {}",
            seed,
            scope.host(),
            store.root().display()
        );

        Ok(Self {
            ctx: WorkerContext {
                client,
                store,
                extractor,
                scope,
            },
            frontier: Frontier::new(),
            summary: CrawlSummary::new(),
            phase: CrawlPhase::Idle,
            max_concurrent: config.crawler.max_concurrent_fetches as usize,
            seed,
        })
    }

    /// Runs the crawl to completion
    ///
    /// The seed is fetched first, synchronously; a seed that cannot be
    /// fetched, or whose redirects leave the domain scope, fails the whole
    /// crawl. After that the worker pool runs until the frontier is empty
    /// and every in-flight task has been reaped.
    ///
    /// # Returns
    ///
    /// The summary of everything mirrored, failed and skipped.
    pub async fn run(mut self) -> Result<CrawlSummary, MirrorError> {
        let start = Instant::now();
        self.set_phase(CrawlPhase::Running);

        // The seed enters the seen set directly; it never sits in the queue.
        self.frontier.mark_seen(&self.seed);
        let seed_task = CrawlTask {
            url: self.seed.clone(),
            class: UrlClass::Page,
        };

        let seed_result = process_task(self.ctx.clone(), seed_task).await;
        match &seed_result.outcome {
            WorkerOutcome::FetchFailed { reason } => {
                return Err(MirrorError::SeedFetch {
                    url: self.seed.to_string(),
                    reason: reason.to_string(),
                });
            }
            WorkerOutcome::RedirectedOffsite { target } => {
                return Err(MirrorError::SeedFetch {
                    url: self.seed.to_string(),
                    reason: format!("Redirected out of scope to {}", target),
                });
            }
            _ => {}
        }
        self.apply_outcome(seed_result);

        let mut in_flight: JoinSet<TaskOutcome> = JoinSet::new();

        loop {
            // Top up the pool from the frontier
            while in_flight.len() < self.max_concurrent {
                let Some(task) = self.frontier.dequeue() else {
                    break;
                };
                in_flight.spawn(process_task(self.ctx.clone(), task));
            }

            // Frontier empty and nothing in flight: the crawl is complete
            if in_flight.is_empty() {
                break;
            }

            if self.frontier.is_empty() {
                self.set_phase(CrawlPhase::Draining);
            }

            match in_flight.join_next().await {
                Some(Ok(outcome)) => self.apply_outcome(outcome),
                Some(Err(e)) => tracing::error!("Worker task failed: {}", e),
                None => break,
            }

            // A draining worker may have discovered new URLs
            if self.phase == CrawlPhase::Draining && !self.frontier.is_empty() {
                self.set_phase(CrawlPhase::Running);
            }
        }

        self.set_phase(CrawlPhase::Done);
        self.summary.elapsed = start.elapsed();

        tracing::info!(
            "Crawl completed: {} mirrored, {} failed, {} skipped in {:.1}s ({} distinct URLs seen)",
            self.summary.fetched,
            self.summary.failed,
            self.summary.skipped,
            self.summary.elapsed.as_secs_f64(),
            self.frontier.seen_count()
        );

        Ok(self.summary)
    }

    /// Folds a finished task back into the frontier and summary
    fn apply_outcome(&mut self, result: TaskOutcome) {
        let TaskOutcome { task, outcome } = result;

        match outcome {
            WorkerOutcome::Saved {
                final_url,
                discoveries,
            } => {
                self.summary.record_fetched();
                if final_url != task.url {
                    // Record the redirect target so its other discoveries
                    // do not fetch the same resource again.
                    self.frontier.mark_seen(&final_url);
                }
                self.handle_discoveries(&final_url, discoveries);
            }

            WorkerOutcome::SaveFailed {
                final_url,
                error,
                discoveries,
            } => {
                tracing::warn!("Failed to save {}: {}", task.url, error);
                self.summary
                    .record_failure(task.url.to_string(), FailureReason::Persist(error));
                if final_url != task.url {
                    self.frontier.mark_seen(&final_url);
                }
                self.handle_discoveries(&final_url, discoveries);
            }

            WorkerOutcome::FetchFailed { reason } => {
                tracing::warn!("Failed to fetch {}: {}", task.url, reason);
                self.summary.record_failure(task.url.to_string(), reason);
            }

            WorkerOutcome::RedirectedOffsite { target } => {
                tracing::debug!("{} redirected out of scope to {}", task.url, target);
                self.frontier.mark_seen(&target);
                self.summary.record_skipped();
            }
        }

        let attempted = self.summary.attempted();
        if attempted > 0 && attempted % PROGRESS_INTERVAL == 0 {
            tracing::info!(
                "Progress: {} mirrored, {} failed, {} queued",
                self.summary.fetched,
                self.summary.failed,
                self.frontier.len()
            );
        }
    }

    /// Resolves, classifies and admits everything discovered in one body
    ///
    /// Candidates resolve against the resource's final URL, so relative
    /// references inside a redirected page land where the server put them.
    fn handle_discoveries(&mut self, base: &Url, discoveries: Vec<Discovered>) {
        for discovered in discoveries {
            let Some(resolved) = resolve_candidate(&discovered.candidate, base) else {
                continue;
            };

            match classify(&resolved, &self.ctx.scope, discovered.context) {
                UrlClass::OutOfScope => {
                    // Count each foreign URL once, however often it appears.
                    if self.frontier.mark_seen(&resolved) {
                        tracing::trace!("Skipping out-of-scope URL: {}", resolved);
                        self.summary.record_skipped();
                    }
                }
                class => {
                    let task = CrawlTask {
                        url: resolved.clone(),
                        class,
                    };
                    if self.frontier.enqueue(task) {
                        tracing::trace!("Queued {:?}: {}", class, resolved);
                    }
                }
            }
        }
    }

    /// Advances the crawl phase, logging the transition
    fn set_phase(&mut self, phase: CrawlPhase) {
        if self.phase != phase {
            tracing::debug!("Crawl phase: {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Discovered;
    use tempfile::TempDir;

    fn test_coordinator(dir: &TempDir) -> Coordinator {
        let seed = Url::parse("https://example.com/").unwrap();
        Coordinator::new(Config::default(), seed, &dir.path().join("out")).unwrap()
    }

    fn asset(candidate: &str) -> Discovered {
        Discovered {
            candidate: candidate.to_string(),
            context: DiscoveryContext::AssetRef,
        }
    }

    fn hyperlink(candidate: &str) -> Discovered {
        Discovered {
            candidate: candidate.to_string(),
            context: DiscoveryContext::Hyperlink,
        }
    }

    #[test]
    fn test_discoveries_are_deduplicated() {
        let dir = TempDir::new().unwrap();
        let mut coordinator = test_coordinator(&dir);
        let base = Url::parse("https://example.com/").unwrap();

        coordinator.handle_discoveries(
            &base,
            vec![asset("/style.css"), asset("/style.css"), asset("style.css")],
        );

        assert_eq!(coordinator.frontier.len(), 1);
    }

    #[test]
    fn test_out_of_scope_counted_once() {
        let dir = TempDir::new().unwrap();
        let mut coordinator = test_coordinator(&dir);
        let base = Url::parse("https://example.com/").unwrap();

        coordinator.handle_discoveries(
            &base,
            vec![
                hyperlink("https://other.org/a"),
                hyperlink("https://other.org/a"),
            ],
        );

        assert_eq!(coordinator.frontier.len(), 0);
        assert_eq!(coordinator.summary.skipped, 1);
    }

    #[test]
    fn test_unresolvable_candidates_ignored() {
        let dir = TempDir::new().unwrap();
        let mut coordinator = test_coordinator(&dir);
        let base = Url::parse("https://example.com/").unwrap();

        coordinator.handle_discoveries(
            &base,
            vec![hyperlink("#top"), asset("javascript:void(0)"), asset("")],
        );

        assert_eq!(coordinator.frontier.len(), 0);
        assert_eq!(coordinator.summary.skipped, 0);
    }

    #[test]
    fn test_hyperlink_and_asset_classes_assigned() {
        let dir = TempDir::new().unwrap();
        let mut coordinator = test_coordinator(&dir);
        let base = Url::parse("https://example.com/").unwrap();

        coordinator.handle_discoveries(&base, vec![hyperlink("/about"), asset("/img/x.png")]);

        let first = coordinator.frontier.dequeue().unwrap();
        let second = coordinator.frontier.dequeue().unwrap();
        assert_eq!(first.class, UrlClass::Page);
        assert_eq!(second.class, UrlClass::Asset);
    }
}
