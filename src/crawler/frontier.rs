//! Frontier queue and dedup set
//!
//! The frontier is the single source of truth for which URLs have entered
//! the crawl. Admission and the seen-check happen in one call on one owner
//! (the coordinator), so a URL can never be admitted twice no matter how
//! many workers discover it concurrently.

use crate::url::UrlClass;
use std::collections::{HashSet, VecDeque};
use url::Url;

/// A unit of crawl work: one URL and the treatment it gets once fetched
#[derive(Debug, Clone)]
pub struct CrawlTask {
    /// The normalized URL to fetch
    pub url: Url,

    /// How the body will be handled (page vs asset)
    pub class: UrlClass,
}

/// FIFO queue of pending tasks plus the set of every URL ever admitted
///
/// The seen set also records URLs that were *rejected* (out of scope,
/// redirect targets already handled), so repeated discoveries of the same
/// foreign URL are only counted once.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<CrawlTask>,
    seen: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a task if its URL has never been seen
    ///
    /// # Returns
    ///
    /// `true` if the task was queued, `false` if the URL was already seen.
    pub fn enqueue(&mut self, task: CrawlTask) -> bool {
        if !self.seen.insert(task.url.as_str().to_string()) {
            return false;
        }

        self.queue.push_back(task);
        true
    }

    /// Records a URL as seen without queueing it
    ///
    /// Used for URLs that must never be fetched (out of scope) or that were
    /// already handled under another spelling (redirect final URLs).
    ///
    /// # Returns
    ///
    /// `true` if the URL was newly recorded, `false` if already seen.
    pub fn mark_seen(&mut self, url: &Url) -> bool {
        self.seen.insert(url.as_str().to_string())
    }

    /// Takes the next task in admission order
    pub fn dequeue(&mut self) -> Option<CrawlTask> {
        self.queue.pop_front()
    }

    /// Returns whether any tasks are pending
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of pending tasks
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns the number of distinct URLs ever seen
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}
