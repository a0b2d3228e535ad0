//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawl, including:
//! - Building the HTTP client with a descriptive user agent string
//! - GET requests for page and asset bodies
//! - Manual redirect handling with a per-hop scope check
//! - Error classification into the failure categories the summary reports

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::url::{resolve_candidate, DomainScope};
use reqwest::{redirect::Policy, Client, Response};
use std::time::Duration;
use url::Url;

/// Maximum redirect hops before a chain counts as a loop
const MAX_REDIRECT_HOPS: usize = 10;

/// Result of a single fetch
///
/// Failures here are per-resource data, not crate errors: the coordinator
/// records them in the summary and keeps crawling.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched the resource
    Success {
        /// Final URL after redirects
        final_url: Url,
        /// HTTP status code
        status: u16,
        /// Content-Type header value, empty if absent
        content_type: String,
        /// Raw response body
        body: Vec<u8>,
    },

    /// A redirect pointed outside the domain scope; the target was never
    /// requested
    RedirectedOffsite {
        /// The out-of-scope redirect target
        target: Url,
    },

    /// Server answered with a non-success status
    HttpStatus {
        /// The HTTP status code
        status: u16,
    },

    /// Network-level failure (timeout, connection refused, TLS, ...)
    Network {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client used for the whole crawl
///
/// The user agent is assembled as `name/version (+contact-url)`. The client
/// itself never follows redirects; [`fetch_url`] walks each hop so a
/// redirect target is checked against the domain scope before any request
/// goes out. Bodies can be binary, so compression is negotiated and decoded
/// transparently.
///
/// # Arguments
///
/// * `user_agent` - Identification configuration
/// * `crawler` - Timeout configuration
///
/// # Example
///
/// ```no_run
/// use sitefold::config::{CrawlerConfig, UserAgentConfig};
/// use sitefold::crawler::build_http_client;
///
/// let client =
///     build_http_client(&UserAgentConfig::default(), &CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{} (+{})",
        user_agent.name, user_agent.version, user_agent.contact_url
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .connect_timeout(Duration::from_secs(crawler.connect_timeout_secs))
        .redirect(Policy::none()) // Handle redirects manually
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// Redirects are walked manually, at most `MAX_REDIRECT_HOPS` hops. Each
/// hop's target is resolved against the redirecting URL and checked against
/// the domain scope before it is requested; a chain that leaves the scope
/// stops at the boundary and the off-site target is never contacted.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `scope` - The domain scope redirect targets must stay inside
///
/// # Returns
///
/// A [`FetchOutcome`] carrying either the body (with the final URL after
/// redirects) or a classified failure.
pub async fn fetch_url(client: &Client, url: &Url, scope: &DomainScope) -> FetchOutcome {
    let mut current = url.clone();

    for _ in 0..MAX_REDIRECT_HOPS {
        let response = match client.get(current.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                // Classify error
                return if e.is_timeout() {
                    FetchOutcome::Network {
                        error: "Request timeout".to_string(),
                    }
                } else if e.is_connect() {
                    FetchOutcome::Network {
                        error: "Connection failed".to_string(),
                    }
                } else {
                    FetchOutcome::Network {
                        error: e.to_string(),
                    }
                };
            }
        };

        let status = response.status();

        if status.is_redirection() {
            let Some(target) = redirect_target(&response) else {
                // A redirect without a usable Location is a dead end.
                return FetchOutcome::HttpStatus {
                    status: status.as_u16(),
                };
            };

            if !scope.contains(&target) {
                return FetchOutcome::RedirectedOffsite { target };
            }

            current = target;
            continue;
        }

        if !status.is_success() {
            return FetchOutcome::HttpStatus {
                status: status.as_u16(),
            };
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        return match response.bytes().await {
            Ok(body) => FetchOutcome::Success {
                final_url,
                status: status.as_u16(),
                content_type,
                body: body.to_vec(),
            },
            Err(e) => FetchOutcome::Network {
                error: format!("Body read failed: {}", e),
            },
        };
    }

    FetchOutcome::Network {
        error: "Redirect loop or too many redirects".to_string(),
    }
}

/// Resolves a redirect response's Location header to the next hop
///
/// The header value goes through the same resolution as any discovered
/// candidate, so the next hop is normalized exactly like an enqueued URL.
fn redirect_target(response: &Response) -> Option<Url> {
    let location = response.headers().get("location")?.to_str().ok()?;
    resolve_candidate(location, response.url())
}
