//! Reference extraction from fetched bodies
//!
//! This module pulls candidate URL strings out of the three body kinds the
//! crawl understands: HTML (attributes and inline styles), CSS (`url()`
//! tokens) and JS (string literals under configured path prefixes). Bodies
//! of any other kind yield nothing.
//!
//! Extraction works on raw strings; resolving candidates against the
//! resource's URL and deciding scope happens in the crawler, not here.

mod css;
mod html;
mod js;

pub use css::extract_css_urls;
pub use html::extract_html_refs;
pub use js::{build_prefix_regex, extract_js_urls};

use crate::url::DiscoveryContext;
use regex::Regex;
use std::path::Path;

/// The body kinds the extractor can look inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Html,
    Css,
    Js,
    /// Anything else: persisted as-is, nothing extracted
    Other,
}

impl ResourceKind {
    /// Determines the kind of a fetched body
    ///
    /// The `Content-Type` header decides when it is recognizably HTML, CSS
    /// or JS. Servers that send generic types like `application/octet-stream`
    /// (or nothing at all) fall back to the extension of the mapped output
    /// path, so a stylesheet served without a content type is still scanned.
    ///
    /// # Arguments
    ///
    /// * `content_type` - The raw `Content-Type` header value, empty if absent
    /// * `mapped_path` - The relative path the body will be written to
    pub fn classify(content_type: &str, mapped_path: &Path) -> Self {
        let ct = content_type.to_ascii_lowercase();

        if ct.contains("text/html") || ct.contains("application/xhtml") {
            return Self::Html;
        }
        if ct.contains("text/css") {
            return Self::Css;
        }
        if ct.contains("javascript") || ct.contains("ecmascript") {
            return Self::Js;
        }

        let ext = mapped_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("html") | Some("htm") => Self::Html,
            Some("css") => Self::Css,
            Some("js") | Some("mjs") => Self::Js,
            _ => Self::Other,
        }
    }
}

/// A candidate reference pulled out of a fetched body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovered {
    /// The raw string as it appeared in the body
    pub candidate: String,
    /// Whether the string was a hyperlink or an asset reference
    pub context: DiscoveryContext,
}

impl Discovered {
    fn hyperlink(candidate: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            context: DiscoveryContext::Hyperlink,
        }
    }

    fn asset(candidate: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            context: DiscoveryContext::AssetRef,
        }
    }
}

/// Extracts references from fetched bodies, dispatched on [`ResourceKind`]
///
/// The extractor is built once per crawl and shared across workers; the JS
/// prefix regex is compiled at construction.
#[derive(Debug)]
pub struct Extractor {
    js_url_re: Option<Regex>,
}

impl Extractor {
    /// Creates an extractor with the given JS URL prefixes
    ///
    /// An empty prefix list disables JS extraction entirely.
    pub fn new(js_url_prefixes: &[String]) -> Self {
        Self {
            js_url_re: build_prefix_regex(js_url_prefixes),
        }
    }

    /// Extracts all candidate references from a body
    ///
    /// Bodies are decoded lossily; byte sequences that are not valid UTF-8
    /// cannot hold a usable URL reference anyway.
    ///
    /// # Arguments
    ///
    /// * `kind` - The body kind, from [`ResourceKind::classify`]
    /// * `body` - The raw response body
    pub fn extract(&self, kind: ResourceKind, body: &[u8]) -> Vec<Discovered> {
        match kind {
            ResourceKind::Html => {
                let text = String::from_utf8_lossy(body);
                extract_html_refs(&text)
            }
            ResourceKind::Css => {
                let text = String::from_utf8_lossy(body);
                extract_css_urls(&text)
                    .into_iter()
                    .map(Discovered::asset)
                    .collect()
            }
            ResourceKind::Js => match &self.js_url_re {
                Some(re) => {
                    let text = String::from_utf8_lossy(body);
                    extract_js_urls(re, &text)
                        .into_iter()
                        .map(Discovered::asset)
                        .collect()
                }
                None => Vec::new(),
            },
            ResourceKind::Other => Vec::new(),
        }
    }
}
