//! URL handling module for Sitefold
//!
//! This module provides URL normalization, domain scoping, and resource
//! classification. Classification decides how a URL will be treated once
//! fetched: pages get both links and assets extracted from them, assets
//! only feed further asset discovery.

mod normalize;
mod scope;

pub use normalize::{normalize_url, resolve_candidate};
pub use scope::DomainScope;

use url::Url;

/// File extensions that mark a URL as an asset even when it was discovered
/// through a hyperlink
const ASSET_EXTENSIONS: &[&str] = &[
    "css", "js", "mjs", "png", "jpg", "jpeg", "gif", "webp", "svg", "ico", "avif", "bmp", "woff",
    "woff2", "ttf", "otf", "eot", "mp3", "mp4", "webm", "ogg", "wav", "pdf", "zip", "json", "xml",
    "txt", "map", "webmanifest",
];

/// How a URL was discovered inside a fetched body
///
/// The same URL can legitimately appear both ways; the first discovery wins
/// because the dedup set admits each URL once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryContext {
    /// Found in a navigational reference (anchor or canonical link)
    Hyperlink,
    /// Found in an asset reference (src, srcset, stylesheet href, CSS url(),
    /// JS string literal)
    AssetRef,
}

/// What the crawl will do with a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlClass {
    /// In scope, expected to be a page: fetch, persist, extract links and
    /// assets
    Page,
    /// In scope, expected to be an asset: fetch, persist, extract nested
    /// asset references only
    Asset,
    /// Outside the domain scope: never fetched
    OutOfScope,
}

/// Classifies a resolved URL for the crawl
///
/// Scope is checked first; an out-of-scope URL is never fetched no matter
/// how it was discovered. In-scope URLs discovered through asset references
/// are assets, as are hyperlinked URLs whose path ends in a known asset
/// extension (a plain `<a href="report.pdf">` should not be parsed as HTML).
/// Everything else is a page.
///
/// # Arguments
///
/// * `url` - The resolved, normalized URL
/// * `scope` - The crawl's domain scope
/// * `context` - How the URL was discovered
pub fn classify(url: &Url, scope: &DomainScope, context: DiscoveryContext) -> UrlClass {
    if !scope.contains(url) {
        return UrlClass::OutOfScope;
    }

    if context == DiscoveryContext::AssetRef || has_asset_extension(url) {
        UrlClass::Asset
    } else {
        UrlClass::Page
    }
}

/// Checks whether the final path segment carries a known asset extension
fn has_asset_extension(url: &Url) -> bool {
    let path = url.path();
    let segment = path.rsplit('/').next().unwrap_or("");

    let Some((_, ext)) = segment.rsplit_once('.') else {
        return false;
    };

    let ext = ext.to_ascii_lowercase();
    ASSET_EXTENSIONS.contains(&ext.as_str())
}
