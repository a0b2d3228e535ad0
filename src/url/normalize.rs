//! URL normalization and candidate resolution
//!
//! Every URL entering the crawl goes through [`normalize_url`] (for the
//! seed) or [`resolve_candidate`] (for strings pulled out of fetched
//! bodies) so that the dedup set only ever sees one spelling per resource.

use crate::UrlError;
use url::Url;

/// Normalizes a URL string into a canonical [`Url`]
///
/// Normalization parses the string, requires an http or https scheme and a
/// host, drops any fragment, and collapses an empty query (`?` with nothing
/// after it) to no query at all.
///
/// # Arguments
///
/// * `input` - The URL string to normalize
///
/// # Returns
///
/// The canonical URL, or a [`UrlError`] describing why the string cannot
/// name a crawlable resource.
///
/// # Examples
///
/// ```
/// use sitefold::normalize_url;
///
/// let url = normalize_url("https://example.com/about#team").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/about");
/// ```
pub fn normalize_url(input: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(input.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlError::InvalidScheme(other.to_string())),
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);
    if url.query() == Some("") {
        url.set_query(None);
    }

    Ok(url)
}

/// Resolves a candidate string discovered in a fetched body against the URL
/// of the resource it was found in
///
/// Candidates come straight out of HTML attributes, CSS `url()` tokens and
/// JS string literals, so this function tolerates (and rejects) the noise
/// those sources produce: empty strings, bare fragments, and non-fetchable
/// schemes such as `javascript:`, `mailto:`, `tel:` and `data:`.
///
/// # Arguments
///
/// * `candidate` - The raw string as it appeared in the body
/// * `base` - The URL of the resource the string was found in
///
/// # Returns
///
/// `Some(url)` when the candidate resolves to a fetchable http(s) URL,
/// `None` otherwise.
pub fn resolve_candidate(candidate: &str, base: &Url) -> Option<Url> {
    let candidate = candidate.trim();

    if candidate.is_empty() || candidate.starts_with('#') {
        return None;
    }

    let lower = candidate.to_ascii_lowercase();
    for scheme in ["javascript:", "mailto:", "tel:", "data:"] {
        if lower.starts_with(scheme) {
            return None;
        }
    }

    let mut url = base.join(candidate).ok()?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return None,
    }

    url.set_fragment(None);
    if url.query() == Some("") {
        url.set_query(None);
    }

    Some(url)
}
