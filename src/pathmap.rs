//! URL to filesystem path mapping
//!
//! Maps every fetched URL to a relative path under the output directory so
//! that a static file server pointed at the output serves the mirror with
//! the site's original URL structure.

use std::path::PathBuf;
use url::Url;

/// Maps a URL to the relative filesystem path its body is written to
///
/// The mapping uses only the URL path:
///
/// * an empty path or one ending in `/` maps into that directory's
///   `index.html`
/// * a final segment without a `.` is treated as an extensionless page and
///   also maps to `<path>/index.html`
/// * any other path is used verbatim
///
/// The query string is discarded, so URLs differing only by query collapse
/// onto one file. Whichever is written last wins; the crawl does not try to
/// disambiguate them.
///
/// # Examples
///
/// ```
/// use sitefold::pathmap::map_url;
/// use std::path::PathBuf;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/blog/").unwrap();
/// assert_eq!(map_url(&url), PathBuf::from("blog/index.html"));
///
/// let url = Url::parse("https://example.com/css/site.css").unwrap();
/// assert_eq!(map_url(&url), PathBuf::from("css/site.css"));
/// ```
pub fn map_url(url: &Url) -> PathBuf {
    let path = url.path().trim_start_matches('/');

    if path.is_empty() || path.ends_with('/') {
        return PathBuf::from(path).join("index.html");
    }

    let last_segment = path.rsplit('/').next().unwrap_or(path);
    if !last_segment.contains('.') {
        return PathBuf::from(path).join("index.html");
    }

    PathBuf::from(path)
}
