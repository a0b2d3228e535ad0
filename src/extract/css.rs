//! CSS `url()` extraction

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the argument of a `url(...)` token
static CSS_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"url\(([^)]*)\)").unwrap());

/// Extracts URL candidates from CSS text
///
/// Handles stylesheet bodies and inline `style` attribute values alike.
/// Quotes around the argument are stripped; empty arguments and embedded
/// `data:` URIs are skipped.
///
/// # Arguments
///
/// * `css` - The CSS text to scan
///
/// # Examples
///
/// ```
/// use sitefold::extract::extract_css_urls;
///
/// let urls = extract_css_urls(r#"@font-face { src: url("/fonts/a.woff2"); }"#);
/// assert_eq!(urls, ["/fonts/a.woff2"]);
/// ```
pub fn extract_css_urls(css: &str) -> Vec<String> {
    CSS_URL_RE
        .captures_iter(css)
        .filter_map(|cap| {
            let raw = cap.get(1)?.as_str().trim();
            let unquoted = raw.trim_matches(|c| c == '\'' || c == '"').trim();

            if unquoted.is_empty() || unquoted.to_ascii_lowercase().starts_with("data:") {
                None
            } else {
                Some(unquoted.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquoted_url() {
        let urls = extract_css_urls("body { background: url(/img/bg.png); }");
        assert_eq!(urls, ["/img/bg.png"]);
    }

    #[test]
    fn test_single_quoted_url() {
        let urls = extract_css_urls("body { background: url('/img/bg.png'); }");
        assert_eq!(urls, ["/img/bg.png"]);
    }

    #[test]
    fn test_double_quoted_url() {
        let urls = extract_css_urls(r#"body { background: url("/img/bg.png"); }"#);
        assert_eq!(urls, ["/img/bg.png"]);
    }

    #[test]
    fn test_multiple_urls() {
        let css = r#"
            @font-face { src: url(/fonts/a.woff2) format("woff2"); }
            .hero { background-image: url('../img/hero.jpg'); }
        "#;
        let urls = extract_css_urls(css);
        assert_eq!(urls, ["/fonts/a.woff2", "../img/hero.jpg"]);
    }

    #[test]
    fn test_data_uri_skipped() {
        let css = "div { background: url(data:image/png;base64,iVBOR); }";
        assert!(extract_css_urls(css).is_empty());
    }

    #[test]
    fn test_quoted_data_uri_skipped() {
        let css = r#"div { background: url("data:image/svg+xml,<svg/>"); }"#;
        assert!(extract_css_urls(css).is_empty());
    }

    #[test]
    fn test_empty_url_skipped() {
        assert!(extract_css_urls("div { background: url(); }").is_empty());
        assert!(extract_css_urls("div { background: url(''); }").is_empty());
    }

    #[test]
    fn test_whitespace_around_argument() {
        let urls = extract_css_urls("div { background: url(  /img/pad.png  ); }");
        assert_eq!(urls, ["/img/pad.png"]);
    }

    #[test]
    fn test_absolute_url_kept() {
        let urls = extract_css_urls("div { background: url(https://cdn.example.com/x.png); }");
        assert_eq!(urls, ["https://cdn.example.com/x.png"]);
    }

    #[test]
    fn test_no_urls() {
        assert!(extract_css_urls("body { color: #333; }").is_empty());
    }
}
