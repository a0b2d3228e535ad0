//! HTML reference extraction
//!
//! Pulls candidate URLs out of an HTML document:
//! - hyperlinks from `<a>`/`<area>` href and `<link rel="canonical">`
//! - asset references from every other `href`, every `src`, every `srcset`
//!   candidate, and `url()` tokens inside inline `style` attributes

use super::css::extract_css_urls;
use super::Discovered;
use scraper::{ElementRef, Html, Selector};

/// Extracts all candidate references from an HTML document
///
/// Each reference carries its discovery context: anchors and canonical
/// links are hyperlinks, everything else is an asset reference. A
/// stylesheet `<link href>` therefore comes back as an asset, which is what
/// makes the crawl fetch and scan it.
///
/// # Arguments
///
/// * `html` - The HTML document text
///
/// # Returns
///
/// Raw candidate strings in document order, unresolved and undeduplicated.
pub fn extract_html_refs(html: &str) -> Vec<Discovered> {
    let document = Html::parse_document(html);
    let mut refs = Vec::new();

    // The selector list is a constant and parses; extraction is best-effort
    // either way.
    let Ok(selector) = Selector::parse("[src], [href], [srcset], [style]") else {
        return refs;
    };

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if is_hyperlink_element(&element) {
                refs.push(Discovered::hyperlink(href));
            } else {
                refs.push(Discovered::asset(href));
            }
        }

        if let Some(src) = element.value().attr("src") {
            refs.push(Discovered::asset(src));
        }

        if let Some(srcset) = element.value().attr("srcset") {
            for candidate in parse_srcset(srcset) {
                refs.push(Discovered::asset(candidate));
            }
        }

        if let Some(style) = element.value().attr("style") {
            for candidate in extract_css_urls(style) {
                refs.push(Discovered::asset(candidate));
            }
        }
    }

    refs
}

/// Decides whether an element's href is navigational
///
/// `<a>` and `<area>` always are. `<link>` is only navigational for
/// `rel="canonical"`; stylesheet, icon, preload and the rest are asset
/// references.
fn is_hyperlink_element(element: &ElementRef) -> bool {
    match element.value().name() {
        "a" | "area" => true,
        "link" => element
            .value()
            .attr("rel")
            .map(|rel| {
                rel.split_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("canonical"))
            })
            .unwrap_or(false),
        _ => false,
    }
}

/// Splits a `srcset` attribute into its URL candidates
///
/// Each comma-separated entry is `<url> [descriptor]`; the descriptor is
/// dropped.
fn parse_srcset(srcset: &str) -> Vec<String> {
    srcset
        .split(',')
        .filter_map(|entry| entry.split_whitespace().next())
        .filter(|url| !url.is_empty())
        .map(|url| url.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::DiscoveryContext;

    fn candidates(refs: &[Discovered], context: DiscoveryContext) -> Vec<&str> {
        refs.iter()
            .filter(|r| r.context == context)
            .map(|r| r.candidate.as_str())
            .collect()
    }

    #[test]
    fn test_anchor_is_hyperlink() {
        let refs = extract_html_refs(r#"<a href="/about">About</a>"#);
        assert_eq!(candidates(&refs, DiscoveryContext::Hyperlink), ["/about"]);
    }

    #[test]
    fn test_canonical_link_is_hyperlink() {
        let refs =
            extract_html_refs(r#"<link rel="canonical" href="https://example.com/page" />"#);
        assert_eq!(
            candidates(&refs, DiscoveryContext::Hyperlink),
            ["https://example.com/page"]
        );
    }

    #[test]
    fn test_stylesheet_link_is_asset() {
        let refs = extract_html_refs(r#"<link rel="stylesheet" href="/css/site.css" />"#);
        assert_eq!(
            candidates(&refs, DiscoveryContext::AssetRef),
            ["/css/site.css"]
        );
        assert!(candidates(&refs, DiscoveryContext::Hyperlink).is_empty());
    }

    #[test]
    fn test_icon_link_is_asset() {
        let refs = extract_html_refs(r#"<link rel="icon" href="/favicon.ico" />"#);
        assert_eq!(
            candidates(&refs, DiscoveryContext::AssetRef),
            ["/favicon.ico"]
        );
    }

    #[test]
    fn test_src_attributes_are_assets() {
        let html = r#"
            <img src="/img/logo.png" />
            <script src="/js/app.js"></script>
            <iframe src="/embed"></iframe>
        "#;
        let refs = extract_html_refs(html);
        let assets = candidates(&refs, DiscoveryContext::AssetRef);
        assert!(assets.contains(&"/img/logo.png"));
        assert!(assets.contains(&"/js/app.js"));
        assert!(assets.contains(&"/embed"));
    }

    #[test]
    fn test_srcset_yields_every_candidate() {
        let html = r#"<img srcset="/img/small.jpg 480w, /img/large.jpg 1024w" />"#;
        let refs = extract_html_refs(html);
        let assets = candidates(&refs, DiscoveryContext::AssetRef);
        assert_eq!(assets, ["/img/small.jpg", "/img/large.jpg"]);
    }

    #[test]
    fn test_srcset_with_density_descriptors() {
        let html = r#"<img srcset="/a.png 1x,/b.png 2x" />"#;
        let refs = extract_html_refs(html);
        let assets = candidates(&refs, DiscoveryContext::AssetRef);
        assert_eq!(assets, ["/a.png", "/b.png"]);
    }

    #[test]
    fn test_img_with_src_and_srcset_yields_both() {
        let html = r#"<img src="/fallback.jpg" srcset="/hi.jpg 2x" />"#;
        let refs = extract_html_refs(html);
        let assets = candidates(&refs, DiscoveryContext::AssetRef);
        assert!(assets.contains(&"/fallback.jpg"));
        assert!(assets.contains(&"/hi.jpg"));
    }

    #[test]
    fn test_inline_style_url() {
        let html = r#"<div style="background-image: url('/img/hero.jpg')">x</div>"#;
        let refs = extract_html_refs(html);
        assert_eq!(
            candidates(&refs, DiscoveryContext::AssetRef),
            ["/img/hero.jpg"]
        );
    }

    #[test]
    fn test_inline_style_data_uri_skipped() {
        let html = r#"<div style="background: url(data:image/gif;base64,R0lGOD)">x</div>"#;
        let refs = extract_html_refs(html);
        assert!(refs.is_empty());
    }

    #[test]
    fn test_malformed_html_still_extracts() {
        // html5ever recovers from unclosed tags.
        let html = r#"<p><a href="/one">one<a href="/two">two"#;
        let refs = extract_html_refs(html);
        let links = candidates(&refs, DiscoveryContext::Hyperlink);
        assert!(links.contains(&"/one"));
        assert!(links.contains(&"/two"));
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_html_refs("").is_empty());
    }

    #[test]
    fn test_area_is_hyperlink() {
        let html = r#"<map><area href="/region" shape="rect" /></map>"#;
        let refs = extract_html_refs(html);
        assert_eq!(candidates(&refs, DiscoveryContext::Hyperlink), ["/region"]);
    }
}
