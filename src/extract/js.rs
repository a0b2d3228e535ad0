//! JS string-literal URL extraction
//!
//! Full JS parsing is out of reach for a static mirror, so this scanner
//! uses a narrow heuristic: quoted string literals that start with one of
//! the configured site path prefixes (by default `/wp-content/`) are taken
//! as asset URLs. URLs a script assembles at runtime are invisible to it.

use regex::Regex;

/// Builds the literal-matching regex for a set of path prefixes
///
/// Returns `None` for an empty prefix list, which disables JS extraction.
/// Prefixes are escaped, so configuration values are matched literally.
pub fn build_prefix_regex(prefixes: &[String]) -> Option<Regex> {
    if prefixes.is_empty() {
        return None;
    }

    let alternation = prefixes
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r#"["']((?:{alternation})[^"']+)["']"#);

    // The alternation is built from escaped literals, so the pattern is
    // always valid.
    Regex::new(&pattern).ok()
}

/// Extracts prefix-matching string literals from JS text
///
/// # Arguments
///
/// * `re` - The regex from [`build_prefix_regex`]
/// * `js` - The script text to scan
pub fn extract_js_urls(re: &Regex, js: &str) -> Vec<String> {
    re.captures_iter(js)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
