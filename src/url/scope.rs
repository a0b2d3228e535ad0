//! Domain scope derived from the seed URL
//!
//! The scope decides which discovered URLs belong to the mirrored site. It
//! covers the seed's host and every subdomain of it; ports are ignored so
//! `example.com:8080` and `example.com` fall in the same scope.

use crate::UrlError;
use url::Url;

/// The set of hosts considered part of the crawl
#[derive(Debug, Clone)]
pub struct DomainScope {
    host: String,
}

impl DomainScope {
    /// Derives the scope from the seed URL's host
    ///
    /// # Arguments
    ///
    /// * `seed` - The normalized seed URL
    ///
    /// # Returns
    ///
    /// The scope, or [`UrlError::MissingHost`] if the seed has no host
    /// (which a normalized seed never does).
    pub fn from_seed(seed: &Url) -> Result<Self, UrlError> {
        let host = seed
            .host_str()
            .ok_or(UrlError::MissingHost)?
            .to_ascii_lowercase();
        Ok(Self { host })
    }

    /// Checks whether a URL's host is the scope host or a subdomain of it
    ///
    /// # Examples
    ///
    /// ```
    /// use sitefold::DomainScope;
    /// use url::Url;
    ///
    /// let seed = Url::parse("https://example.com/").unwrap();
    /// let scope = DomainScope::from_seed(&seed).unwrap();
    ///
    /// assert!(scope.contains(&Url::parse("https://example.com/a").unwrap()));
    /// assert!(scope.contains(&Url::parse("https://www.example.com/").unwrap()));
    /// assert!(!scope.contains(&Url::parse("https://example.org/").unwrap()));
    /// ```
    pub fn contains(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };
        let host = host.to_ascii_lowercase();

        host == self.host || host.ends_with(&format!(".{}", self.host))
    }

    /// Returns the scope host
    pub fn host(&self) -> &str {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope_for(seed: &str) -> DomainScope {
        let url = Url::parse(seed).unwrap();
        DomainScope::from_seed(&url).unwrap()
    }

    #[test]
    fn test_exact_host_in_scope() {
        let scope = scope_for("https://example.com/");
        assert!(scope.contains(&Url::parse("https://example.com/page").unwrap()));
    }

    #[test]
    fn test_subdomain_in_scope() {
        let scope = scope_for("https://example.com/");
        assert!(scope.contains(&Url::parse("https://cdn.example.com/a.css").unwrap()));
        assert!(scope.contains(&Url::parse("https://a.b.example.com/x").unwrap()));
    }

    #[test]
    fn test_suffix_lookalike_not_in_scope() {
        // notexample.com must not match example.com
        let scope = scope_for("https://example.com/");
        assert!(!scope.contains(&Url::parse("https://notexample.com/").unwrap()));
    }

    #[test]
    fn test_foreign_host_not_in_scope() {
        let scope = scope_for("https://example.com/");
        assert!(!scope.contains(&Url::parse("https://other.org/page").unwrap()));
    }

    #[test]
    fn test_parent_domain_not_in_scope() {
        // Seeding from a subdomain does not pull in the parent domain.
        let scope = scope_for("https://shop.example.com/");
        assert!(!scope.contains(&Url::parse("https://example.com/").unwrap()));
        assert!(scope.contains(&Url::parse("https://img.shop.example.com/").unwrap()));
    }

    #[test]
    fn test_port_ignored() {
        let scope = scope_for("http://example.com:8080/");
        assert!(scope.contains(&Url::parse("http://example.com/other").unwrap()));
        assert!(scope.contains(&Url::parse("http://example.com:9000/other").unwrap()));
    }

    #[test]
    fn test_host_case_insensitive() {
        let scope = scope_for("https://Example.COM/");
        assert!(scope.contains(&Url::parse("https://EXAMPLE.com/page").unwrap()));
    }
}
