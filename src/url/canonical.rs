use crate::UrlError;
use url::Url;

/// Parses a URL string and reduces it to its canonical form
///
/// # Canonicalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject anything that is not HTTP or HTTPS
/// 3. Reject URLs without a host
/// 4. Remove the fragment (everything after #)
/// 5. Remove the query string (everything after ?)
///
/// Host lowercasing and default-port elision come from the `url` parser
/// itself. The result is the identity key used for deduplication, so
/// canonicalizing a canonical URL returns it unchanged.
///
/// # Examples
///
/// ```
/// use campus_crawl::url::canonicalize_url;
///
/// let url = canonicalize_url("https://Example.edu/fees?year=2024#hostel").unwrap();
/// assert_eq!(url.as_str(), "https://example.edu/fees");
/// ```
pub fn canonicalize_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;
    canonicalize(url)
}

/// Canonicalizes an already parsed URL
pub fn canonicalize(mut url: Url) -> Result<Url, UrlError> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    url.set_fragment(None);
    url.set_query(None);

    Ok(url)
}

/// Resolves an anchor href against the page it was found on and canonicalizes it
///
/// Returns None for hrefs that cannot lead to another crawlable page:
/// empty hrefs, `javascript:`, `mailto:`, `tel:` and `data:` links, and
/// anything that does not resolve to an HTTP(S) URL.
pub fn resolve_link(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    let absolute = page_url.join(href).ok()?;
    canonicalize(absolute).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Url {
        Url::parse("https://college.edu/admissions/index.html").unwrap()
    }

    #[test]
    fn test_remove_fragment() {
        let result = canonicalize_url("https://college.edu/page#section").unwrap();
        assert_eq!(result.as_str(), "https://college.edu/page");
    }

    #[test]
    fn test_remove_query() {
        let result = canonicalize_url("https://college.edu/page?utm_source=x&id=3").unwrap();
        assert_eq!(result.as_str(), "https://college.edu/page");
    }

    #[test]
    fn test_query_and_fragment_collapse() {
        let a = canonicalize_url("https://college.edu/fees?year=1#top").unwrap();
        let b = canonicalize_url("https://college.edu/fees?year=2").unwrap();
        let c = canonicalize_url("https://college.edu/fees#bottom").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "https://college.edu",
            "http://COLLEGE.edu:80/a/b/?q=1#f",
            "https://college.edu/path/with%20space?x#y",
            "https://college.edu:8443/x/",
        ] {
            let once = canonicalize_url(raw).unwrap();
            let twice = canonicalize_url(once.as_str()).unwrap();
            assert_eq!(once, twice, "not idempotent for {}", raw);
        }
    }

    #[test]
    fn test_path_is_preserved() {
        let result = canonicalize_url("https://college.edu/Courses/").unwrap();
        assert_eq!(result.as_str(), "https://college.edu/Courses/");
    }

    #[test]
    fn test_lowercase_host() {
        let result = canonicalize_url("https://COLLEGE.EDU/Page").unwrap();
        assert_eq!(result.as_str(), "https://college.edu/Page");
    }

    #[test]
    fn test_invalid_scheme() {
        let result = canonicalize_url("ftp://college.edu/page");
        assert!(matches!(result, Err(UrlError::InvalidScheme(_))));
    }

    #[test]
    fn test_malformed_url() {
        assert!(matches!(
            canonicalize_url("not a url"),
            Err(UrlError::Parse(_))
        ));
    }

    #[test]
    fn test_resolve_relative_link() {
        let resolved = resolve_link("fees.html?term=1#x", &page()).unwrap();
        assert_eq!(resolved.as_str(), "https://college.edu/admissions/fees.html");
    }

    #[test]
    fn test_resolve_root_relative_link() {
        let resolved = resolve_link("/contact", &page()).unwrap();
        assert_eq!(resolved.as_str(), "https://college.edu/contact");
    }

    #[test]
    fn test_fragment_only_link_resolves_to_page() {
        let resolved = resolve_link("#apply", &page()).unwrap();
        assert_eq!(
            resolved.as_str(),
            "https://college.edu/admissions/index.html"
        );
    }

    #[test]
    fn test_skip_special_schemes() {
        assert!(resolve_link("javascript:void(0)", &page()).is_none());
        assert!(resolve_link("mailto:office@college.edu", &page()).is_none());
        assert!(resolve_link("tel:+1234567890", &page()).is_none());
        assert!(resolve_link("data:text/html,<h1>x</h1>", &page()).is_none());
        assert!(resolve_link("   ", &page()).is_none());
    }
}
