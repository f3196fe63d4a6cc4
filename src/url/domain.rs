use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host (which shouldn't happen for valid HTTP(S) URLs), it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use campus_crawl::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.edu/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.edu".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns true if `url` lives on the same host and port as `seed`
///
/// Subdomains count as different hosts; `www.college.edu` is not internal to
/// `college.edu`.
pub fn is_internal_link(seed: &Url, url: &Url) -> bool {
    match (extract_domain(seed), extract_domain(url)) {
        (Some(seed_host), Some(host)) => {
            seed_host == host && seed.port_or_known_default() == url.port_or_known_default()
        }
        _ => false,
    }
}
