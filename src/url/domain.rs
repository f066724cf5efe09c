use url::Url;

/// Extracts the domain from a URL
///
/// Returns the host portion lowercased, or `None` for URLs without a host.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitegrab::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}
