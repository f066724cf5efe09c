use crate::config::CrawlConfig;
use crate::url::extract_domain;
use url::Url;

/// Decides whether a canonical URL belongs to the crawl
///
/// A URL is in scope iff:
///
/// 1. Its scheme is `http` or `https`
/// 2. Its host equals the root domain exactly (no subdomain matching)
/// 3. Its path either has no file extension, or the extension appears in
///    the configured allowed list (`.html`, `.htm`, `.pdf` by default)
///
/// Scope is a pure predicate over the URL: visited-set dedup lives in the
/// [`Frontier`](crate::crawler::Frontier), not here.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitegrab::config::CrawlConfig;
/// use sitegrab::url::in_scope;
///
/// let config = CrawlConfig::default();
/// let url = Url::parse("https://example.com/report.pdf").unwrap();
/// assert!(in_scope(&url, "example.com", &config));
///
/// let url = Url::parse("https://example.com/logo.png").unwrap();
/// assert!(!in_scope(&url, "example.com", &config));
/// ```
pub fn in_scope(url: &Url, root_domain: &str, config: &CrawlConfig) -> bool {
    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    match extract_domain(url) {
        Some(domain) if domain == root_domain => {}
        _ => return false,
    }

    match path_extension(url.path()) {
        Some(ext) => config
            .allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&ext)),
        // Extensionless paths are ordinary pages
        None => true,
    }
}

/// Returns the dot-prefixed extension of the final path segment, lowercased
fn path_extension(path: &str) -> Option<String> {
    let segment = path.rsplit('/').next()?;
    let dot = segment.rfind('.')?;
    if dot == 0 || dot == segment.len() - 1 {
        // Hidden files and trailing dots are not extensions
        return None;
    }
    Some(segment[dot..].to_ascii_lowercase())
}
