use url::Url;

/// Schemes a page can link to that are never fetchable documents
const SKIPPED_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// Canonicalizes an href discovered on a page
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Reject empty hrefs, fragment-only anchors, and non-document schemes
///    (`javascript:`, `mailto:`, `tel:`, `data:`)
/// 3. Resolve against the base URL (standard relative-reference resolution)
/// 4. Strip the fragment
/// 5. Strip a single trailing slash from a non-root path
///
/// Two URLs name the same work item iff their canonical forms compare equal;
/// scheme, host, path, and query are preserved as-is, so query variants stay
/// distinct and host casing beyond what the `url` crate lowercases itself is
/// untouched.
///
/// Resolution never panics and never errors out of the crawl: a href the
/// `url` crate cannot resolve yields `None`, which callers treat exactly
/// like an out-of-scope link.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitegrab::url::normalize;
///
/// let base = Url::parse("https://example.com/docs/").unwrap();
/// let link = normalize(&base, "guide/#intro").unwrap();
/// assert_eq!(link.as_str(), "https://example.com/docs/guide");
/// ```
pub fn normalize(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if SKIPPED_SCHEMES.iter().any(|s| href.starts_with(s)) {
        return None;
    }

    let mut url = base.join(href).ok()?;
    url.set_fragment(None);

    // One trailing slash, never the root path
    let path = url.path();
    if path.len() > 1 && path.ends_with('/') {
        let trimmed = path[..path.len() - 1].to_string();
        url.set_path(&trimmed);
    }

    Some(url)
}
