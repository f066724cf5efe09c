//! HTML content extraction
//!
//! Pulls the title, visible text, and outbound links out of an HTML
//! document. Links are always collected from the original, unmodified tree:
//! navigation bars and footers are prime link carriers even though their
//! text is excluded from the content.

use crate::config::CrawlConfig;
use crate::extract::clean_text;
use scraper::node::Node;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Extracted fields of one HTML document
#[derive(Debug, Clone)]
pub struct HtmlContent {
    /// The page title (from the `<title>` tag)
    pub title: Option<String>,

    /// Cleaned visible text
    pub content: String,

    /// Raw href values of every anchor on the page
    pub links: Vec<String>,
}

/// Extracts title, visible text, and links from an HTML body
///
/// `scraper` documents are immutable, so "removing" excluded tags and
/// cleanup-selector matches is expressed as skipping those subtrees during
/// the text walk; the result is the same text a removal pass would leave.
pub fn extract_html(body: &str, config: &CrawlConfig) -> HtmlContent {
    let document = Html::parse_document(body);

    let links = collect_links(&document);
    let title = extract_title(&document);
    let content = collect_visible_text(&document, config);

    HtmlContent {
        title,
        content,
        links,
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Collects every anchor href, in document order, from the unmodified tree
fn collect_links(document: &Html) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                links.push(href.to_string());
            }
        }
    }

    links
}

/// Collects visible text, skipping excluded tags and cleanup selectors
///
/// The joining rule is deterministic: text nodes are trimmed, empty nodes
/// dropped, the rest joined by single spaces, and the result passed through
/// [`clean_text`].
fn collect_visible_text(document: &Html, config: &CrawlConfig) -> String {
    // Mark the roots of every subtree the configuration excludes. The head
    // is always excluded: its text (title, inline styles) is never visible
    // page content.
    let mut removed = HashSet::new();
    if let Ok(selector) = Selector::parse("head") {
        for element in document.select(&selector) {
            removed.insert(element.id());
        }
    }
    for pattern in config
        .excluded_tags
        .iter()
        .chain(config.clean_selectors.iter())
    {
        let Ok(selector) = Selector::parse(pattern) else {
            // Validation rejects these up front; tolerate them here anyway
            tracing::debug!("skipping unparseable selector '{}'", pattern);
            continue;
        };
        for element in document.select(&selector) {
            removed.insert(element.id());
        }
    }

    let mut parts: Vec<&str> = Vec::new();
    for node in document.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            if node.ancestors().any(|a| removed.contains(&a.id())) {
                continue;
            }
            let piece = text.trim();
            if !piece.is_empty() {
                parts.push(piece);
            }
        }
    }

    clean_text(&parts.join(" "))
}
