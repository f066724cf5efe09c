//! Content extraction module
//!
//! Turns fetched document bytes into cleaned plain text plus metadata.
//! HTML documents additionally yield their outbound links; PDF documents
//! yield their document-info metadata.

mod html;
mod pdf;
mod text;

pub use text::clean_text;

use crate::config::CrawlConfig;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

/// Errors produced while extracting content from a fetched document
///
/// Extraction errors are per-URL and non-fatal: the worker that hits one
/// records no page and moves on.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF parse error: {0}")]
    Pdf(#[from] lopdf::Error),
}

/// The kind of document a record was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Html,
    Pdf,
}

impl DocumentKind {
    /// The tag written into the output artifact's `type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Pdf => "pdf",
        }
    }
}

/// One unit of extracted output, immutable once created
#[derive(Debug, Clone)]
pub struct PageRecord {
    /// Canonical URL the document was fetched from
    pub url: String,

    /// Source document kind
    pub kind: DocumentKind,

    /// Document title, if one was present
    pub title: Option<String>,

    /// Cleaned plain text content
    pub content: String,

    /// When extraction happened
    pub extracted_at: DateTime<Utc>,

    /// Document metadata (PDF info dictionary), absent for HTML
    pub metadata: Option<BTreeMap<String, String>>,
}

/// Extracted content plus the outbound links discovered alongside it
#[derive(Debug)]
pub struct Extracted {
    pub record: PageRecord,

    /// Raw hrefs exactly as they appeared on the page; canonicalization and
    /// scope filtering are the caller's concern
    pub links: Vec<String>,
}

/// Extracts normalized content from a fetched document
///
/// # Arguments
///
/// * `url` - The canonical URL the bytes were fetched from
/// * `bytes` - The response body
/// * `kind` - The declared document kind (from Content-Type or path)
/// * `config` - Crawl configuration (excluded tags, cleanup selectors)
///
/// # Returns
///
/// * `Ok(Extracted)` - A page record plus outbound links (HTML only)
/// * `Err(ExtractError)` - The byte buffer could not be parsed
pub fn extract(
    url: &Url,
    bytes: &[u8],
    kind: DocumentKind,
    config: &CrawlConfig,
) -> Result<Extracted, ExtractError> {
    match kind {
        DocumentKind::Html => {
            let body = String::from_utf8_lossy(bytes);
            let page = html::extract_html(&body, config);
            Ok(Extracted {
                record: PageRecord {
                    url: url.to_string(),
                    kind,
                    title: page.title,
                    content: page.content,
                    extracted_at: Utc::now(),
                    metadata: None,
                },
                links: page.links,
            })
        }
        DocumentKind::Pdf => {
            let doc = pdf::extract_pdf(bytes)?;
            let title = doc.metadata.get("title").cloned();
            Ok(Extracted {
                record: PageRecord {
                    url: url.to_string(),
                    kind,
                    title,
                    content: doc.content,
                    extracted_at: Utc::now(),
                    metadata: Some(doc.metadata),
                },
                links: Vec::new(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(DocumentKind::Html.as_str(), "html");
        assert_eq!(DocumentKind::Pdf.as_str(), "pdf");
    }

    #[test]
    fn test_extract_html_record() {
        let url = Url::parse("https://example.com/page").unwrap();
        let html = r#"<html><head><title>Hi</title></head>
            <body><p>Some text.</p><a href="/next">next</a></body></html>"#;
        let config = CrawlConfig::default();

        let extracted = extract(&url, html.as_bytes(), DocumentKind::Html, &config).unwrap();
        assert_eq!(extracted.record.kind, DocumentKind::Html);
        assert_eq!(extracted.record.title.as_deref(), Some("Hi"));
        assert!(extracted.record.content.contains("Some text."));
        assert_eq!(extracted.links, vec!["/next"]);
        assert!(extracted.record.metadata.is_none());
    }

    #[test]
    fn test_extract_malformed_pdf_is_error() {
        let url = Url::parse("https://example.com/broken.pdf").unwrap();
        let config = CrawlConfig::default();

        let result = extract(&url, b"not a pdf at all", DocumentKind::Pdf, &config);
        assert!(result.is_err());
    }
}
