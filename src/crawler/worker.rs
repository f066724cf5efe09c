//! Fetch-and-extract worker
//!
//! One worker handles exactly one URL: fetch the bytes, decide the document
//! kind, run extraction, and hand everything back to the coordinator as a
//! tagged outcome. Failures never cross the worker boundary; they become
//! `record: None` and a log line.

use crate::config::CrawlConfig;
use crate::crawler::fetcher::{fetch_with_retries, FetchedDocument};
use crate::extract::{extract, DocumentKind, PageRecord};
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// Result of processing one URL
#[derive(Debug)]
pub struct WorkerOutcome {
    /// The URL that was processed
    pub url: Url,

    /// The extracted record, or `None` if fetch or extraction failed
    pub record: Option<PageRecord>,

    /// Raw hrefs discovered on the page (HTML only)
    pub links: Vec<String>,
}

impl WorkerOutcome {
    pub(crate) fn failed(url: Url) -> Self {
        Self {
            url,
            record: None,
            links: Vec::new(),
        }
    }
}

/// Fetches and extracts one URL
///
/// Per-URL failures (non-2xx status, timeout, transport error, unparseable
/// document) are swallowed here: the outcome carries no record, the URL is
/// still counted as visited by the coordinator, and the crawl continues.
pub async fn process_url(client: Client, config: Arc<CrawlConfig>, url: Url) -> WorkerOutcome {
    let fetched = match fetch_with_retries(&client, url.as_str(), &config).await {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("fetch failed for {}: {}", url, e);
            return WorkerOutcome::failed(url);
        }
    };

    let kind = document_kind(&fetched, &url);
    match extract(&url, &fetched.body, kind, &config) {
        Ok(extracted) => {
            tracing::info!(
                "processed {} ({}, {} links)",
                url,
                kind.as_str(),
                extracted.links.len()
            );
            WorkerOutcome {
                url,
                record: Some(extracted.record),
                links: extracted.links,
            }
        }
        Err(e) => {
            tracing::warn!("extraction failed for {}: {}", url, e);
            WorkerOutcome::failed(url)
        }
    }
}

/// Decides the document kind from the Content-Type header, falling back to
/// the URL's path extension
fn document_kind(fetched: &FetchedDocument, url: &Url) -> DocumentKind {
    if fetched.content_type.contains("application/pdf")
        || url.path().to_ascii_lowercase().ends_with(".pdf")
    {
        DocumentKind::Pdf
    } else {
        DocumentKind::Html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::fetcher::build_http_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn doc(content_type: &str) -> FetchedDocument {
        FetchedDocument {
            status: 200,
            content_type: content_type.to_string(),
            body: Vec::new(),
        }
    }

    #[test]
    fn test_kind_from_content_type() {
        let url = Url::parse("https://example.com/download").unwrap();
        assert_eq!(
            document_kind(&doc("application/pdf"), &url),
            DocumentKind::Pdf
        );
        assert_eq!(
            document_kind(&doc("text/html; charset=utf-8"), &url),
            DocumentKind::Html
        );
    }

    #[test]
    fn test_kind_from_path_extension() {
        let url = Url::parse("https://example.com/report.PDF").unwrap();
        // Server lied about the type; the extension wins
        assert_eq!(
            document_kind(&doc("application/octet-stream"), &url),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_kind_defaults_to_html() {
        let url = Url::parse("https://example.com/page").unwrap();
        assert_eq!(document_kind(&doc(""), &url), DocumentKind::Html);
    }

    #[tokio::test]
    async fn test_process_html_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"<html><head><title>T</title></head>
                <body><p>Body text</p><a href="/next">n</a></body></html>"#
                    .as_bytes()
                    .to_vec(),
                "text/html",
            ))
            .mount(&server)
            .await;

        let config = Arc::new(CrawlConfig::default());
        let client = build_http_client(&config).unwrap();
        let url = Url::parse(&format!("{}/", server.uri())).unwrap();

        let outcome = process_url(client, config, url).await;
        let record = outcome.record.expect("expected a record");
        assert_eq!(record.kind, DocumentKind::Html);
        assert_eq!(record.title.as_deref(), Some("T"));
        assert_eq!(outcome.links, vec!["/next"]);
    }

    #[tokio::test]
    async fn test_process_fetch_failure_yields_no_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = Arc::new(CrawlConfig {
            max_retries: 0,
            ..Default::default()
        });
        let client = build_http_client(&config).unwrap();
        let url = Url::parse(&server.uri()).unwrap();

        let outcome = process_url(client, config, url).await;
        assert!(outcome.record.is_none());
        assert!(outcome.links.is_empty());
    }

    #[tokio::test]
    async fn test_process_bad_pdf_yields_no_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken.pdf"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(b"%PDF-garbage".to_vec(), "application/pdf"),
            )
            .mount(&server)
            .await;

        let config = Arc::new(CrawlConfig::default());
        let client = build_http_client(&config).unwrap();
        let url = Url::parse(&format!("{}/broken.pdf", server.uri())).unwrap();

        let outcome = process_url(client, config, url).await;
        assert!(outcome.record.is_none());
    }
}
