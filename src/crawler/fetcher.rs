//! HTTP fetcher implementation
//!
//! Builds the shared HTTP client and performs individual fetches with
//! retry logic for transient failures. Every failure variant here is
//! per-URL and non-fatal to the crawl.

use crate::config::CrawlConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Delay between retry attempts
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// A successfully fetched document
#[derive(Debug)]
pub struct FetchedDocument {
    /// HTTP status code (always 2xx here)
    pub status: u16,

    /// Content-Type header value, empty string if absent
    pub content_type: String,

    /// Response body
    pub body: Vec<u8>,
}

/// Per-URL fetch failures
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    /// Whether another attempt might succeed
    ///
    /// 5xx responses, timeouts, and connection failures are transient;
    /// 4xx responses are not retried.
    fn is_transient(&self) -> bool {
        match self {
            Self::Status(code) => *code >= 500,
            Self::Timeout | Self::Connect(_) => true,
            Self::Transport(_) => false,
        }
    }
}

/// Builds the HTTP client shared by all workers
///
/// The client carries the per-request timeout and the configured default
/// headers; workers share it by cheap clone (reqwest clients are handles
/// over one connection pool) and it is released when the last worker and
/// the coordinator drop theirs at the end of the run.
pub fn build_http_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => {
                tracing::warn!("ignoring invalid header '{}'", name);
            }
        }
    }

    Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, retrying transient failures
///
/// # Retry Logic
///
/// | Condition          | Action                               |
/// |--------------------|--------------------------------------|
/// | HTTP 2xx           | Success                              |
/// | HTTP 4xx           | Immediate failure                    |
/// | HTTP 5xx           | Retry up to `max_retries` times      |
/// | Timeout            | Retry up to `max_retries` times      |
/// | Connection refused | Retry up to `max_retries` times      |
/// | Other transport    | Immediate failure                    |
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
/// * `config` - Crawl configuration (`max_retries`)
pub async fn fetch_with_retries(
    client: &Client,
    url: &str,
    config: &CrawlConfig,
) -> Result<FetchedDocument, FetchError> {
    let mut last_error = None;

    for attempt in 0..=config.max_retries {
        if attempt > 0 {
            tracing::debug!("retrying {} (attempt {})", url, attempt + 1);
            tokio::time::sleep(RETRY_DELAY).await;
        }

        match fetch_once(client, url).await {
            Ok(doc) => return Ok(doc),
            Err(e) if e.is_transient() => {
                last_error = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_error.unwrap_or(FetchError::Transport("no attempts made".to_string())))
}

/// Performs a single GET request
async fn fetch_once(client: &Client, url: &str) -> Result<FetchedDocument, FetchError> {
    let response = client.get(url).send().await.map_err(classify_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = response.bytes().await.map_err(classify_error)?.to_vec();

    Ok(FetchedDocument {
        status: status.as_u16(),
        content_type,
        body,
    })
}

/// Classifies a reqwest error into the fetch failure taxonomy
fn classify_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::Connect(e.to_string())
    } else {
        FetchError::Transport(e.to_string())
    }
}
