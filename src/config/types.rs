use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Immutable configuration snapshot for one crawl run
///
/// Every field carries a default, and unknown TOML keys are ignored, so a
/// partial configuration file only overrides what it names.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CrawlConfig {
    /// Maximum number of URLs to visit (successes and failures both count)
    pub max_pages: usize,

    /// Maximum number of fetch tasks in flight at once
    pub max_concurrent: usize,

    /// Per-request timeout in seconds
    pub timeout: u64,

    /// Retry attempts for transient fetch failures (5xx, timeouts)
    pub max_retries: u32,

    /// Tag names whose subtrees are removed before text extraction
    pub excluded_tags: Vec<String>,

    /// CSS selectors for structural cruft (ad slots, cookie banners) removed
    /// before text extraction
    pub clean_selectors: Vec<String>,

    /// File extensions the crawler will fetch; paths with any other
    /// extension are out of scope
    pub allowed_extensions: Vec<String>,

    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,

    /// Destination path for the JSON artifact
    pub output_file: PathBuf,

    /// Label written into the artifact metadata; defaults to the start URL
    pub source: Option<String>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages: 100,
            max_concurrent: 20,
            timeout: 30,
            max_retries: 2,
            excluded_tags: ["script", "style", "nav", "footer", "header", "iframe"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            clean_selectors: [".ads", ".cookie-banner"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            allowed_extensions: [".html", ".htm", ".pdf"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            headers: BTreeMap::new(),
            output_file: PathBuf::from("scraped_data.json"),
            source: None,
        }
    }
}
