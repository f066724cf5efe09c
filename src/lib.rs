//! Sitegrab: a single-site content harvester
//!
//! This crate implements a bounded-concurrency crawler that discovers every
//! reachable page within one site, extracts normalized text from HTML pages
//! and linked PDF documents, and aggregates the results into a single JSON
//! artifact.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for sitegrab operations
///
/// Per-URL fetch and extraction failures are deliberately absent here: they
/// are swallowed by the worker that encountered them and show up only in the
/// run statistics. Only errors that end the whole run surface through this
/// type.
#[derive(Debug, Error)]
pub enum SitegrabError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for sitegrab operations
pub type Result<T> = std::result::Result<T, SitegrabError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{crawl, Coordinator, Frontier};
pub use extract::{clean_text, DocumentKind, PageRecord};
pub use output::{build_run_result, persist, CrawlStats, RunResult};
pub use crate::url::{extract_domain, in_scope, normalize};
