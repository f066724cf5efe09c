//! Configuration module for sitegrab
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every option has a typed default, so an empty file (or no file at
//! all) yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use sitegrab::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawl will stop after {} pages", config.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::CrawlConfig;

// Re-export parser functions
pub use parser::load_config;
pub use validation::validate;
