//! Output module for sitegrab
//!
//! Aggregates the records a crawl produced into a [`RunResult`] and
//! persists it as the JSON artifact.

mod artifact;
mod stats;

pub use artifact::{persist, OutputError};
pub use stats::{build_run_result, CrawlStats, RunResult};
