//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The frontier of discovered-but-unvisited URLs
//! - HTTP fetching with retry logic
//! - Fetch+extract workers
//! - The coordinator that drives everything to a fixed point

mod coordinator;
mod fetcher;
mod frontier;
mod worker;

pub use coordinator::{crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_with_retries, FetchError, FetchedDocument};
pub use frontier::Frontier;
pub use worker::{process_url, WorkerOutcome};
