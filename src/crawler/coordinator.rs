//! Crawl coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that drives the frontier and the
//! bounded worker pool to a fixed point:
//! - Seeding the frontier and fixing the root domain
//! - Dispatching fetch+extract workers, never more than the concurrency
//!   limit at once and never past the page budget
//! - Folding each completed worker back into the frontier and result set
//! - Producing the final `RunResult`

use crate::config::CrawlConfig;
use crate::crawler::fetcher::build_http_client;
use crate::crawler::frontier::Frontier;
use crate::crawler::worker::{process_url, WorkerOutcome};
use crate::extract::PageRecord;
use crate::output::{build_run_result, RunResult};
use crate::url::{extract_domain, in_scope, normalize};
use crate::SitegrabError;
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinSet;
use url::Url;

/// Main crawler coordinator structure
///
/// The coordinator owns the frontier outright; workers communicate only
/// through their returned outcomes, so frontier updates are race-free by
/// construction.
pub struct Coordinator {
    config: Arc<CrawlConfig>,
    client: Client,
    frontier: Frontier,
    root_domain: String,
    records: Vec<PageRecord>,
}

impl Coordinator {
    /// Creates a new coordinator seeded with the start URL
    ///
    /// The start URL is canonicalized like any discovered link, and its
    /// host becomes the root domain that bounds the crawl's scope.
    ///
    /// # Arguments
    ///
    /// * `start_url` - The URL the crawl begins from
    /// * `config` - The crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(SitegrabError)` - Unparseable seed or client build failure
    pub fn new(start_url: &str, config: CrawlConfig) -> Result<Self, SitegrabError> {
        let parsed = Url::parse(start_url).map_err(|e| SitegrabError::InvalidSeed {
            url: start_url.to_string(),
            reason: e.to_string(),
        })?;

        let seed = normalize(&parsed, parsed.as_str()).ok_or_else(|| {
            SitegrabError::InvalidSeed {
                url: start_url.to_string(),
                reason: "not a fetchable document URL".to_string(),
            }
        })?;

        let root_domain = extract_domain(&seed).ok_or_else(|| SitegrabError::InvalidSeed {
            url: start_url.to_string(),
            reason: "missing host".to_string(),
        })?;

        let client = build_http_client(&config)?;

        let mut frontier = Frontier::new();
        frontier.seed(seed);

        Ok(Self {
            config: Arc::new(config),
            client,
            frontier,
            root_domain,
            records: Vec::new(),
        })
    }

    /// The root domain the crawl is scoped to
    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    /// Runs the crawl loop to completion
    ///
    /// The loop alternates between two phases:
    ///
    /// 1. Dispatch: drain the frontier into worker tasks while the pool has
    ///    capacity and `visited + in_flight < max_pages`. Counting in-flight
    ///    tasks against the budget means the run can never overshoot the
    ///    page budget by more than what was already running when the budget
    ///    was crossed, and once it is crossed no new fetch is issued.
    /// 2. Join: fold one completed worker back in - mark the URL visited
    ///    (success or failure alike, so nothing is retried forever), keep
    ///    its record, and offer its in-scope links to the frontier.
    ///
    /// The fixed point is reached when no task is in flight and either the
    /// frontier is exhausted or the budget is spent.
    pub async fn run(mut self) -> RunResult {
        tracing::info!(
            "starting crawl of {} (budget: {} pages, concurrency: {})",
            self.root_domain,
            self.config.max_pages,
            self.config.max_concurrent
        );

        let start_time = std::time::Instant::now();
        let mut tasks: JoinSet<WorkerOutcome> = JoinSet::new();
        let mut processed = 0usize;
        let mut failed = 0usize;

        loop {
            while tasks.len() < self.config.max_concurrent
                && self.frontier.visited_count() + tasks.len() < self.config.max_pages
            {
                let Some(url) = self.frontier.drain(1).pop() else {
                    break;
                };
                tracing::debug!("dispatching {}", url);
                let work = process_url(self.client.clone(), Arc::clone(&self.config), url.clone());
                tasks.spawn(supervise(url, work));
            }

            // No tasks in flight and nothing dispatched: fixed point
            let Some(joined) = tasks.join_next().await else {
                break;
            };

            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("worker task failed: {}", e);
                    continue;
                }
            };

            self.frontier.mark_visited(&outcome.url);
            match outcome.record {
                Some(record) => self.records.push(record),
                None => failed += 1,
            }

            for href in &outcome.links {
                let Some(candidate) = normalize(&outcome.url, href) else {
                    continue;
                };
                if in_scope(&candidate, &self.root_domain, &self.config) {
                    self.frontier.offer(candidate);
                }
            }

            processed += 1;
            if processed % 10 == 0 {
                let elapsed = start_time.elapsed();
                let rate = processed as f64 / elapsed.as_secs_f64();
                tracing::info!(
                    "progress: {} visited, {} pending, {:.2} pages/sec",
                    self.frontier.visited_count(),
                    self.frontier.pending_count(),
                    rate
                );
            }
        }

        tracing::info!(
            "crawl complete: {} visited ({} records, {} failed) in {:?}",
            self.frontier.visited_count(),
            self.records.len(),
            failed,
            start_time.elapsed()
        );

        build_run_result(self.records, self.frontier.visited_count())
    }
}

/// Runs one worker future on its own task, converting a panic into a
/// failed outcome
///
/// A worker that panics would otherwise surface as a bare `JoinError` with
/// no URL attached, leaving that URL stranded in the frontier's in-flight
/// set and missing from the visited count. Supervision keeps the accounting
/// invariant: every dispatched URL comes back as an outcome.
async fn supervise<F>(url: Url, work: F) -> WorkerOutcome
where
    F: Future<Output = WorkerOutcome> + Send + 'static,
{
    match tokio::spawn(work).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("worker for {} did not complete: {}", url, e);
            WorkerOutcome::failed(url)
        }
    }
}

/// Runs a complete crawl and returns the aggregated result
///
/// This is the main library entry point: the caller supplies a start URL
/// and a configuration and receives a [`RunResult`] (or an error for an
/// unusable seed). Persisting the result is a separate step; see
/// [`persist`](crate::output::persist).
///
/// # Example
///
/// ```no_run
/// use sitegrab::config::CrawlConfig;
/// use sitegrab::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let result = crawl("https://example.com/", CrawlConfig::default()).await?;
/// println!("extracted {} pages", result.stats.total_pages);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(start_url: &str, config: CrawlConfig) -> Result<RunResult, SitegrabError> {
    let coordinator = Coordinator::new(start_url, config)?;
    Ok(coordinator.run().await)
}
