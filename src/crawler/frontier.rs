//! The crawl frontier
//!
//! Tracks which URLs have been visited, which are waiting to be fetched,
//! and which are currently in flight. The frontier is the only crawl state
//! shared between workers, and it is single-owner: the coordinator performs
//! every mutation, so there is no lock and no lost-update window.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// Discovered-but-unvisited URLs plus the visited set
///
/// Invariants:
/// - `visited`, `pending`, and `in_flight` are pairwise disjoint
/// - `visited` only grows; a URL enters it at most once
/// - a URL is drained from `pending` at most once, so it is fetched at most
///   once per run
///
/// Canonical URL strings are the membership keys, so two `Url`s compare
/// equal here iff their canonical forms are byte-identical.
#[derive(Debug, Default)]
pub struct Frontier {
    /// Terminal set: processed URLs, successes and failures alike
    visited: HashSet<String>,

    /// Work queue, FIFO for breadth-first-ish ordering
    pending: VecDeque<Url>,

    /// Membership index over `pending`
    pending_keys: HashSet<String>,

    /// Drained but not yet marked visited; blocks re-discovery of URLs a
    /// worker is currently fetching
    in_flight: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the frontier with the start URL
    pub fn seed(&mut self, url: Url) {
        self.offer(url);
    }

    /// Inserts a URL into `pending` unless it was already discovered
    ///
    /// Returns true if the URL was enqueued.
    pub fn offer(&mut self, url: Url) -> bool {
        let key = url.as_str();
        if self.visited.contains(key)
            || self.pending_keys.contains(key)
            || self.in_flight.contains(key)
        {
            return false;
        }

        self.pending_keys.insert(key.to_string());
        self.pending.push_back(url);
        true
    }

    /// Atomically removes up to `n` URLs from `pending`
    ///
    /// Drained URLs move to the in-flight set until `mark_visited` is
    /// called for them.
    pub fn drain(&mut self, n: usize) -> Vec<Url> {
        let mut batch = Vec::with_capacity(n.min(self.pending.len()));
        while batch.len() < n {
            let Some(url) = self.pending.pop_front() else {
                break;
            };
            self.pending_keys.remove(url.as_str());
            self.in_flight.insert(url.as_str().to_string());
            batch.push(url);
        }
        batch
    }

    /// Moves a URL into the visited set; idempotent
    pub fn mark_visited(&mut self, url: &Url) {
        let key = url.as_str();
        self.in_flight.remove(key);
        self.pending_keys.remove(key);
        self.pending.retain(|p| p.as_str() != key);
        self.visited.insert(key.to_string());
    }

    /// True iff no pending work remains
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of URLs waiting to be fetched
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of URLs drained but not yet marked visited
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Size of the visited set; monotonically non-decreasing
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Whether a URL has been visited
    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url.as_str())
    }
}
