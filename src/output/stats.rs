//! Run result assembly
//!
//! Pure aggregation of worker-produced records into the externally
//! observable result of one crawl run.

use crate::extract::{DocumentKind, PageRecord};
use chrono::{DateTime, Utc};

/// Summary statistics for one crawl run
///
/// `urls_visited` counts every URL that was fetched, successes and
/// failures alike, so `urls_visited - html_count - pdf_count` is the
/// number of visited-but-failed URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlStats {
    pub total_pages: usize,
    pub html_count: usize,
    pub pdf_count: usize,
    pub urls_visited: usize,
}

/// The externally observable output of one crawl run
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Extracted records, in completion order (non-deterministic under
    /// concurrency)
    pub pages: Vec<PageRecord>,

    /// Run statistics
    pub stats: CrawlStats,

    /// When the result was assembled
    pub created_at: DateTime<Utc>,
}

/// Assembles a [`RunResult`] from the records a crawl produced
///
/// Pure except for the timestamp; does not mutate or reorder the records.
pub fn build_run_result(pages: Vec<PageRecord>, urls_visited: usize) -> RunResult {
    let html_count = pages
        .iter()
        .filter(|p| p.kind == DocumentKind::Html)
        .count();
    let pdf_count = pages.len() - html_count;

    RunResult {
        stats: CrawlStats {
            total_pages: pages.len(),
            html_count,
            pdf_count,
            urls_visited,
        },
        pages,
        created_at: Utc::now(),
    }
}

impl RunResult {
    /// Number of visited URLs that produced no record
    pub fn failed_count(&self) -> usize {
        self.stats
            .urls_visited
            .saturating_sub(self.stats.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, kind: DocumentKind) -> PageRecord {
        PageRecord {
            url: url.to_string(),
            kind,
            title: None,
            content: String::new(),
            extracted_at: Utc::now(),
            metadata: None,
        }
    }

    #[test]
    fn test_build_empty() {
        let result = build_run_result(vec![], 0);
        assert_eq!(
            result.stats,
            CrawlStats {
                total_pages: 0,
                html_count: 0,
                pdf_count: 0,
                urls_visited: 0
            }
        );
        assert!(result.pages.is_empty());
    }

    #[test]
    fn test_build_counts_by_kind() {
        let pages = vec![
            record("https://example.com/a", DocumentKind::Html),
            record("https://example.com/b", DocumentKind::Html),
            record("https://example.com/c.pdf", DocumentKind::Pdf),
        ];
        let result = build_run_result(pages, 5);

        assert_eq!(result.stats.total_pages, 3);
        assert_eq!(result.stats.html_count, 2);
        assert_eq!(result.stats.pdf_count, 1);
        assert_eq!(result.stats.urls_visited, 5);
        assert_eq!(result.failed_count(), 2);
    }

    #[test]
    fn test_visited_accounting_holds() {
        let pages = vec![
            record("https://example.com/a", DocumentKind::Html),
            record("https://example.com/b.pdf", DocumentKind::Pdf),
        ];
        let result = build_run_result(pages, 4);

        // urls_visited == html + pdf + failed
        assert_eq!(
            result.stats.urls_visited,
            result.stats.html_count + result.stats.pdf_count + result.failed_count()
        );
    }

    #[test]
    fn test_record_order_preserved() {
        let pages = vec![
            record("https://example.com/1", DocumentKind::Html),
            record("https://example.com/2", DocumentKind::Html),
        ];
        let result = build_run_result(pages, 2);
        assert_eq!(result.pages[0].url, "https://example.com/1");
        assert_eq!(result.pages[1].url, "https://example.com/2");
    }
}
