//! JSON artifact serialization
//!
//! Writes one crawl run's result as a single JSON document. The write goes
//! through a temporary file in the destination directory followed by an
//! atomic rename, so a failed run never leaves a truncated artifact behind.

use crate::output::RunResult;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while persisting the artifact
///
/// Unlike per-URL failures, these are fatal to the run and surface to the
/// caller.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize artifact: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct Artifact<'a> {
    metadata: ArtifactMetadata<'a>,
    data: Vec<ArtifactPage<'a>>,
}

#[derive(Serialize)]
struct ArtifactMetadata<'a> {
    created_at: String,
    source: &'a str,
    stats: ArtifactStats,
}

#[derive(Serialize)]
struct ArtifactStats {
    total_pages: usize,
    pdf_count: usize,
    html_count: usize,
}

#[derive(Serialize)]
struct ArtifactPage<'a> {
    url: &'a str,
    title: &'a str,
    content: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Serializes a run result and writes it to `destination`
///
/// The input result is not mutated. On any failure the destination file is
/// left untouched (either its previous content or absent).
///
/// # Arguments
///
/// * `result` - The run result to persist
/// * `source` - Label for the artifact's `metadata.source` field, usually
///   the start URL
/// * `destination` - Path of the artifact file
pub fn persist(result: &RunResult, source: &str, destination: &Path) -> Result<(), OutputError> {
    let artifact = Artifact {
        metadata: ArtifactMetadata {
            created_at: result.created_at.to_rfc3339(),
            source,
            stats: ArtifactStats {
                total_pages: result.stats.total_pages,
                pdf_count: result.stats.pdf_count,
                html_count: result.stats.html_count,
            },
        },
        data: result
            .pages
            .iter()
            .map(|page| ArtifactPage {
                url: &page.url,
                title: page.title.as_deref().unwrap_or(""),
                content: &page.content,
                kind: page.kind.as_str(),
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&artifact)?;

    // Stage next to the destination so the rename stays on one filesystem
    let tmp_path = destination.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, destination)?;

    tracing::info!(
        "wrote {} pages to {}",
        result.stats.total_pages,
        destination.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{DocumentKind, PageRecord};
    use crate::output::build_run_result;
    use chrono::Utc;
    use tempfile::tempdir;

    fn sample_result() -> RunResult {
        let pages = vec![
            PageRecord {
                url: "https://example.com/".to_string(),
                kind: DocumentKind::Html,
                title: Some("Home".to_string()),
                content: "Welcome".to_string(),
                extracted_at: Utc::now(),
                metadata: None,
            },
            PageRecord {
                url: "https://example.com/doc.pdf".to_string(),
                kind: DocumentKind::Pdf,
                title: None,
                content: "PDF text".to_string(),
                extracted_at: Utc::now(),
                metadata: None,
            },
        ];
        build_run_result(pages, 3)
    }

    #[test]
    fn test_persist_writes_expected_shape() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("out.json");

        persist(&sample_result(), "https://example.com/", &dest).unwrap();

        let written = std::fs::read_to_string(&dest).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();

        assert_eq!(value["metadata"]["source"], "https://example.com/");
        assert_eq!(value["metadata"]["stats"]["total_pages"], 2);
        assert_eq!(value["metadata"]["stats"]["html_count"], 1);
        assert_eq!(value["metadata"]["stats"]["pdf_count"], 1);
        assert!(value["metadata"]["created_at"].is_string());

        let data = value["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["url"], "https://example.com/");
        assert_eq!(data[0]["title"], "Home");
        assert_eq!(data[0]["type"], "html");
        // Absent titles serialize as the empty string
        assert_eq!(data[1]["title"], "");
        assert_eq!(data[1]["type"], "pdf");
    }

    #[test]
    fn test_persist_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("out.json");

        persist(&sample_result(), "site", &dest).unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("out.json")]);
    }

    #[test]
    fn test_persist_overwrites_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("out.json");
        std::fs::write(&dest, "old content").unwrap();

        persist(&sample_result(), "site", &dest).unwrap();

        let written = std::fs::read_to_string(&dest).unwrap();
        assert!(written.starts_with('{'));
    }

    #[test]
    fn test_persist_to_missing_directory_fails() {
        let dest = Path::new("/nonexistent-dir/out.json");
        let result = persist(&sample_result(), "site", dest);
        assert!(matches!(result.unwrap_err(), OutputError::Io(_)));
    }
}
