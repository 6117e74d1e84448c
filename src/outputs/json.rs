//! JSON snapshot of a run.
//!
//! The whole [`ReportBundle`] is written to one file, pretty-printed with
//! two-space indentation. An existing file at the same path is replaced.
//! Non-ASCII titles and author names are written as UTF-8, not escaped.
//!
//! # Output Structure
//!
//! ```text
//! {
//!   "last_updated": "2025-05-06T20:30:00.123456789+02:00",
//!   "source": "https://news.ycombinator.com/",
//!   "news_count": 30,
//!   "news": [
//!     { "id": 1, "title": "...", "url": "...", "comments": 15,
//!       "score": 42, "author": "alice", "hn_url": "..." }
//!   ]
//! }
//! ```

use crate::error::OutputError;
use crate::models::ReportBundle;
use crate::utils::ensure_parent_dir;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Write a [`ReportBundle`] to `path`, creating its directory if needed.
#[instrument(level = "info", skip_all, fields(path = %path.display(), news_count = bundle.news_count))]
pub async fn write_snapshot(bundle: &ReportBundle, path: &Path) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(bundle)?;

    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path).await.map_err(io_error)?;
    fs::write(path, json).await.map_err(io_error)?;

    info!("Wrote JSON snapshot");
    Ok(())
}

/// Read a snapshot written by [`write_snapshot`].
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_snapshot(path: &Path) -> Result<ReportBundle, OutputError> {
    let json = fs::read_to_string(path)
        .await
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoryRecord;

    fn bundle() -> ReportBundle {
        ReportBundle {
            last_updated: "2025-05-06T20:30:00+02:00".to_string(),
            source: "https://news.ycombinator.com/".to_string(),
            news_count: 2,
            news: vec![
                StoryRecord {
                    id: 1,
                    title: "Rust 2024 — what's new".to_string(),
                    url: "https://blog.rust-lang.org/".to_string(),
                    comment_count: 15,
                    score: 42,
                    author: "alice".to_string(),
                    detail_url: "https://news.ycombinator.com/item?id=1".to_string(),
                },
                StoryRecord {
                    id: 2,
                    title: "Новости на русском".to_string(),
                    url: "https://news.ycombinator.com/item?id=2".to_string(),
                    comment_count: 0,
                    score: 0,
                    author: "Unknown".to_string(),
                    detail_url: "https://news.ycombinator.com/item?id=".to_string(),
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_snapshot_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("data.json");
        let original = bundle();

        write_snapshot(&original, &path).await.unwrap();
        let loaded = load_snapshot(&path).await.unwrap();

        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn test_snapshot_keeps_non_ascii_and_indents() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/dir/data.json");

        write_snapshot(&bundle(), &path).await.unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert!(text.contains("Новости на русском"));
        assert!(text.contains("Rust 2024 — what's new"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n  \"news_count\": 2,"));
        assert!(text.contains("\"hn_url\""));
        assert!(text.contains("\"comments\": 15"));
    }

    #[tokio::test]
    async fn test_snapshot_overwrites_previous_run() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("data.json");
        let stale = format!("{{\"stale\": true, \"padding\": \"{}\"}}", "x".repeat(4096));
        std::fs::write(&path, stale).unwrap();

        let mut smaller = bundle();
        smaller.news.truncate(1);
        smaller.news_count = 1;
        write_snapshot(&smaller, &path).await.unwrap();

        let loaded = load_snapshot(&path).await.unwrap();
        assert_eq!(loaded.news_count, 1);
        assert_eq!(loaded.news, smaller.news);
    }

    #[tokio::test]
    async fn test_load_missing_snapshot() {
        let err = load_snapshot(Path::new("/no/such/data.json")).await.unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
    }
}
