//! Utility functions for string truncation and file system operations.
//!
//! This module provides helper functions used by the sinks and the pipeline:
//! - Character-safe truncation for console titles and log previews
//! - Output directory preparation

use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

/// Keep at most `max` characters of `s`.
///
/// Counts characters, not bytes, so titles in any script are cut on a
/// character boundary.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_chars("Hello, world", 5), "Hello");
/// assert_eq!(truncate_chars("Привет", 3), "При");
/// ```
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    let kept = truncate_chars(s, max);
    if kept.len() == s.len() {
        s.to_string()
    } else {
        format!("{}…(+{} bytes)", kept, s.len() - kept.len())
    }
}

/// Create the parent directory of `path` if it does not exist yet.
///
/// A bare file name (no parent component) needs nothing and succeeds.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).await?;
            debug!(parent = %parent.display(), "Output directory ready");
            Ok(())
        }
        _ => Ok(()),
    }
}
