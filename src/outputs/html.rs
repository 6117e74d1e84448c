//! Static HTML report.
//!
//! Renders a single self-contained page (inline CSS, no scripts, no external
//! assets) with three summary figures and a table of every story. Story text
//! is escaped, so titles such as `Show HN: <blink> is back` render literally.

use crate::error::OutputError;
use crate::models::{ReportBundle, StoryRecord};
use crate::utils::ensure_parent_dir;
use chrono::DateTime;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Summary figures shown above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStats {
    pub total_stories: usize,
    pub total_comments: u64,
    /// Highest score on the page, 0 for an empty page.
    pub highest_score: u32,
}

impl ReportStats {
    pub fn from_records(records: &[StoryRecord]) -> Self {
        Self {
            total_stories: records.len(),
            total_comments: records.iter().map(|r| u64::from(r.comment_count)).sum(),
            highest_score: records.iter().map(|r| r.score).max().unwrap_or(0),
        }
    }
}

const STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        }
        body {
            background: linear-gradient(135deg, #ff6600 0%, #b34700 100%);
            min-height: 100vh;
            padding: 20px;
            display: flex;
            flex-direction: column;
            align-items: center;
        }
        .container {
            max-width: 1200px;
            width: 100%;
            background: rgba(255, 255, 255, 0.96);
            border-radius: 16px;
            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
            padding: 30px;
            margin-top: 20px;
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            padding: 20px;
            background: #ff6600;
            border-radius: 12px;
            color: white;
        }
        h1 { font-size: 2.6em; margin-bottom: 8px; }
        .subtitle { font-size: 1.1em; opacity: 0.9; }
        .stats {
            display: flex;
            justify-content: space-between;
            background: #f6f6ef;
            padding: 15px;
            border-radius: 10px;
            margin-bottom: 20px;
            border: 2px solid #e9e9df;
        }
        .stat-item { text-align: center; flex: 1; }
        .stat-number { font-size: 2em; font-weight: bold; color: #ff6600; }
        .last-updated {
            text-align: right;
            color: #6c757d;
            font-size: 0.9em;
            margin-bottom: 20px;
        }
        .news-table {
            width: 100%;
            border-collapse: collapse;
            background: white;
            border-radius: 10px;
            overflow: hidden;
            box-shadow: 0 5px 15px rgba(0, 0, 0, 0.08);
        }
        .news-table th {
            background: #ff6600;
            color: white;
            padding: 16px;
            text-align: left;
            text-transform: uppercase;
            letter-spacing: 1px;
        }
        .news-table td { padding: 14px 16px; border-bottom: 1px solid #eee; }
        .news-table tr:hover td { background: #f6f6ef; }
        .news-table tr:last-child td { border-bottom: none; }
        .news-title { font-weight: 600; line-height: 1.4; }
        .news-title a { color: #222; text-decoration: none; }
        .news-title a:hover { color: #ff6600; }
        .discussion { font-size: 0.8em; font-weight: normal; margin-left: 6px; color: #828282; }
        .badge {
            display: inline-block;
            padding: 4px 12px;
            border-radius: 20px;
            font-size: 0.85em;
            font-weight: 600;
            color: white;
        }
        .comments-badge { background: #4caf50; }
        .score-badge { background: #ff9800; }
        .author { color: #666; font-style: italic; }
        .footer {
            text-align: center;
            margin-top: 30px;
            padding-top: 20px;
            border-top: 1px solid #dee2e6;
            color: #6c757d;
            font-size: 0.9em;
        }
        .source-link {
            display: inline-block;
            margin-bottom: 15px;
            padding: 12px 25px;
            background: #ff6600;
            color: white;
            text-decoration: none;
            border-radius: 25px;
            font-weight: 600;
        }
        @media (max-width: 768px) {
            .container { padding: 15px; }
            h1 { font-size: 1.8em; }
            .news-table th, .news-table td { padding: 10px 8px; }
            .stats { flex-direction: column; gap: 10px; }
        }
"#;

fn stat_item(value: impl std::fmt::Display, label: &str) -> String {
    format!(
        r#"            <div class="stat-item">
                <div class="stat-number">{value}</div>
                <div>{label}</div>
            </div>
"#
    )
}

fn story_row(record: &StoryRecord) -> String {
    format!(
        r#"                <tr>
                    <td><strong>{id}</strong></td>
                    <td class="news-title">
                        <a href="{url}" target="_blank" rel="noopener noreferrer">{title}</a>
                        <a class="discussion" href="{hn_url}" target="_blank" rel="noopener noreferrer">discussion</a>
                    </td>
                    <td class="author">{author}</td>
                    <td><span class="badge score-badge">&#9650; {score}</span></td>
                    <td><span class="badge comments-badge">{comments}</span></td>
                </tr>
"#,
        id = record.id,
        url = encode_double_quoted_attribute(&record.url),
        title = encode_text(&record.title),
        hn_url = encode_double_quoted_attribute(&record.detail_url),
        author = encode_text(&record.author),
        score = record.score,
        comments = record.comment_count,
    )
}

/// `2025-05-06 20:30:00` in the timestamp's own offset. Text that is not
/// RFC 3339 is shown as is.
fn display_timestamp(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Render the complete report page.
pub fn render_report(bundle: &ReportBundle) -> String {
    let stats = ReportStats::from_records(&bundle.news);
    let source_href = encode_double_quoted_attribute(&bundle.source);

    let mut html = String::with_capacity(8 * 1024 + bundle.news.len() * 700);
    html.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Hacker News Front Page</title>
    <style>"#,
    );
    html.push_str(STYLE);
    html.push_str(
        r#"    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Hacker News Front Page</h1>
            <div class="subtitle">Latest stories from the tech community</div>
        </div>
        <div class="stats">
"#,
    );
    html.push_str(&stat_item(stats.total_stories, "Total Stories"));
    html.push_str(&stat_item(stats.total_comments, "Total Comments"));
    html.push_str(&stat_item(stats.highest_score, "Highest Score"));
    html.push_str(&format!(
        r#"        </div>
        <div class="last-updated">Last updated: {}</div>
        <table class="news-table">
            <thead>
                <tr>
                    <th width="5%">#</th>
                    <th width="55%">Title</th>
                    <th width="15%">Author</th>
                    <th width="10%">Score</th>
                    <th width="15%">Comments</th>
                </tr>
            </thead>
            <tbody>
"#,
        encode_text(&display_timestamp(&bundle.last_updated))
    ));

    for record in &bundle.news {
        html.push_str(&story_row(record));
    }

    html.push_str(&format!(
        r#"            </tbody>
        </table>
        <div class="footer">
            <a href="{source_href}" class="source-link" target="_blank" rel="noopener noreferrer">Visit the original page</a>
            <p>Generated by hn_front_page</p>
        </div>
    </div>
</body>
</html>
"#
    ));
    html
}

/// Render the report and write it to `path`, replacing any previous report.
#[instrument(level = "info", skip_all, fields(path = %path.display(), news_count = bundle.news_count))]
pub async fn write_report(bundle: &ReportBundle, path: &Path) -> Result<(), OutputError> {
    let html = render_report(bundle);

    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path).await.map_err(io_error)?;
    fs::write(path, &html).await.map_err(io_error)?;

    info!(bytes = html.len(), "Wrote HTML report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, title: &str, comments: u32, score: u32) -> StoryRecord {
        StoryRecord {
            id,
            title: title.to_string(),
            url: format!("https://example.com/{id}?a=1&b=2"),
            comment_count: comments,
            score,
            author: "alice".to_string(),
            detail_url: format!("https://news.ycombinator.com/item?id={id}"),
        }
    }

    fn bundle(news: Vec<StoryRecord>) -> ReportBundle {
        ReportBundle {
            last_updated: "2025-05-06T20:30:00+00:00".to_string(),
            source: "https://news.ycombinator.com/".to_string(),
            news_count: news.len(),
            news,
        }
    }

    fn stat_block(value: &str, label: &str) -> String {
        format!(
            "<div class=\"stat-number\">{value}</div>\n                <div>{label}</div>"
        )
    }

    #[test]
    fn test_stats_from_records() {
        let records = vec![record(1, "a", 15, 42), record(2, "b", 0, 0), record(3, "c", 7, 100)];
        assert_eq!(
            ReportStats::from_records(&records),
            ReportStats {
                total_stories: 3,
                total_comments: 22,
                highest_score: 100,
            }
        );
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(
            ReportStats::from_records(&[]),
            ReportStats {
                total_stories: 0,
                total_comments: 0,
                highest_score: 0,
            }
        );
    }

    #[test]
    fn test_report_shows_stats() {
        let html = render_report(&bundle(vec![record(1, "a", 15, 42), record(2, "b", 3, 7)]));
        assert!(html.contains(&stat_block("2", "Total Stories")));
        assert!(html.contains(&stat_block("18", "Total Comments")));
        assert!(html.contains(&stat_block("42", "Highest Score")));
        assert!(html.contains("Last updated: 2025-05-06 20:30:00</div>"));
    }

    #[test]
    fn test_display_timestamp() {
        assert_eq!(
            display_timestamp("2025-05-06T20:30:00.123456789+02:00"),
            "2025-05-06 20:30:00"
        );
        assert_eq!(display_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_empty_report() {
        let html = render_report(&bundle(vec![]));
        assert!(html.contains(&stat_block("0", "Total Stories")));
        assert!(html.contains(&stat_block("0", "Highest Score")));
        assert!(!html.contains("<td><strong>"));
    }

    #[test]
    fn test_report_escapes_story_text() {
        let html = render_report(&bundle(vec![record(1, "Show HN: <blink> & friends", 0, 1)]));
        assert!(html.contains("Show HN: &lt;blink&gt; &amp; friends"));
        assert!(!html.contains("<blink>"));
        assert!(html.contains("href=\"https://example.com/1?a=1&amp;b=2\""));
    }

    #[test]
    fn test_report_is_self_contained() {
        let html = render_report(&bundle(vec![record(1, "a", 1, 1)]));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script"));
    }

    #[tokio::test]
    async fn test_write_report() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("site/index.html");
        write_report(&bundle(vec![record(1, "Ünïcödé", 2, 3)]), &path)
            .await
            .unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Ünïcödé"));
        assert!(written.contains("<tr>"));
    }
}
