//! Data models for scraped stories and the report produced from them.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Story`]: a story as extracted from the page, with absent fields kept as `None`
//! - [`CommentLabel`]: what the trailing metadata link said about comments
//! - [`StoryRecord`]: the flat record written to JSON and HTML, defaults applied
//! - [`ReportBundle`]: the full output of one run
//!
//! The record fields use the short names of the `data.json` schema
//! (`comments`, `hn_url`), hence the `#[serde(rename)]` attributes.

use serde::{Deserialize, Serialize};

/// Author shown when a story has no submitter element (job postings, mostly).
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// The label of the last link in a story's metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentLabel {
    /// `"15 comments"`, `"1 comment"`, `"0 comments"`.
    Count(u32),
    /// `"discuss"`: the site's wording for a story nobody has commented on yet.
    Discuss,
    /// Neither wording matched. Counted as zero.
    Unrecognized(String),
    /// The metadata block had no links at all.
    Missing,
}

impl CommentLabel {
    /// Number of comments, with zero for every label that does not carry one.
    pub fn count(&self) -> u32 {
        match self {
            Self::Count(n) => *n,
            Self::Discuss | Self::Unrecognized(_) | Self::Missing => 0,
        }
    }
}

/// A story as extracted from one title block and its metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// 1-based position among the stories retained from the page.
    pub id: u32,
    /// Trimmed text of the story's headline link.
    pub title: String,
    /// Absolute URL of the story.
    pub url: String,
    pub comments: CommentLabel,
    /// `None` when the page shows no score (job postings).
    pub score: Option<u32>,
    /// `None` when the page shows no submitter.
    pub author: Option<String>,
    /// Absolute URL of the discussion page.
    pub hn_url: String,
}

/// One story as written to `data.json` and rendered into the report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoryRecord {
    pub id: u32,
    pub title: String,
    pub url: String,
    #[serde(rename = "comments")]
    pub comment_count: u32,
    pub score: u32,
    pub author: String,
    #[serde(rename = "hn_url")]
    pub detail_url: String,
}

impl From<&Story> for StoryRecord {
    fn from(story: &Story) -> Self {
        Self {
            id: story.id,
            title: story.title.clone(),
            url: story.url.clone(),
            comment_count: story.comments.count(),
            score: story.score.unwrap_or(0),
            author: story
                .author
                .clone()
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            detail_url: story.hn_url.clone(),
        }
    }
}

/// Everything one run produced.
///
/// # JSON Schema
///
/// ```text
/// { "last_updated": "2025-05-06T20:30:00+02:00",
///   "source": "https://news.ycombinator.com/",
///   "news_count": 30,
///   "news": [ StoryRecord, ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportBundle {
    /// RFC 3339 local time the report was generated.
    pub last_updated: String,
    /// The page the stories were scraped from.
    pub source: String,
    pub news_count: usize,
    pub news: Vec<StoryRecord>,
}

impl ReportBundle {
    /// Build a bundle from extracted stories, applying the record defaults.
    pub fn new(last_updated: String, source: String, stories: &[Story]) -> Self {
        let news: Vec<StoryRecord> = stories.iter().map(StoryRecord::from).collect();
        Self {
            last_updated,
            source,
            news_count: news.len(),
            news,
        }
    }
}
