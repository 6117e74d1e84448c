//! Page scrapers.
//!
//! Each scraper follows the same two-phase pattern:
//!
//! 1. **Fetching**: download the page markup (`fetch_front_page`)
//! 2. **Extraction**: turn the markup into [`Story`](crate::models::Story)
//!    values (`extract_stories`)
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Hacker News | [`hacker_news`] | HTML scraping | Front page only, no pagination |
//!
//! Failures are handled at the narrowest scope: a broken story is logged and
//! skipped, a failed fetch ends the run without output.

pub mod hacker_news;
