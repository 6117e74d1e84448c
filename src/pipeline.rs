//! One run of the scraper: fetch, extract, then the three sinks.
//!
//! A failed fetch or a page without stories stops the run before any sink
//! runs, so the previous `data.json` and `index.html` are left untouched.
//! Sink failures are logged and reported but never stop the other sinks.

use crate::config::Config;
use crate::error::{ConfigError, ExtractionFieldError, NetworkError};
use crate::models::ReportBundle;
use crate::outputs::{console, html, json};
use crate::scrapers::hacker_news::{extract_stories, fetch_front_page};
use crate::utils::truncate_for_log;
use chrono::Local;
use reqwest::Client;
use tracing::{error, info, instrument, warn};

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The front page could not be fetched; nothing was written.
    FetchFailed(NetworkError),
    /// The page was fetched but held no usable story; nothing was written.
    NoStories {
        title_blocks: usize,
        metadata_blocks: usize,
        dropped: usize,
    },
    /// Stories were extracted and handed to the sinks.
    Completed(RunReport),
}

/// What the sinks did with the extracted stories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub stories: usize,
    /// Positions of the title/metadata pairs that were skipped.
    pub dropped_positions: Vec<usize>,
    pub aligned: bool,
    pub json_written: bool,
    pub html_written: bool,
}

impl RunReport {
    pub fn all_written(&self) -> bool {
        self.json_written && self.html_written
    }
}

/// Run the whole pipeline once with an already layered [`Config`].
///
/// Progress messages go to stdout; `show_console` controls only the story
/// summary.
///
/// # Errors
///
/// Only a [`ConfigError`] from compiling the layout selectors or parsing the
/// site root. Everything after that is reported through [`RunOutcome`].
#[instrument(level = "info", skip_all, fields(source = %config.source_url))]
pub async fn run(
    config: &Config,
    client: &Client,
    show_console: bool,
) -> Result<RunOutcome, ConfigError> {
    let selectors = config.layout.compile()?;
    let site_root = config.site_root()?;

    println!("Starting to parse Hacker News...");

    // ---- Fetch ----
    let page = match fetch_front_page(client, &config.source_url, &config.user_agent).await {
        Ok(page) => page,
        Err(e) => {
            error!(error = %e, "Fetch failed; no output written");
            println!("Error fetching the page: {e}");
            println!("Failed to fetch news");
            return Ok(RunOutcome::FetchFailed(e));
        }
    };

    // ---- Extract ----
    let extraction = extract_stories(&page, &selectors, &site_root);
    if extraction.stories.is_empty() {
        warn!(
            title_blocks = extraction.title_blocks,
            metadata_blocks = extraction.metadata_blocks,
            dropped = extraction.dropped.len(),
            page_preview = %truncate_for_log(&page, 300),
            "No stories extracted; no output written"
        );
        println!("Failed to fetch news");
        return Ok(RunOutcome::NoStories {
            title_blocks: extraction.title_blocks,
            metadata_blocks: extraction.metadata_blocks,
            dropped: extraction.dropped.len(),
        });
    }

    let bundle = ReportBundle::new(
        Local::now().to_rfc3339(),
        config.source_url.clone(),
        &extraction.stories,
    );

    // ---- Console ----
    if show_console {
        if let Err(e) =
            console::print_summary(&bundle.news, config.console_limit, config.title_width)
        {
            error!(error = %e, "Failed to print console summary");
        }
    }

    // ---- JSON ----
    let json_written = match json::write_snapshot(&bundle, &config.json_output).await {
        Ok(()) => {
            println!("Data saved to {}", config.json_output.display());
            true
        }
        Err(e) => {
            error!(error = %e, "Failed to write JSON snapshot");
            println!("Error saving data: {e}");
            false
        }
    };

    // ---- HTML ----
    let html_written = match html::write_report(&bundle, &config.html_output).await {
        Ok(()) => {
            println!("HTML page created: {}", config.html_output.display());
            true
        }
        Err(e) => {
            error!(error = %e, "Failed to write HTML report");
            println!("Error creating HTML page: {e}");
            false
        }
    };

    let report = RunReport {
        stories: bundle.news_count,
        dropped_positions: extraction
            .dropped
            .iter()
            .map(ExtractionFieldError::position)
            .collect(),
        aligned: extraction.is_aligned(),
        json_written,
        html_written,
    };
    print_completion(config, &report, show_console);

    info!(
        stories = report.stories,
        dropped_positions = ?report.dropped_positions,
        aligned = report.aligned,
        json_written,
        html_written,
        "Run complete"
    );
    Ok(RunOutcome::Completed(report))
}

fn print_completion(config: &Config, report: &RunReport, show_console: bool) {
    let banner = console::banner();
    println!();
    println!("{banner}");
    if report.all_written() {
        println!("Done!");
    } else {
        println!("Finished with errors");
    }
    println!("{banner}");
    if show_console {
        println!("1. Stories printed to the console");
    }
    if report.json_written {
        println!("2. Data saved to: {}", config.json_output.display());
    }
    if report.html_written {
        println!("3. HTML page created: {}", config.html_output.display());
        println!();
        println!(
            "Open {} in a browser to view the report",
            config.html_output.display()
        );
    }
    println!("{banner}");
}
