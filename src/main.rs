//! # hn_front_page
//!
//! Scrapes the Hacker News front page and writes what it found three ways:
//! a console summary, a JSON snapshot and a static HTML report.
//!
//! ## Usage
//!
//! ```sh
//! hn_front_page -j ./data.json -o ./index.html
//! ```
//!
//! ## Architecture
//!
//! The application is a single pass with no loop:
//! 1. **Fetching**: One GET for the front page
//! 2. **Extraction**: Pair headline and metadata blocks into stories
//! 3. **Output**: Console summary, JSON snapshot and HTML report, each
//!    independent of the others
//!
//! A failed fetch or an empty page ends the run early without touching the
//! output files. The exit status is 0 in both cases; only configuration
//! errors fail the process.

use clap::Parser;
use std::error::Error;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use hn_front_page::cli::Cli;
use hn_front_page::config::Config;
use hn_front_page::pipeline::{self, RunOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = Instant::now();
    info!("hn_front_page starting up");

    // Parse CLI and layer config
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");
    let config = Config::load(args.config.as_deref()).await?.with_cli(&args);
    debug!(?config, "Effective configuration");

    let client = reqwest::Client::new();
    let outcome = pipeline::run(&config, &client, !args.no_console).await?;

    let elapsed = start_time.elapsed();
    let finished = matches!(outcome, RunOutcome::Completed(_));
    info!(?elapsed, finished, "Execution complete");

    Ok(())
}
