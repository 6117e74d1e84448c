//! Command-line interface definitions.
//!
//! Every flag is optional: without any, the front page is fetched and the
//! report is written to `data.json` and `index.html` in the working directory.
//! Flags take precedence over the config file.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Defaults: ./data.json and ./index.html
/// hn_front_page
///
/// # Custom output paths
/// hn_front_page -j out/data.json -o out/index.html
///
/// # Settings from a file, list only five stories on the console
/// hn_front_page --config hn.yaml --limit 5
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the JSON snapshot [default: data.json]
    #[arg(short, long, env = "HN_JSON_OUTPUT")]
    pub json_output: Option<PathBuf>,

    /// Where to write the HTML report [default: index.html]
    #[arg(short = 'o', long, env = "HN_HTML_OUTPUT")]
    pub html_output: Option<PathBuf>,

    /// Page to scrape [default: https://news.ycombinator.com/]
    #[arg(long, env = "HN_SOURCE_URL")]
    pub source_url: Option<String>,

    /// Number of stories listed in the console summary [default: 10]
    #[arg(long)]
    pub limit: Option<usize>,

    /// Skip the console summary
    #[arg(long)]
    pub no_console: bool,
}
