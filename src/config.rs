//! Runtime configuration.
//!
//! Settings are layered: built-in defaults, then an optional YAML file
//! (`--config`), then command-line flags and their environment variables.
//! Every field in the file is optional.
//!
//! ```yaml
//! json_output: out/data.json
//! html_output: out/index.html
//! console_limit: 20
//! layout:
//!   score: span.score
//! ```

use crate::cli::Cli;
use crate::error::ConfigError;
use scraper::Selector;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use url::Url;

pub const DEFAULT_SOURCE_URL: &str = "https://news.ycombinator.com/";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Page that is fetched.
    pub source_url: String,
    /// Root that relative story links and discussion links are resolved against.
    pub site_root: String,
    /// Sent as the `User-Agent` header of the single request.
    pub user_agent: String,
    pub json_output: PathBuf,
    pub html_output: PathBuf,
    /// How many stories the console summary lists.
    pub console_limit: usize,
    /// How many characters of each title the console summary shows.
    pub title_width: usize,
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            site_root: DEFAULT_SOURCE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            json_output: PathBuf::from("data.json"),
            html_output: PathBuf::from("index.html"),
            console_limit: 10,
            title_width: 50,
            layout: Layout::default(),
        }
    }
}

/// CSS selectors describing where the front page keeps each field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    pub title_block: String,
    /// First match inside a title block is the headline link.
    pub title_link: String,
    pub metadata_block: String,
    /// Last match inside a metadata block is the comments link.
    pub metadata_link: String,
    pub score: String,
    pub author: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title_block: "span.titleline".to_string(),
            title_link: "a".to_string(),
            metadata_block: "td.subtext".to_string(),
            metadata_link: "a".to_string(),
            score: "span.score".to_string(),
            author: "a.hnuser".to_string(),
        }
    }
}

/// [`Layout`] with every selector parsed.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub title_block: Selector,
    pub title_link: Selector,
    pub metadata_block: Selector,
    pub metadata_link: Selector,
    pub score: Selector,
    pub author: Selector,
}

fn parse_selector(name: &'static str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::Selector {
        name,
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

impl Layout {
    pub fn compile(&self) -> Result<Selectors, ConfigError> {
        Ok(Selectors {
            title_block: parse_selector("title_block", &self.title_block)?,
            title_link: parse_selector("title_link", &self.title_link)?,
            metadata_block: parse_selector("metadata_block", &self.metadata_block)?,
            metadata_link: parse_selector("metadata_link", &self.metadata_link)?,
            score: parse_selector("score", &self.score)?,
            author: parse_selector("author", &self.author)?,
        })
    }
}

impl Config {
    /// Parse a YAML document; missing fields keep their defaults.
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the config file if one was given, otherwise use the defaults.
    #[instrument(level = "info")]
    pub async fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("No config file given; using defaults");
            return Ok(Self::default());
        };
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from_yaml(&yaml, path)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Apply command-line overrides on top of the file and defaults.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.source_url {
            self.source_url = url.clone();
        }
        if let Some(path) = &cli.json_output {
            self.json_output = path.clone();
        }
        if let Some(path) = &cli.html_output {
            self.html_output = path.clone();
        }
        if let Some(limit) = cli.limit {
            self.console_limit = limit;
        }
        self
    }

    pub fn site_root(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.site_root).map_err(|source| ConfigError::SiteRoot {
            root: self.site_root.clone(),
            source,
        })
    }
}
