//! Error types for each stage of the pipeline.
//!
//! Only [`ConfigError`] is fatal. A [`NetworkError`] ends the run early but
//! gracefully, an [`ExtractionFieldError`] drops a single story, and an
//! [`OutputError`] affects only the sink that raised it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The front page could not be fetched.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection, TLS or body decoding failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// A single story could not be turned into a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionFieldError {
    #[error("story {position}: title block contains no link")]
    MissingTitleLink { position: usize },

    #[error("story {position}: {field} token {token:?} is not a number")]
    NotANumber {
        position: usize,
        field: &'static str,
        token: String,
    },
}

impl ExtractionFieldError {
    /// 1-based position of the title/metadata pair that failed.
    pub fn position(&self) -> usize {
        match self {
            Self::MissingTitleLink { position }
            | Self::NotANumber { position, .. } => *position,
        }
    }
}

/// Startup configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid {name} selector {selector:?}: {reason}")]
    Selector {
        name: &'static str,
        selector: String,
        reason: String,
    },

    #[error("invalid site root {root:?}: {source}")]
    SiteRoot {
        root: String,
        #[source]
        source: url::ParseError,
    },
}

/// A sink failed to write its output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
