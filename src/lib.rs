//! Hacker News front page scraper.
//!
//! [`pipeline::run`] wires these modules into a single pass: [`scrapers`]
//! fetches the page and extracts [`models::Story`] values,
//! [`models::ReportBundle`] flattens them into records, and [`outputs`]
//! writes the console summary, the JSON snapshot and the HTML report.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod scrapers;
pub mod utils;

#[cfg(test)]
mod test_support;
