//! Console summary of the extracted stories.
//!
//! Prints a banner, one line per story for the first `limit` stories in page
//! order, and the total count:
//!
//! ```text
//! ============================================================
//! HACKER NEWS STORIES
//! ============================================================
//! 1. Title: Show HN: A terminal client for a news site with a...; Comments: 15;
//!
//! Total stories: 30
//! ============================================================
//! ```

use crate::models::StoryRecord;
use crate::utils::truncate_chars;
use std::io::{self, Write};

/// Width of the `=` banner framing console output.
pub const BANNER_WIDTH: usize = 60;

pub fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Write the summary to any writer.
pub fn write_summary<W: Write>(
    out: &mut W,
    records: &[StoryRecord],
    limit: usize,
    title_width: usize,
) -> io::Result<()> {
    let banner = banner();
    writeln!(out)?;
    writeln!(out, "{banner}")?;
    writeln!(out, "HACKER NEWS STORIES")?;
    writeln!(out, "{banner}")?;

    for record in records.iter().take(limit) {
        writeln!(
            out,
            "{}. Title: {}...; Comments: {};",
            record.id,
            truncate_chars(&record.title, title_width),
            record.comment_count
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Total stories: {}", records.len())?;
    writeln!(out, "{banner}")?;
    out.flush()
}

/// Write the summary to standard output.
pub fn print_summary(records: &[StoryRecord], limit: usize, title_width: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_summary(&mut handle, records, limit, title_width)
}
