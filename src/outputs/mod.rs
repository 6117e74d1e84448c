//! Output sinks for the extracted stories.
//!
//! Each sink is independent: it reads the records, never changes them, and a
//! failure in one does not stop the others.
//!
//! # Submodules
//!
//! - [`console`]: Prints a short summary of the first stories to stdout
//! - [`json`]: Writes the [`ReportBundle`](crate::models::ReportBundle) snapshot
//! - [`html`]: Writes a self-contained HTML report with summary figures
//!
//! # Output Structure
//!
//! ```text
//! ./
//! ├── data.json    # snapshot, replaced every run
//! └── index.html   # report, replaced every run
//! ```

pub mod console;
pub mod html;
pub mod json;
