//! Markdown table formatters
//!
//! Two independent table shapes: the detailed per-file table and the
//! aggregate-only summary table. Both are pure functions of a
//! [`CoverageSummary`].

mod detailed;
mod metric;
mod summary;

pub use detailed::{DetailedTableFormatter, DEFAULT_HEADING};
pub use metric::{format_metric, DETAILED_PRECISION, NOT_AVAILABLE, SUMMARY_PRECISION};
pub use summary::SummaryTableFormatter;

use crate::model::CoverageSummary;
use crate::result::{CovError, CovResult};
use std::path::Path;

/// Render the per-file table (header, separator, one row per file, totals)
#[must_use]
pub fn render_detailed_table(summary: &CoverageSummary) -> String {
    DetailedTableFormatter::new(summary).table()
}

/// Render the per-file table preceded by the `### Code Coverage Summary` heading
#[must_use]
pub fn render_detailed_document(summary: &CoverageSummary) -> String {
    DetailedTableFormatter::new(summary).generate()
}

/// Render the aggregate Functions/Lines table
#[must_use]
pub fn render_summary_table(summary: &CoverageSummary) -> String {
    SummaryTableFormatter::new(summary).generate()
}

/// Write rendered Markdown to `path`, creating missing parent directories
///
/// # Errors
///
/// Returns [`CovError::Io`] naming the directory or file that could not be
/// written
pub fn write_markdown(path: &Path, markdown: &str) -> CovResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CovError::io(parent, e))?;
    }
    std::fs::write(path, markdown).map_err(|e| CovError::io(path, e))
}
