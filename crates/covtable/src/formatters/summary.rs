//! Summary Markdown Table Formatter
//!
//! Aggregate function and line coverage only. Per-file records and branch
//! metrics are ignored.
//!
//! ```text
//! | Metric    | Coverage |
//! |-----------|----------|
//! | Functions | 80.00% (4/5) |
//! | Lines     | 90.00% (9/10) |
//! ```

use super::metric::{format_metric, SUMMARY_PRECISION};
use super::write_markdown;
use crate::model::{CoverageSummary, MetricKind};
use crate::result::CovResult;
use std::fmt::Write;
use std::path::Path;

const HEADER: &str = "| Metric    | Coverage |";
const SEPARATOR: &str = "|-----------|----------|";

/// Width of the Metric column, so labels line up with the header
const LABEL_WIDTH: usize = 9;

const ROWS: [MetricKind; 2] = [MetricKind::Function, MetricKind::Line];

/// Aggregate-only Markdown table generator
#[derive(Debug)]
pub struct SummaryTableFormatter<'a> {
    summary: &'a CoverageSummary,
    precision: usize,
}

impl<'a> SummaryTableFormatter<'a> {
    /// Create a formatter with two-decimal precision
    #[must_use]
    pub const fn new(summary: &'a CoverageSummary) -> Self {
        Self {
            summary,
            precision: SUMMARY_PRECISION,
        }
    }

    /// Set the number of decimal places for percentages
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Generate the table
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{HEADER}");
        let _ = writeln!(output, "{SEPARATOR}");

        for kind in ROWS {
            let cell = format_metric(self.summary.totals.get(kind), self.precision);
            let _ = writeln!(output, "| {:<LABEL_WIDTH$} | {cell} |", kind.label());
        }
        output
    }

    /// Save the table to a file
    ///
    /// # Errors
    ///
    /// Returns error if a parent directory cannot be created or the write fails
    pub fn save(&self, path: &Path) -> CovResult<()> {
        write_markdown(path, &self.generate())
    }
}
