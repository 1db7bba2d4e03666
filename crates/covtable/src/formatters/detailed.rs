//! Detailed Markdown Table Formatter
//!
//! One row per file plus a bolded totals row.
//!
//! ## Layout
//!
//! ```text
//! ### Code Coverage Summary
//!
//! | File | Functions | Lines | Branches |
//! |------|-----------|-------|----------|
//! | `a.c` | 80% (4/5) | 90% (9/10) | 50% (1/2) |
//! | **Total** | **80% (4/5)** | **90% (9/10)** | **50% (1/2)** |
//! ```

use super::metric::{format_metric, DETAILED_PRECISION};
use super::write_markdown;
use crate::model::{CoverageSummary, MetricKind, MetricSet};
use crate::result::CovResult;
use std::fmt::Write;
use std::path::Path;

/// Heading placed above the detailed table
pub const DEFAULT_HEADING: &str = "Code Coverage Summary";

const HEADER: &str = "| File | Functions | Lines | Branches |";
const SEPARATOR: &str = "|------|-----------|-------|----------|";

/// Per-file Markdown table generator
#[derive(Debug)]
pub struct DetailedTableFormatter<'a> {
    summary: &'a CoverageSummary,
    precision: usize,
    heading: Option<String>,
}

impl<'a> DetailedTableFormatter<'a> {
    /// Create a formatter with whole-percent precision and the default heading
    #[must_use]
    pub fn new(summary: &'a CoverageSummary) -> Self {
        Self {
            summary,
            precision: DETAILED_PRECISION,
            heading: Some(DEFAULT_HEADING.to_string()),
        }
    }

    /// Set the number of decimal places for percentages
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the heading text
    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Emit the table without a heading
    #[must_use]
    pub fn without_heading(mut self) -> Self {
        self.heading = None;
        self
    }

    /// Generate the table alone: header, separator, file rows, totals
    #[must_use]
    pub fn table(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{HEADER}");
        let _ = writeln!(output, "{SEPARATOR}");

        for file in &self.summary.files {
            tracing::trace!(filename = %file.filename, "rendering file row");
            let [function, line, branch] = self.cells(&file.metrics);
            let _ = writeln!(
                output,
                "| `{}` | {function} | {line} | {branch} |",
                escape_cell(&file.filename)
            );
        }

        let [function, line, branch] = self.cells(&self.summary.totals);
        let _ = writeln!(
            output,
            "| **Total** | **{function}** | **{line}** | **{branch}** |"
        );

        output
    }

    /// Generate the full document: heading (if any), blank line, table
    #[must_use]
    pub fn generate(&self) -> String {
        match self.heading {
            Some(ref heading) => format!("### {heading}\n\n{}", self.table()),
            None => self.table(),
        }
    }

    /// Save the document to a file
    ///
    /// # Errors
    ///
    /// Returns error if a parent directory cannot be created or the write fails
    pub fn save(&self, path: &Path) -> CovResult<()> {
        write_markdown(path, &self.generate())
    }

    fn cells(&self, metrics: &MetricSet) -> [String; 3] {
        MetricKind::ALL.map(|kind| format_metric(metrics.get(kind), self.precision))
    }
}

/// Keep a value on one table row: pipes are escaped, line breaks become spaces
pub(super) fn escape_cell(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '|' => escaped.push_str("\\|"),
            '\r' => {
                chars.next_if_eq(&'\n');
                escaped.push(' ');
            }
            '\n' => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}
