//! covtable: Markdown tables from JSON coverage summaries
//!
//! Reads the aggregate and per-file function/line/branch coverage emitted by
//! tools such as `gcovr --json-summary` and renders it as a Markdown table
//! suitable for a README, a CI job summary or a pull request comment.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌─────────────────┐    ┌─────────────────────┐
//! │ JSON report  │───►│ CoverageSummary │───►│ Detailed / Summary  │───► Markdown
//! │ (loader)     │    │ (typed model)   │    │ table formatter     │
//! └──────────────┘    └─────────────────┘    └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use covtable::{render_detailed_table, CoverageSummary};
//!
//! let summary = CoverageSummary::from_json_str(
//!     r#"{"line_percent": 90, "line_covered": 9, "line_total": 10}"#,
//! )?;
//! let table = render_detailed_table(&summary);
//! assert!(table.contains("**90% (9/10)**"));
//! # Ok::<(), covtable::CovError>(())
//! ```

#![warn(missing_docs)]

pub mod formatters;
mod loader;
mod model;
mod result;

pub use formatters::{
    format_metric, render_detailed_document, render_detailed_table, render_summary_table,
    write_markdown, DetailedTableFormatter, SummaryTableFormatter, DEFAULT_HEADING,
    DETAILED_PRECISION, NOT_AVAILABLE, SUMMARY_PRECISION,
};
pub use model::{CoverageMetric, CoverageSummary, FileCoverage, MetricKind, MetricSet};
pub use result::{CovError, CovResult};
