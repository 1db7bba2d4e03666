//! Single-cell metric formatting

use crate::model::CoverageMetric;

/// Rendered in place of a metric that is absent or has nothing to cover
pub const NOT_AVAILABLE: &str = "N/A";

/// Decimal places used by the detailed table (`85%`)
pub const DETAILED_PRECISION: usize = 0;

/// Decimal places used by the summary table (`85.00%`)
pub const SUMMARY_PRECISION: usize = 2;

/// Format a metric as `<percent>% (<covered>/<total>)`.
///
/// The percent is rounded to `precision` decimal places. Metrics with a
/// missing field or a zero total render as [`NOT_AVAILABLE`].
#[must_use]
pub fn format_metric(metric: &CoverageMetric, precision: usize) -> String {
    metric.values().map_or_else(
        || NOT_AVAILABLE.to_string(),
        |(percent, covered, total)| format!("{percent:.precision$}% ({covered}/{total})"),
    )
}
