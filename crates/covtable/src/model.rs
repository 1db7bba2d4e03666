//! Coverage data model
//!
//! Typed view of a coverage report: one aggregate record plus an ordered list
//! of per-file records, each carrying function, line and branch metrics.

use serde::{Deserialize, Serialize};

/// One dimension of coverage (functions, lines or branches) for one scope.
///
/// Fields are reported values taken verbatim from the input; nothing is
/// recomputed or cross-checked.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoverageMetric {
    /// Coverage percentage (0-100)
    pub percent: Option<f64>,
    /// Number of covered items
    pub covered: Option<u64>,
    /// Number of coverable items
    pub total: Option<u64>,
}

impl CoverageMetric {
    /// Create a fully populated metric
    #[must_use]
    pub const fn new(percent: f64, covered: u64, total: u64) -> Self {
        Self {
            percent: Some(percent),
            covered: Some(covered),
            total: Some(total),
        }
    }

    /// Create a metric with every field absent
    #[must_use]
    pub const fn not_available() -> Self {
        Self {
            percent: None,
            covered: None,
            total: None,
        }
    }

    /// The `(percent, covered, total)` triple, or `None` when the metric is
    /// not applicable (a field is absent or `total` is zero).
    #[must_use]
    pub fn values(&self) -> Option<(f64, u64, u64)> {
        match (self.percent, self.covered, self.total) {
            (Some(percent), Some(covered), Some(total)) if total > 0 => {
                Some((percent, covered, total))
            }
            _ => None,
        }
    }
}

/// Which construct a metric measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Function coverage
    Function,
    /// Line coverage
    Line,
    /// Branch coverage
    Branch,
}

impl MetricKind {
    /// All kinds, in table column order
    pub const ALL: [Self; 3] = [Self::Function, Self::Line, Self::Branch];

    /// Prefix used by the JSON keys (`function_percent`, ...)
    #[must_use]
    pub const fn key_prefix(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Line => "line",
            Self::Branch => "branch",
        }
    }

    /// Column label in rendered tables
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Function => "Functions",
            Self::Line => "Lines",
            Self::Branch => "Branches",
        }
    }
}

/// Function, line and branch metrics for one scope
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSet {
    /// Function coverage
    pub function: CoverageMetric,
    /// Line coverage
    pub line: CoverageMetric,
    /// Branch coverage
    pub branch: CoverageMetric,
}

impl MetricSet {
    /// Create a metric set
    #[must_use]
    pub const fn new(function: CoverageMetric, line: CoverageMetric, branch: CoverageMetric) -> Self {
        Self {
            function,
            line,
            branch,
        }
    }

    /// Get the metric for a kind
    #[must_use]
    pub const fn get(&self, kind: MetricKind) -> &CoverageMetric {
        match kind {
            MetricKind::Function => &self.function,
            MetricKind::Line => &self.line,
            MetricKind::Branch => &self.branch,
        }
    }
}

/// Coverage for a single named file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileCoverage {
    /// File identifier, usually a path relative to the project root
    pub filename: String,
    /// Metrics for this file
    pub metrics: MetricSet,
}

impl FileCoverage {
    /// Create file coverage
    #[must_use]
    pub fn new(filename: impl Into<String>, metrics: MetricSet) -> Self {
        Self {
            filename: filename.into(),
            metrics,
        }
    }
}

/// Root of a coverage report: per-file records plus the aggregate totals.
///
/// `files` keeps the order of the input document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Per-file coverage, in presentation order
    pub files: Vec<FileCoverage>,
    /// Totals across all files
    pub totals: MetricSet,
}

impl CoverageSummary {
    /// Create a summary carrying only aggregate metrics
    #[must_use]
    pub fn aggregate_only(totals: MetricSet) -> Self {
        Self {
            files: Vec::new(),
            totals,
        }
    }

    /// Append a file record
    #[must_use]
    pub fn with_file(mut self, file: FileCoverage) -> Self {
        self.files.push(file);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod coverage_metric_tests {
        use super::*;

        #[test]
        fn test_values_complete() {
            let metric = CoverageMetric::new(80.0, 4, 5);
            assert_eq!(metric.values(), Some((80.0, 4, 5)));
        }

        #[test]
        fn test_zero_total_not_applicable() {
            let metric = CoverageMetric::new(0.0, 0, 0);
            assert_eq!(metric.values(), None);
        }

        #[test]
        fn test_any_missing_field_not_applicable() {
            let full = CoverageMetric::new(50.0, 1, 2);
            let no_percent = CoverageMetric {
                percent: None,
                ..full
            };
            let no_covered = CoverageMetric {
                covered: None,
                ..full
            };
            let no_total = CoverageMetric { total: None, ..full };

            assert_eq!(no_percent.values(), None);
            assert_eq!(no_covered.values(), None);
            assert_eq!(no_total.values(), None);
        }

        #[test]
        fn test_default_is_not_available() {
            assert_eq!(CoverageMetric::default(), CoverageMetric::not_available());
        }

        #[test]
        fn test_covered_above_total_passes_through() {
            let metric = CoverageMetric::new(250.0, 10, 4);
            assert_eq!(metric.values(), Some((250.0, 10, 4)));
        }
    }

    mod metric_kind_tests {
        use super::*;

        #[test]
        fn test_key_prefixes() {
            let prefixes: Vec<_> = MetricKind::ALL.iter().map(|k| k.key_prefix()).collect();
            assert_eq!(prefixes, ["function", "line", "branch"]);
        }

        #[test]
        fn test_labels() {
            assert_eq!(MetricKind::Function.label(), "Functions");
            assert_eq!(MetricKind::Line.label(), "Lines");
            assert_eq!(MetricKind::Branch.label(), "Branches");
        }

        #[test]
        fn test_serialize_lowercase() {
            let json = serde_json::to_string(&MetricKind::Branch).unwrap();
            assert_eq!(json, "\"branch\"");
        }
    }

    mod summary_tests {
        use super::*;

        #[test]
        fn test_metric_set_get() {
            let set = MetricSet::new(
                CoverageMetric::new(1.0, 1, 100),
                CoverageMetric::new(2.0, 2, 100),
                CoverageMetric::new(3.0, 3, 100),
            );
            assert_eq!(set.get(MetricKind::Function).covered, Some(1));
            assert_eq!(set.get(MetricKind::Line).covered, Some(2));
            assert_eq!(set.get(MetricKind::Branch).covered, Some(3));
        }

        #[test]
        fn test_with_file_keeps_order() {
            let summary = CoverageSummary::aggregate_only(MetricSet::default())
                .with_file(FileCoverage::new("z.c", MetricSet::default()))
                .with_file(FileCoverage::new("a.c", MetricSet::default()));
            let names: Vec<_> = summary.files.iter().map(|f| f.filename.as_str()).collect();
            assert_eq!(names, ["z.c", "a.c"]);
        }

        #[test]
        fn test_summary_is_send_sync() {
            fn assert_send_sync<T: Send + Sync>() {}
            assert_send_sync::<CoverageSummary>();
        }
    }
}
