//! Coverage report loading
//!
//! ## Input Format
//!
//! ```text
//! {
//!   "files": [
//!     { "filename": "src/a.c",
//!       "function_percent": 80, "function_covered": 4, "function_total": 5,
//!       "line_percent": ..., "branch_percent": ..., ... }
//!   ],
//!   "function_percent": 80, "function_covered": 4, "function_total": 5,
//!   "line_percent": ..., "branch_percent": ..., ...
//! }
//! ```
//!
//! `files` may be omitted. Metric fields may be null or omitted; they render
//! as `N/A`. The aggregate record must be present.
//!
//! The `*_aggregate` entry points read the aggregate record only and never
//! look at `files`, so a summary table can be produced from a report whose
//! per-file detail is incomplete.

use crate::model::{CoverageMetric, CoverageSummary, FileCoverage, MetricKind, MetricSet};
use crate::result::{CovError, CovResult};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

/// Suffixes that, joined to a [`MetricKind::key_prefix`], name a metric field
const FIELD_SUFFIXES: [&str; 3] = ["percent", "covered", "total"];

#[derive(Debug, Default, Deserialize)]
struct RawMetrics {
    #[serde(default)]
    function_percent: Option<f64>,
    #[serde(default)]
    function_covered: Option<u64>,
    #[serde(default)]
    function_total: Option<u64>,
    #[serde(default)]
    line_percent: Option<f64>,
    #[serde(default)]
    line_covered: Option<u64>,
    #[serde(default)]
    line_total: Option<u64>,
    #[serde(default)]
    branch_percent: Option<f64>,
    #[serde(default)]
    branch_covered: Option<u64>,
    #[serde(default)]
    branch_total: Option<u64>,
}

impl From<RawMetrics> for MetricSet {
    fn from(raw: RawMetrics) -> Self {
        Self {
            function: CoverageMetric {
                percent: raw.function_percent,
                covered: raw.function_covered,
                total: raw.function_total,
            },
            line: CoverageMetric {
                percent: raw.line_percent,
                covered: raw.line_covered,
                total: raw.line_total,
            },
            branch: CoverageMetric {
                percent: raw.branch_percent,
                covered: raw.branch_covered,
                total: raw.branch_total,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawFile {
    filename: String,
    #[serde(flatten)]
    metrics: RawMetrics,
}

impl CoverageSummary {
    /// Parse a coverage report from a JSON string
    pub fn from_json_str(json: &str) -> CovResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse only the aggregate record from a JSON string
    pub fn aggregate_from_json_str(json: &str) -> CovResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value_aggregate(value)
    }

    /// Parse a coverage report from a reader
    pub fn from_reader(reader: impl Read) -> CovResult<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Load a coverage report from a JSON file
    pub fn load(path: &Path) -> CovResult<Self> {
        let summary = Self::from_json_str(&read_report(path)?)?;
        tracing::debug!(
            path = %path.display(),
            files = summary.files.len(),
            "loaded coverage report"
        );
        Ok(summary)
    }

    /// Load only the aggregate record from a JSON file; `files` is skipped
    pub fn load_aggregate(path: &Path) -> CovResult<Self> {
        let summary = Self::aggregate_from_json_str(&read_report(path)?)?;
        tracing::debug!(path = %path.display(), "loaded aggregate coverage");
        Ok(summary)
    }

    /// Validate an already-parsed JSON document against the report schema
    pub fn from_value(value: Value) -> CovResult<Self> {
        let mut root = expect_root(value)?;

        let files = match root.remove("files") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| parse_file(index, entry))
                .collect::<CovResult<Vec<_>>>()?,
            Some(other) => {
                return Err(CovError::malformed(format!(
                    "`files` must be an array, found {}",
                    json_type(&other)
                )));
            }
        };

        Ok(Self {
            files,
            totals: parse_totals(root)?,
        })
    }

    /// Validate the aggregate record of an already-parsed document.
    ///
    /// The result has no file records, whatever `files` holds.
    pub fn from_value_aggregate(value: Value) -> CovResult<Self> {
        let mut root = expect_root(value)?;
        root.remove("files");
        Ok(Self::aggregate_only(parse_totals(root)?))
    }
}

fn read_report(path: &Path) -> CovResult<String> {
    std::fs::read_to_string(path).map_err(|e| CovError::io(path, e))
}

/// Unwrap the root object and check that it carries an aggregate record
fn expect_root(value: Value) -> CovResult<Map<String, Value>> {
    let Value::Object(root) = value else {
        return Err(CovError::malformed(format!(
            "expected an object at the top level, found {}",
            json_type(&value)
        )));
    };

    if !has_aggregate(&root) {
        return Err(CovError::malformed("missing aggregate coverage record"));
    }
    Ok(root)
}

fn parse_totals(root: Map<String, Value>) -> CovResult<MetricSet> {
    let totals: RawMetrics = serde_json::from_value(Value::Object(root))
        .map_err(|e| CovError::malformed(format!("aggregate record: {e}")))?;
    Ok(totals.into())
}

fn has_aggregate(root: &Map<String, Value>) -> bool {
    MetricKind::ALL.iter().any(|kind| {
        FIELD_SUFFIXES
            .iter()
            .any(|suffix| root.contains_key(&format!("{}_{suffix}", kind.key_prefix())))
    })
}

fn parse_file(index: usize, entry: Value) -> CovResult<FileCoverage> {
    if !entry.is_object() {
        return Err(CovError::malformed(format!(
            "files[{index}]: expected an object, found {}",
            json_type(&entry)
        )));
    }

    let raw: RawFile = serde_json::from_value(entry)
        .map_err(|e| CovError::malformed(format!("files[{index}]: {e}")))?;

    Ok(FileCoverage {
        filename: raw.filename,
        metrics: raw.metrics.into(),
    })
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
