//! CLI configuration
//!
//! Settings are layered: built-in defaults, then an optional YAML file
//! (`--config`), then command-line flags.

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the JSON coverage report
pub const DEFAULT_INPUT: &str = "tests/coverage_report/coverage_report.json";

/// Default location of the Markdown table
pub const DEFAULT_OUTPUT: &str = "COVERAGE_TABLE.md";

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stderr_is_terminal(),
        }
    }
}

/// Status lines go to stderr, so that is the stream to check
fn stderr_is_terminal() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Which table shape to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableVariant {
    /// Per-file rows plus totals, whole percentages
    #[default]
    Detailed,
    /// Aggregate functions and lines, two decimals
    Summary,
}

impl TableVariant {
    /// Lowercase name, as used in config files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::Summary => "summary",
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Coverage report to read
    pub input: PathBuf,
    /// Markdown file to write
    pub output: PathBuf,
    /// Table shape used when no subcommand is given
    pub variant: TableVariant,
    /// Heading above the detailed table; `None` omits it
    pub heading: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            variant: TableVariant::Detailed,
            heading: Some(covtable::DEFAULT_HEADING.to_string()),
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a YAML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml_ng::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml)
    }

    /// Render the configuration as YAML
    pub fn to_yaml(&self) -> CliResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| CliError::config(e.to_string()))
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set input path
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Set output path
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set default table variant
    #[must_use]
    pub const fn with_variant(mut self, variant: TableVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the detailed table heading
    #[must_use]
    pub fn with_heading(mut self, heading: Option<String>) -> Self {
        self.heading = heading;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default_verbosity() {
            assert_eq!(Verbosity::default(), Verbosity::Normal);
        }

        #[test]
        fn test_is_quiet() {
            assert!(Verbosity::Quiet.is_quiet());
            assert!(!Verbosity::Normal.is_quiet());
            assert!(!Verbosity::Verbose.is_quiet());
            assert!(!Verbosity::Debug.is_quiet());
        }
    }

    mod color_choice_tests {
        use super::*;

        #[test]
        fn test_default_color() {
            assert_eq!(ColorChoice::default(), ColorChoice::Auto);
        }

        #[test]
        fn test_should_color_always() {
            assert!(ColorChoice::Always.should_color());
        }

        #[test]
        fn test_should_color_never() {
            assert!(!ColorChoice::Never.should_color());
        }

        #[test]
        fn test_should_color_auto() {
            // Depends on terminal detection
            let _ = ColorChoice::Auto.should_color();
        }
    }

    mod cli_config_tests {
        use super::*;

        #[test]
        fn test_default_config() {
            let config = CliConfig::default();
            assert_eq!(config.verbosity, Verbosity::Normal);
            assert_eq!(config.color, ColorChoice::Auto);
            assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
            assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
            assert_eq!(config.variant, TableVariant::Detailed);
            assert_eq!(config.heading.as_deref(), Some("Code Coverage Summary"));
        }

        #[test]
        fn test_chained_builders() {
            let config = CliConfig::new()
                .with_verbosity(Verbosity::Verbose)
                .with_color(ColorChoice::Never)
                .with_input("cov.json")
                .with_output("out/TABLE.md")
                .with_variant(TableVariant::Summary)
                .with_heading(None);

            assert_eq!(config.verbosity, Verbosity::Verbose);
            assert_eq!(config.color, ColorChoice::Never);
            assert_eq!(config.input, PathBuf::from("cov.json"));
            assert_eq!(config.output, PathBuf::from("out/TABLE.md"));
            assert_eq!(config.variant, TableVariant::Summary);
            assert!(config.heading.is_none());
        }

        #[test]
        fn test_from_yaml_partial() {
            let config = CliConfig::from_yaml("variant: summary\noutput: docs/COVERAGE.md\n").unwrap();
            assert_eq!(config.variant, TableVariant::Summary);
            assert_eq!(config.output, PathBuf::from("docs/COVERAGE.md"));
            assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        }

        #[test]
        fn test_from_yaml_null_heading() {
            let config = CliConfig::from_yaml("heading: null\n").unwrap();
            assert!(config.heading.is_none());
        }

        #[test]
        fn test_from_yaml_empty() {
            let config = CliConfig::from_yaml("").unwrap();
            assert_eq!(config, CliConfig::default());
        }

        #[test]
        fn test_from_yaml_unknown_key() {
            assert!(CliConfig::from_yaml("fail_fast: true\n").is_err());
        }

        #[test]
        fn test_from_yaml_bad_variant() {
            assert!(CliConfig::from_yaml("variant: html\n").is_err());
        }

        #[test]
        fn test_yaml_roundtrip() {
            let config = CliConfig::new()
                .with_variant(TableVariant::Summary)
                .with_heading(Some("Nightly".to_string()));
            let yaml = config.to_yaml().unwrap();
            assert!(yaml.contains("variant: summary"));
            assert_eq!(CliConfig::from_yaml(&yaml).unwrap(), config);
        }

        #[test]
        fn test_from_file_missing() {
            let err = CliConfig::from_file(Path::new("/nonexistent/covtable.yaml")).unwrap_err();
            assert!(matches!(err, CliError::Config { .. }));
        }

        #[test]
        fn test_from_file() {
            let temp = tempfile::TempDir::new().unwrap();
            let path = temp.path().join("covtable.yaml");
            std::fs::write(&path, "input: build/coverage.json\ncolor: never\n").unwrap();

            let config = CliConfig::from_file(&path).unwrap();
            assert_eq!(config.input, PathBuf::from("build/coverage.json"));
            assert_eq!(config.color, ColorChoice::Never);
        }
    }

    #[test]
    fn test_variant_as_str() {
        assert_eq!(TableVariant::Detailed.as_str(), "detailed");
        assert_eq!(TableVariant::Summary.as_str(), "summary");
    }
}
