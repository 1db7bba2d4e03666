//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// covtable: render a JSON coverage report as a Markdown table
#[derive(Parser, Debug)]
#[command(name = "covtable")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// YAML configuration file
    #[arg(long, global = true, env = "COVTABLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run; defaults to the configured table variant
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the per-file table with branch coverage
    Detailed(DetailedArgs),

    /// Write the aggregate functions/lines table
    Summary(SummaryArgs),

    /// Show the effective configuration
    Config,
}

/// Input/output options shared by both table variants
#[derive(Args, Debug, Clone, Default)]
pub struct IoArgs {
    /// JSON coverage report to read
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Markdown file to write
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the table to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the detailed command
#[derive(Args, Debug, Clone, Default)]
pub struct DetailedArgs {
    /// Input and output
    #[command(flatten)]
    pub io: IoArgs,

    /// Heading text above the table
    #[arg(long, conflicts_with = "no_heading")]
    pub heading: Option<String>,

    /// Omit the heading
    #[arg(long)]
    pub no_heading: bool,
}

/// Arguments for the summary command
#[derive(Args, Debug, Clone, Default)]
pub struct SummaryArgs {
    /// Input and output
    #[command(flatten)]
    pub io: IoArgs,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
