//! covtable CLI Library
//!
//! Command-line interface for writing Markdown coverage tables.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{Cli, ColorArg, Commands, DetailedArgs, IoArgs, SummaryArgs};
pub use config::{
    CliConfig, ColorChoice, TableVariant, Verbosity, DEFAULT_INPUT, DEFAULT_OUTPUT,
};
pub use error::{CliError, CliResult};
pub use output::StatusReporter;
