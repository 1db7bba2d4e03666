//! Diagnostic logging setup
//!
//! Log lines go to stderr so `--stdout` output stays clean. `RUST_LOG`
//! overrides the level derived from `-v`/`-q`.

use crate::config::Verbosity;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Log level for the effective verbosity; `-vvv` and beyond enables trace
#[must_use]
pub const fn level_for(verbosity: Verbosity, verbose: u8) -> LevelFilter {
    match verbosity {
        Verbosity::Quiet => LevelFilter::ERROR,
        Verbosity::Normal => LevelFilter::WARN,
        Verbosity::Verbose => LevelFilter::INFO,
        Verbosity::Debug if verbose > 2 => LevelFilter::TRACE,
        Verbosity::Debug => LevelFilter::DEBUG,
    }
}

/// Map CLI verbosity flags to the configured verbosity
#[must_use]
pub const fn verbosity_for(verbose: u8, quiet: bool) -> Verbosity {
    if quiet {
        Verbosity::Quiet
    } else {
        match verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(level: LevelFilter, colored: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(colored)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
