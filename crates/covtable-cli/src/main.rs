//! covtable CLI: JSON coverage report to Markdown table
//!
//! ## Usage
//!
//! ```bash
//! covtable                               # Configured default variant
//! covtable detailed -i coverage.json     # Per-file table
//! covtable summary --stdout              # Aggregate table on stdout
//! covtable --config covtable.yaml config # Show effective configuration
//! ```

use clap::Parser;
use covtable_cli::{
    handlers::{execute_config, execute_detailed, execute_summary},
    logging, Cli, CliConfig, CliResult, ColorChoice, Commands, DetailedArgs, StatusReporter,
    SummaryArgs, TableVariant,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let use_color = config.color.should_color();
    logging::init(logging::level_for(config.verbosity, cli.verbose), use_color);
    let reporter = StatusReporter::new(use_color, config.verbosity.is_quiet());

    match run(cli, &config, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &CliConfig, reporter: &StatusReporter) -> CliResult<()> {
    match cli.command {
        Some(Commands::Detailed(args)) => execute_detailed(config, &args, reporter),
        Some(Commands::Summary(args)) => execute_summary(config, &args, reporter),
        Some(Commands::Config) => execute_config(config),
        None => match config.variant {
            TableVariant::Detailed => execute_detailed(config, &DetailedArgs::default(), reporter),
            TableVariant::Summary => execute_summary(config, &SummaryArgs::default(), reporter),
        },
    }
}

/// Defaults, then the config file, then global flags
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match cli.config {
        Some(ref path) => CliConfig::from_file(path)?,
        None => CliConfig::new(),
    };

    if cli.quiet || cli.verbose > 0 {
        config = config.with_verbosity(logging::verbosity_for(cli.verbose, cli.quiet));
    }
    if let Some(color) = cli.color {
        config = config.with_color(ColorChoice::from(color));
    }

    Ok(config)
}
