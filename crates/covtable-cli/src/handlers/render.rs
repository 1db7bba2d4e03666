//! Table command handlers

use crate::config::{CliConfig, TableVariant};
use crate::error::CliResult;
use crate::output::StatusReporter;
use crate::{DetailedArgs, IoArgs, SummaryArgs};
use covtable::{CoverageSummary, DetailedTableFormatter, SummaryTableFormatter};
use std::io::Write;
use std::path::PathBuf;

/// Where the rendered Markdown goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Write a file
    File(PathBuf),
    /// Print to stdout
    Stdout,
}

/// Fully resolved render settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Table shape
    pub variant: TableVariant,
    /// Coverage report to read
    pub input: PathBuf,
    /// Output destination
    pub destination: Destination,
    /// Detailed table heading
    pub heading: Option<String>,
}

impl RenderPlan {
    /// Plan using only configured values
    #[must_use]
    pub fn from_config(config: &CliConfig, variant: TableVariant) -> Self {
        Self {
            variant,
            input: config.input.clone(),
            destination: Destination::File(config.output.clone()),
            heading: config.heading.clone(),
        }
    }

    /// Apply input/output flags on top of the configured values
    #[must_use]
    pub fn with_io_args(mut self, io: &IoArgs) -> Self {
        if let Some(ref input) = io.input {
            self.input.clone_from(input);
        }
        if io.stdout {
            self.destination = Destination::Stdout;
        } else if let Some(ref output) = io.output {
            self.destination = Destination::File(output.clone());
        }
        self
    }
}

/// Execute the detailed command
pub fn execute_detailed(
    config: &CliConfig,
    args: &DetailedArgs,
    reporter: &StatusReporter,
) -> CliResult<()> {
    let mut plan = RenderPlan::from_config(config, TableVariant::Detailed).with_io_args(&args.io);
    if args.no_heading {
        plan.heading = None;
    } else if let Some(ref heading) = args.heading {
        plan.heading = Some(heading.clone());
    }
    execute_plan(&plan, reporter)
}

/// Execute the summary command
pub fn execute_summary(
    config: &CliConfig,
    args: &SummaryArgs,
    reporter: &StatusReporter,
) -> CliResult<()> {
    let plan = RenderPlan::from_config(config, TableVariant::Summary).with_io_args(&args.io);
    execute_plan(&plan, reporter)
}

/// Load, render and write according to a plan
pub fn execute_plan(plan: &RenderPlan, reporter: &StatusReporter) -> CliResult<()> {
    tracing::info!(
        input = %plan.input.display(),
        variant = plan.variant.as_str(),
        "rendering coverage table"
    );
    let summary = load_summary(plan)?;
    let markdown = render_markdown(&summary, plan);

    match plan.destination {
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(markdown.as_bytes())?;
            stdout.flush()?;
        }
        Destination::File(ref path) => {
            covtable::write_markdown(path, &markdown)?;
            tracing::info!(output = %path.display(), bytes = markdown.len(), "wrote coverage table");
            reporter.success(&format!("Coverage table written to {}", path.display()));
        }
    }
    Ok(())
}

/// Load the report; the summary variant reads the aggregate record only
pub fn load_summary(plan: &RenderPlan) -> CliResult<CoverageSummary> {
    let summary = match plan.variant {
        TableVariant::Detailed => CoverageSummary::load(&plan.input)?,
        TableVariant::Summary => CoverageSummary::load_aggregate(&plan.input)?,
    };
    Ok(summary)
}

/// Render the Markdown for a plan's variant
#[must_use]
pub fn render_markdown(summary: &CoverageSummary, plan: &RenderPlan) -> String {
    match plan.variant {
        TableVariant::Detailed => {
            let formatter = DetailedTableFormatter::new(summary);
            match plan.heading {
                Some(ref heading) => formatter.with_heading(heading.as_str()).generate(),
                None => formatter.without_heading().generate(),
            }
        }
        TableVariant::Summary => SummaryTableFormatter::new(summary).generate(),
    }
}
