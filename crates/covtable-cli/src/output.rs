//! User-facing status lines

use console::{style, Term};

/// Writes short status lines to stderr
#[derive(Debug)]
pub struct StatusReporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl StatusReporter {
    /// Create a new status reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(&self.success_line(message));
    }

    /// Print a failure message, even in quiet mode
    pub fn failure(&self, message: &str) {
        let _ = self.term.write_line(&self.failure_line(message));
    }

    fn success_line(&self, message: &str) -> String {
        let prefix = if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "OK".to_string()
        };
        format!("{prefix} {message}")
    }

    fn failure_line(&self, message: &str) -> String {
        let prefix = if self.use_color {
            style("Error:").red().bold().to_string()
        } else {
            "Error:".to_string()
        };
        format!("{prefix} {message}")
    }
}
