//! Output formatting for run reports.

use crate::cli::OutputFormat;
use crate::orchestrator::{FileReport, RunResult};

/// Formatter for the run report.
pub struct ReportFormatter {
    format: OutputFormat,
}

impl ReportFormatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print one converted file.
    pub fn print_file(&self, report: &FileReport) {
        println!("{}", self.format_file(report));
    }

    /// Print the summary.
    pub fn print_summary(&self, result: &RunResult) {
        println!("{}", self.format_summary(result));
    }

    fn format_file(&self, report: &FileReport) -> String {
        match self.format {
            OutputFormat::Human => format!(
                "{} -> {} ({} scenario{})",
                report.input.display(),
                report.output.display(),
                report.stats.scenarios,
                plural(report.stats.scenarios)
            ),
            OutputFormat::Json => serde_json::json!({
                "type": "file",
                "input": report.input.to_string_lossy(),
                "output": report.output.to_string_lossy(),
                "stats": report.stats,
            })
            .to_string(),
        }
    }

    fn format_summary(&self, result: &RunResult) -> String {
        match self.format {
            OutputFormat::Human => {
                let count = result.files.len();
                format!(
                    "\x1b[32m✓\x1b[0m Generated {} stub file{} in {} ({}ms)",
                    count,
                    plural(count),
                    result.output_dir.display(),
                    result.duration_ms
                )
            }
            OutputFormat::Json => serde_json::json!({
                "type": "summary",
                "files": result.files.len(),
                "scenarios": result.scenario_count(),
                "output_dir": result.output_dir.to_string_lossy(),
                "duration_ms": result.duration_ms,
            })
            .to_string(),
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
