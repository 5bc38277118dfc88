use anyhow::{Context, Result};
use clap::Parser;
use pipeline_core::{run_files, PipelineConfig, RunSummary};
use std::path::PathBuf;
use tracing::info;

/// Copies the valid ISO 8601 date-time lines of INPUT to OUTPUT, dropping
/// repeated lines and keeping input order.
#[derive(Parser, Debug)]
///
/// Takes exactly two paths and no flags; any string, including one starting
/// with `-`, is a path.
#[command(name = "dates", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// File to read lines from
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub input: PathBuf,

    /// File to write the surviving lines to (created or truncated)
    #[arg(value_name = "OUTPUT", allow_hyphen_values = true)]
    pub output: PathBuf,
}

impl Cli {
    pub fn run(self) -> Result<RunSummary> {
        let config = PipelineConfig::default();
        let summary = run_files(&self.input, &self.output, &config).with_context(|| {
            format!(
                "failed to filter {} into {}",
                self.input.display(),
                self.output.display()
            )
        })?;

        info!(
            input = %self.input.display(),
            output = %self.output.display(),
            lines_read = summary.lines_read,
            written = summary.written,
            "done"
        );
        Ok(summary)
    }
}
