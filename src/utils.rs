//! Formatting helpers for prompts, listings and the final report.

use crate::engine::{Candidate, DeletionResult, Outcome};
use crate::error::Result;
use clap::ValueEnum;
use std::path::PathBuf;

/// Output format for candidate listings and deletion reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Format deletion confirmation message with path list
pub fn format_deletion_message(paths: &[PathBuf]) -> String {
    let mut message = format!("About to delete {} path(s):\n", paths.len());
    for path in paths.iter().take(5) {
        message.push_str(&format!("  {}\n", path.display()));
    }
    if paths.len() > 5 {
        message.push_str(&format!("  ... and {} more\n", paths.len() - 5));
    }
    message.push_str("Are you sure you want to delete these paths?");
    message
}

pub fn format_candidates(candidates: &[Candidate], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(candidates
            .iter()
            .map(|c| format!("{}\n", c.path.display()))
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(candidates)?),
    }
}

pub fn format_report(results: &[DeletionResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(results.iter().map(report_line).collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

fn report_line(result: &DeletionResult) -> String {
    match &result.outcome {
        Outcome::Deleted => format!("Deleted: {}\n", result.path.display()),
        Outcome::Skipped { cause } => {
            format!("Skipped: {} ({})\n", result.path.display(), cause)
        }
    }
}
