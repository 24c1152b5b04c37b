//! Runs the layout consistency checker.

use crate::cli::common::{load_error, print_json, CliError, CliResult};
use crate::layouts::{builtin_layouts, symbols_layer};
use crate::services::{LayoutService, LayoutValidator, ValidationReport};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Check layouts for shadowed symbols and structural problems
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Check this JSON layout file instead of the built-in layouts
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize, Debug)]
struct CheckResponse {
    valid: bool,
    layouts: Vec<LayoutResult>,
}

#[derive(Serialize, Debug)]
struct LayoutResult {
    id: String,
    valid: bool,
    errors: Vec<MessageOutput>,
    warnings: Vec<String>,
}

#[derive(Serialize, Debug)]
struct MessageOutput {
    kind: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    row: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    col: Option<u8>,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> CliResult<()> {
        let layouts = match &self.file {
            Some(path) => vec![LayoutService::load_unchecked(path)
                .map_err(|e| load_error("layout", &e))?],
            None => builtin_layouts(),
        };

        let symbols = symbols_layer();
        let results: Vec<(String, ValidationReport)> = layouts
            .iter()
            .map(|layout| {
                (
                    layout.id.clone(),
                    LayoutValidator::new(layout, &symbols).validate(),
                )
            })
            .collect();

        let response = CheckResponse {
            valid: results.iter().all(|(_, report)| report.is_valid()),
            layouts: results.iter().map(|(id, report)| to_output(id, report)).collect(),
        };

        if self.json {
            print_json(&response)?;
        } else {
            for (id, report) in &results {
                if report.is_valid() {
                    println!("✓ {id}");
                } else {
                    println!("✗ {id}");
                }
                let message = report.format_message();
                if !message.is_empty() {
                    println!("{message}");
                }
            }
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && results.iter().any(|(_, report)| !report.warnings.is_empty()) {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}

fn to_output(id: &str, report: &ValidationReport) -> LayoutResult {
    LayoutResult {
        id: id.to_string(),
        valid: report.is_valid(),
        errors: report
            .errors
            .iter()
            .map(|error| MessageOutput {
                kind: error.kind.to_string(),
                message: error.message.clone(),
                row: error.row,
                col: error.col,
            })
            .collect(),
        warnings: report.warnings.iter().map(ToString::to_string).collect(),
    }
}
