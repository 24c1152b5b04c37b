//! Lists the built-in layouts, optionally exporting them as JSON files.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::layouts::builtin_layouts;
use crate::models::TextDirection;
use crate::services::LayoutService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// List built-in layouts
#[derive(Debug, Clone, Args)]
pub struct LayoutsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Write every built-in layout as a JSON file into this directory
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,
}

#[derive(Serialize, Debug)]
struct LayoutSummary {
    id: String,
    name: String,
    locale: String,
    text_direction: TextDirection,
    rows: usize,
    columns: usize,
}

impl LayoutsArgs {
    /// Execute the layouts command
    pub fn execute(&self) -> CliResult<()> {
        let layouts = builtin_layouts();

        if let Some(dir) = &self.export {
            for layout in &layouts {
                let path = LayoutService::file_path_in(dir, layout);
                LayoutService::save(layout, &path)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                info!("Exported {} to {}", layout.id, path.display());
            }
        }

        let summaries: Vec<LayoutSummary> = layouts
            .iter()
            .map(|layout| LayoutSummary {
                id: layout.id.clone(),
                name: layout.name.clone(),
                locale: layout.locale.to_string(),
                text_direction: layout.text_direction,
                rows: layout.main_layer.row_count(),
                columns: layout.main_layer.column_count(),
            })
            .collect();

        if self.json {
            return print_json(&summaries);
        }

        println!("Built-in layouts:");
        for summary in &summaries {
            let rtl = if summary.text_direction == TextDirection::Rtl {
                " (RTL)"
            } else {
                ""
            };
            println!(
                "  {:<4} {} [{}] {}×{}{}",
                summary.id, summary.name, summary.locale, summary.rows, summary.columns, rtl
            );
        }

        Ok(())
    }
}
