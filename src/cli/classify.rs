//! Replays a recorded pointer trail against one key.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::gesture::{Gesture, PointerEvent, ReplaySource};
use crate::layouts::builtin_layout;
use crate::models::{Action, Position};
use crate::services::{compose, process_contact};
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Classify a recorded pointer trail on a key
#[derive(Debug, Clone, Args)]
pub struct ClassifyArgs {
    /// JSON file holding an array of pointer events
    #[arg(short, long, value_name = "FILE")]
    pub trail: PathBuf,

    /// Built-in layout id (defaults to the configured language)
    #[arg(short, long, value_name = "ID")]
    pub language: Option<String>,

    /// Row of the touched key in the composed layer
    #[arg(long)]
    pub row: u8,

    /// Column of the touched key in the composed layer
    #[arg(long)]
    pub col: u8,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ClassifyOutput {
    gesture: Option<Gesture>,
    actions: Vec<Action>,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let events = read_trail(&self.trail)?;

        let id = self.language.as_deref().unwrap_or(&config.layout.language);
        let layout = builtin_layout(id)
            .ok_or_else(|| CliError::validation(format!("Unknown layout: {id}")))?;
        let layer = compose(&layout, &config.layout);

        let position = Position::new(self.row, self.col);
        let key = layer.get_key(position).ok_or_else(|| {
            CliError::validation(format!(
                "No key at row {}, column {} (layer is {}×{})",
                self.row,
                self.col,
                layer.row_count(),
                layer.column_count()
            ))
        })?;

        debug!(events = events.len(), "Replaying trail");
        let mut source = ReplaySource::new(events);
        let mut actions = Vec::new();
        let gesture = process_contact(&mut source, key, &config.gesture, |action| {
            actions.push(action.clone());
        });

        let output = ClassifyOutput { gesture, actions };
        if self.json {
            return print_json(&output);
        }

        println!("Gesture: {}", describe(output.gesture.as_ref()));
        if output.actions.is_empty() {
            println!("Actions: none");
        } else {
            println!("Actions:");
            for action in &output.actions {
                println!("  {action}");
            }
        }

        Ok(())
    }
}

fn read_trail(path: &Path) -> CliResult<Vec<PointerEvent>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io(format!("Failed to read trail file {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        CliError::validation(format!("Invalid trail file {}: {e}", path.display()))
    })
}

fn describe(gesture: Option<&Gesture>) -> String {
    match gesture {
        None => "none".to_string(),
        Some(Gesture::Circle { direction }) => format!("circle ({direction:?})"),
        Some(Gesture::Flick(flick)) if flick.long_hold => "long hold".to_string(),
        Some(Gesture::Flick(flick)) => {
            let mut text = if flick.direction == crate::models::Direction::Center {
                "tap".to_string()
            } else {
                format!("swipe {}", flick.direction)
            };
            if flick.shift {
                text.push_str(" (shift)");
            }
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{CircleDirection, Flick};
    use crate::models::Direction;

    #[test]
    fn test_describe() {
        assert_eq!(describe(None), "none");
        assert_eq!(describe(Some(&Gesture::Flick(Flick::TAP))), "tap");
        assert_eq!(describe(Some(&Gesture::Flick(Flick::HOLD))), "long hold");
        assert_eq!(
            describe(Some(&Gesture::Flick(Flick::swipe(Direction::BottomLeft, true)))),
            "swipe bottom-left (shift)"
        );
        assert_eq!(
            describe(Some(&Gesture::Circle {
                direction: CircleDirection::Clockwise
            })),
            "circle (Clockwise)"
        );
    }
}
