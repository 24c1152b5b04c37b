//! Prints the composed keyboard layer.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::layouts::builtin_layout;
use crate::models::{ActionVisual, Direction, KeyM, Layer, Locale, ModifierState, ShiftLevel};
use crate::services::compose;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Cell width of one zone in the text grid.
const ZONE_WIDTH: usize = 2;

/// Show the composed layer for a layout
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Built-in layout id (defaults to the configured language)
    #[arg(short, long, value_name = "ID")]
    pub language: Option<String>,

    /// Show the shift variants as seen with shift engaged
    #[arg(long)]
    pub shift: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct KeyOutput {
    colspan: u32,
    zones: BTreeMap<Direction, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hold: Option<String>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let id = self.language.as_deref().unwrap_or(&config.layout.language);
        let layout = builtin_layout(id)
            .ok_or_else(|| CliError::validation(format!("Unknown layout: {id}")))?;

        let layer = compose(&layout, &config.layout);
        let modifiers = if self.shift {
            ModifierState::default().with_shift(ShiftLevel::Shift)
        } else {
            ModifierState::default()
        };

        let rows: Vec<Vec<KeyOutput>> = layer
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|key| key_output(self.variant(key), &modifiers, &layout.locale))
                    .collect()
            })
            .collect();

        if self.json {
            return print_json(&rows);
        }

        println!("{} ({})", layout.name, layout.id);
        print_grid(&layer, |key| self.variant(key), &modifiers, &layout.locale);
        Ok(())
    }

    fn variant<'k>(&self, key: &'k KeyM) -> &'k KeyM {
        if self.shift {
            key.shift.as_deref().unwrap_or(key)
        } else {
            key
        }
    }
}

fn visual_text(visual: &ActionVisual) -> Option<String> {
    match visual {
        ActionVisual::Label(label) => Some(label.clone()),
        ActionVisual::Icon(icon) => Some(icon.glyph().to_string()),
        ActionVisual::None => None,
    }
}

fn key_output(key: &KeyM, modifiers: &ModifierState, locale: &Locale) -> KeyOutput {
    KeyOutput {
        colspan: key.colspan,
        zones: key
            .actions
            .iter()
            .filter_map(|(d, a)| visual_text(&a.visual(modifiers, locale)).map(|v| (*d, v)))
            .collect(),
        hold: key
            .hold_action
            .as_ref()
            .and_then(|a| visual_text(&a.visual(modifiers, locale))),
    }
}

/// Draws each key as a 3×3 block of zone labels.
fn print_grid<'k>(
    layer: &'k Layer,
    pick: impl Fn(&'k KeyM) -> &'k KeyM,
    modifiers: &ModifierState,
    locale: &Locale,
) {
    for row in &layer.rows {
        let border: String = row
            .iter()
            .map(|_| format!("+{}", "-".repeat(ZONE_WIDTH * 3 + 2)))
            .collect();
        println!("{border}+");

        for dy in -1..=1 {
            let mut line = String::new();
            for key in row {
                let key = pick(key);
                line.push_str("| ");
                for dx in -1..=1 {
                    let label = zone_at(dx, dy)
                        .and_then(|d| key.action(d))
                        .and_then(|a| visual_text(&a.visual(modifiers, locale)))
                        .unwrap_or_default();
                    line.push_str(&pad(&label));
                }
                line.push(' ');
            }
            println!("{line}|");
        }
    }

    if let Some(last) = layer.rows.last() {
        let border: String = last
            .iter()
            .map(|_| format!("+{}", "-".repeat(ZONE_WIDTH * 3 + 2)))
            .collect();
        println!("{border}+");
    }
}

fn zone_at(dx: i8, dy: i8) -> Option<Direction> {
    Direction::ALL.into_iter().find(|d| d.offset() == (dx, dy))
}

fn pad(label: &str) -> String {
    let width = label.chars().count();
    if width >= ZONE_WIDTH {
        label.chars().take(ZONE_WIDTH).collect()
    } else {
        format!("{label}{}", " ".repeat(ZONE_WIDTH - width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Action;

    #[test]
    fn test_zone_lookup() {
        assert_eq!(zone_at(0, 0), Some(Direction::Center));
        assert_eq!(zone_at(-1, -1), Some(Direction::TopLeft));
        assert_eq!(zone_at(1, 1), Some(Direction::BottomRight));
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("a"), "a ");
        assert_eq!(pad("abc"), "ab");
        assert_eq!(pad(""), "  ");
    }

    #[test]
    fn test_key_output_skips_hidden() {
        let key = KeyM::new([
            (Direction::Center, Action::text("a")),
            (Direction::Top, Action::text("b").hide()),
            (Direction::Left, Action::backspace()),
        ]);
        let output = key_output(&key, &ModifierState::default(), &Locale::ENGLISH);
        assert_eq!(output.zones.get(&Direction::Center).map(String::as_str), Some("a"));
        assert_eq!(output.zones.get(&Direction::Left).map(String::as_str), Some("⌫"));
        assert!(!output.zones.contains_key(&Direction::Top));
    }
}
