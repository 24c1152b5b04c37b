//! Language layout definitions.

use crate::models::direction::Direction;
use crate::models::layer::{Layer, Position};
use crate::models::locale::Locale;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Writing direction of the layout's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    /// Left to right
    #[default]
    Ltr,
    /// Right to left
    Rtl,
}

/// A letter binding that deliberately replaces the symbol layer's binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolOverride {
    /// Key position
    pub position: Position,
    /// Zone on that key
    pub direction: Direction,
}

/// Everything language-specific about a keyboard.
///
/// # Validation
///
/// - Name must be non-empty, max 50 characters
/// - Main layer must have at least one row and one key
/// - Explicit shift layer must have the main layer's shape
/// - Digits must be exactly ten characters, zero first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Identifier (e.g., "en", "uk")
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Locale used for case mapping
    #[serde(default)]
    pub locale: Locale,
    /// Main letter layer
    pub main_layer: Layer,
    /// Explicit shift layer; derived with auto-shift when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_layer: Option<Layer>,
    /// Explicit numeric layer; generated from `digits` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_layer: Option<Layer>,
    /// Digits 0-9 in this script
    #[serde(default = "default_digits")]
    pub digits: String,
    /// Script direction
    #[serde(default)]
    pub text_direction: TextDirection,
    /// Letter bindings allowed to shadow symbol bindings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symbol_overrides: Vec<SymbolOverride>,
}

/// Western Arabic digits.
pub const ASCII_DIGITS: &str = "0123456789";

fn default_digits() -> String {
    ASCII_DIGITS.to_string()
}

impl Layout {
    /// Creates a layout with ASCII digits, LTR direction and no overrides.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        locale: Locale,
        main_layer: Layer,
    ) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        Ok(Self {
            id: id.into(),
            name,
            locale,
            main_layer,
            shift_layer: None,
            numeric_layer: None,
            digits: default_digits(),
            text_direction: TextDirection::Ltr,
            symbol_overrides: Vec::new(),
        })
    }

    /// Validates layout name.
    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("Layout name cannot be empty");
        }

        if name.chars().count() > 50 {
            anyhow::bail!(
                "Layout name '{}' exceeds maximum length of 50 characters (got {})",
                name,
                name.chars().count()
            );
        }

        Ok(())
    }

    /// Sets an explicit shift layer.
    #[must_use]
    pub fn with_shift_layer(mut self, shift_layer: Layer) -> Self {
        self.shift_layer = Some(shift_layer);
        self
    }

    /// Sets an explicit numeric layer.
    #[must_use]
    pub fn with_numeric_layer(mut self, numeric_layer: Layer) -> Self {
        self.numeric_layer = Some(numeric_layer);
        self
    }

    /// Sets the digit string.
    #[must_use]
    pub fn with_digits(mut self, digits: impl Into<String>) -> Self {
        self.digits = digits.into();
        self
    }

    /// Sets the script direction.
    #[must_use]
    pub const fn with_text_direction(mut self, direction: TextDirection) -> Self {
        self.text_direction = direction;
        self
    }

    /// Allows the letter binding at `position`/`direction` to shadow a symbol.
    #[must_use]
    pub fn with_symbol_override(mut self, position: Position, direction: Direction) -> Self {
        self.symbol_overrides.push(SymbolOverride {
            position,
            direction,
        });
        self
    }

    /// Returns true if the letter binding at `position`/`direction` is
    /// allowed to shadow the symbol layer.
    #[must_use]
    pub fn allows_override(&self, position: Position, direction: Direction) -> bool {
        self.symbol_overrides
            .iter()
            .any(|o| o.position == position && o.direction == direction)
    }

    /// Digit `n` (0-9) in this layout's script.
    #[must_use]
    pub fn digit(&self, n: usize) -> Option<char> {
        self.digits.chars().nth(n)
    }

    /// Checks structural invariants of the layout data.
    pub fn validate(&self) -> Result<()> {
        self.validate_structure()?;

        if !self.shift_layer_matches() {
            anyhow::bail!(
                "Layout '{}' has a shift layer whose shape differs from the main layer",
                self.id
            );
        }

        Ok(())
    }

    /// Name, main layer and digit checks, without the shift layer shape.
    pub fn validate_structure(&self) -> Result<()> {
        Self::validate_name(&self.name)?;

        if self.main_layer.row_count() == 0 || self.main_layer.column_count() == 0 {
            anyhow::bail!("Layout '{}' has an empty main layer", self.id);
        }

        let digit_count = self.digits.chars().count();
        if digit_count != 10 {
            anyhow::bail!(
                "Layout '{}' must define exactly 10 digits (got {})",
                self.id,
                digit_count
            );
        }

        Ok(())
    }

    /// True when there is no explicit shift layer or it lines up key for key.
    #[must_use]
    pub fn shift_layer_matches(&self) -> bool {
        self.shift_layer
            .as_ref()
            .is_none_or(|shift| shift.same_shape(&self.main_layer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::key::KeyM;

    fn one_key_layer() -> Layer {
        Layer::new(vec![vec![KeyM::text(&[(Direction::Center, "a")])]])
    }

    #[test]
    fn test_layout_new_valid() {
        let layout = Layout::new("t", "Test", Locale::ENGLISH, one_key_layer()).unwrap();
        assert_eq!(layout.digits, ASCII_DIGITS);
        assert_eq!(layout.text_direction, TextDirection::Ltr);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_validate_name() {
        assert!(Layout::new("t", "", Locale::ENGLISH, one_key_layer()).is_err());
        assert!(Layout::new("t", "x".repeat(51), Locale::ENGLISH, one_key_layer()).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_main_layer() {
        let layout = Layout::new("t", "Test", Locale::ENGLISH, Layer::default()).unwrap();
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_misshapen_shift_layer() {
        let shift = Layer::new(vec![vec![KeyM::empty(), KeyM::empty()]]);
        let layout = Layout::new("t", "Test", Locale::ENGLISH, one_key_layer())
            .unwrap()
            .with_shift_layer(shift);
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_validate_digits() {
        let layout = Layout::new("t", "Test", Locale::ENGLISH, one_key_layer())
            .unwrap()
            .with_digits("0123");
        assert!(layout.validate().is_err());

        let arabic = Layout::new("t", "Test", Locale::ARABIC, one_key_layer())
            .unwrap()
            .with_digits("٠١٢٣٤٥٦٧٨٩");
        assert!(arabic.validate().is_ok());
        assert_eq!(arabic.digit(3), Some('٣'));
    }

    #[test]
    fn test_allows_override() {
        let layout = Layout::new("t", "Test", Locale::ENGLISH, one_key_layer())
            .unwrap()
            .with_symbol_override(Position::new(0, 0), Direction::Top);
        assert!(layout.allows_override(Position::new(0, 0), Direction::Top));
        assert!(!layout.allows_override(Position::new(0, 0), Direction::Left));
    }

    #[test]
    fn test_layout_json_roundtrip_defaults() {
        let json = r#"{
            "id": "t",
            "name": "Test",
            "main_layer": [[{"actions": {"center": {"type": "text", "text": "a"}}}]]
        }"#;
        let layout: Layout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.locale, Locale::ENGLISH);
        assert_eq!(layout.digits, ASCII_DIGITS);
        assert_eq!(layout.main_layer, one_key_layer());
    }
}
