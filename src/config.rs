//! User configuration: gesture thresholds and layout options, stored as TOML.
//!
//! This module handles loading, validating, and saving configuration in TOML
//! format with platform-specific directory resolution. The gesture section is
//! re-read by the caller at the start of every gesture, so edits take effect
//! without rebuilding anything.

use crate::models::ActionClass;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory name under the platform config directory.
const CONFIG_DIR_NAME: &str = "flickgrid";

/// Gesture recognition thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Distance (px) a contact must travel to count as a swipe
    pub swipe_threshold: f64,
    /// Distance (px) per fast-action repeat
    pub fast_swipe_threshold: f64,
    /// Stationary time before a contact becomes a long hold
    pub long_press_timeout_millis: u64,
    /// Maximum radius irregularity of a circle
    pub circle_jaggedness_threshold: f64,
    /// Maximum angular jump (radians) between consecutive circle samples
    pub circle_discontinuity_threshold: f64,
    /// Minimum total rotation (radians) of a circle
    pub circle_angle_threshold: f64,
    /// Clockwise circles act as a long hold instead of a shifted tap
    pub long_hold_on_clockwise_circle: bool,
    /// Squared-distance ratio past which a return swipe counts as a U-turn
    pub u_turn_ratio: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 20.0,
            fast_swipe_threshold: 40.0,
            long_press_timeout_millis: 300,
            circle_jaggedness_threshold: 0.15,
            circle_discontinuity_threshold: PI / 2.0,
            circle_angle_threshold: 1.5 * PI,
            long_hold_on_clockwise_circle: false,
            u_turn_ratio: 0.25,
        }
    }
}

impl GestureConfig {
    /// Long-press timeout as a `Duration`.
    #[must_use]
    pub const fn long_press_timeout(&self) -> Duration {
        Duration::from_millis(self.long_press_timeout_millis)
    }

    /// Validates threshold values.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("swipe_threshold", self.swipe_threshold),
            ("fast_swipe_threshold", self.fast_swipe_threshold),
            ("circle_jaggedness_threshold", self.circle_jaggedness_threshold),
            (
                "circle_discontinuity_threshold",
                self.circle_discontinuity_threshold,
            ),
            ("circle_angle_threshold", self.circle_angle_threshold),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("gesture.{name} must be a positive number (got {value})");
            }
        }

        if self.fast_swipe_threshold < self.swipe_threshold {
            anyhow::bail!(
                "gesture.fast_swipe_threshold ({}) must not be smaller than gesture.swipe_threshold ({})",
                self.fast_swipe_threshold,
                self.swipe_threshold
            );
        }

        if self.long_press_timeout_millis == 0 {
            anyhow::bail!("gesture.long_press_timeout_millis must be greater than 0");
        }

        if !(self.u_turn_ratio > 0.0 && self.u_turn_ratio <= 1.0) {
            anyhow::bail!(
                "gesture.u_turn_ratio must be in (0, 1] (got {})",
                self.u_turn_ratio
            );
        }

        Ok(())
    }
}

/// Which layers are placed side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnabledLayers {
    /// Letters (with symbols) only
    #[default]
    Letters,
    /// Numeric layer only
    Numbers,
    /// Numeric layer next to the letters
    All,
}

/// Which side the control column sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    /// Control column on the right
    #[default]
    RightThumb,
    /// Control column on the left
    LeftThumb,
}

/// Layout composition preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Built-in layout id
    pub language: String,
    /// Layers to show
    pub enabled_layers: EnabledLayers,
    /// Control column side
    pub handedness: Handedness,
    /// Promote a fallback layer's center action to a hold action
    pub hold_for_fallback: bool,
    /// Show letter labels
    pub show_letters: bool,
    /// Show symbol labels
    pub show_symbols: bool,
    /// Show number labels
    pub show_numbers: bool,
    /// Keep filtered actions usable with their labels hidden
    pub enable_hidden_actions: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            enabled_layers: EnabledLayers::default(),
            handedness: Handedness::default(),
            hold_for_fallback: false,
            show_letters: true,
            show_symbols: true,
            show_numbers: true,
            enable_hidden_actions: true,
        }
    }
}

impl LayoutOptions {
    /// Action classes whose labels are shown. `Other` is always shown.
    #[must_use]
    pub fn shown_classes(&self) -> Vec<ActionClass> {
        let mut shown = vec![ActionClass::Other];
        if self.show_letters {
            shown.push(ActionClass::Letter);
        }
        if self.show_symbols {
            shown.push(ActionClass::Symbol);
        }
        if self.show_numbers {
            shown.push(ActionClass::Number);
        }
        shown
    }
}

/// Everything flickgrid reads from `config.toml`.
///
/// # File Location
///
/// - Linux: `~/.config/flickgrid/config.toml`
/// - macOS: `~/Library/Application Support/flickgrid/config.toml`
/// - Windows: `%APPDATA%\flickgrid\config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Gesture thresholds
    #[serde(default)]
    pub gesture: GestureConfig,
    /// Layout composition preferences
    #[serde(default)]
    pub layout: LayoutOptions,
}

impl Config {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `<platform config dir>/flickgrid`.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Default location of `config.toml`.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.gesture.validate()?;

        if self.layout.language.trim().is_empty() {
            anyhow::bail!("layout.language cannot be empty");
        }

        Ok(())
    }
}
