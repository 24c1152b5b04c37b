//! Layout consistency checks.
//!
//! Structural problems and letter bindings that silently cover a symbol are
//! errors. Cosmetic issues such as ragged rows are warnings.

use crate::layouts::LAYER_ROWS;
use crate::models::{Layer, Layout};
use std::fmt::{self, Write as _};
use tracing::{debug, warn};

/// Outcome of checking one layout.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Problems that make the layout unusable or ambiguous
    pub errors: Vec<ValidationError>,
    /// Cosmetic problems
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// An empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// True when no errors were recorded. Warnings don't count.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records an error.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Records a warning.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Numbered listing of errors, then warnings, for terminal output.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut out = String::new();

        if !self.errors.is_empty() {
            let _ = writeln!(out, "❌ {} error(s):", self.errors.len());
            for (n, error) in self.errors.iter().enumerate() {
                let _ = writeln!(out, "  {}. {error}", n + 1);
            }
        }

        if !self.warnings.is_empty() {
            let _ = writeln!(out, "\n⚠️  {} warning(s):", self.warnings.len());
            for (n, warning) in self.warnings.iter().enumerate() {
                let _ = writeln!(out, "  {}. {warning}", n + 1);
            }
        }

        out
    }
}

/// A problem that makes a layout invalid, optionally tied to a key.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Which check failed
    pub kind: ValidationErrorKind,
    /// Row of the offending key
    pub row: Option<u8>,
    /// Column of the offending key
    pub col: Option<u8>,
    /// What is wrong
    pub message: String,
    /// How to fix it, when there is an obvious fix
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// An error without position or suggestion.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            row: None,
            col: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attaches the key position.
    #[must_use]
    pub const fn with_position(mut self, row: u8, col: u8) -> Self {
        self.row = Some(row);
        self.col = Some(col);
        self
    }

    /// Attaches a fix hint.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(row), Some(col)) = (self.row, self.col) {
            write!(f, "[({row}, {col})] ")?;
        }
        write!(f, "{}: {}", self.kind, self.message)?;
        match &self.suggestion {
            Some(hint) => write!(f, "\n    → {hint}"),
            None => Ok(()),
        }
    }
}

/// Which check an error comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Name, digits or main layer are malformed
    InvalidStructure,
    /// Letter binding covers a symbol without being allow-listed
    ShadowedSymbol,
    /// Explicit shift layer has a different shape than the main layer
    ShiftShapeMismatch,
    /// Main layer can't be placed beside the shared layers
    RowCountMismatch,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidStructure => "Invalid Structure",
            Self::ShadowedSymbol => "Shadowed Symbol",
            Self::ShiftShapeMismatch => "Shift Shape Mismatch",
            Self::RowCountMismatch => "Row Count Mismatch",
        })
    }
}

/// A cosmetic problem; the layout still works.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// What looks off
    pub message: String,
}

impl ValidationWarning {
    /// A warning with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Checks a layout against the symbol layer it will be merged over.
pub struct LayoutValidator<'a> {
    layout: &'a Layout,
    symbols: &'a Layer,
}

impl<'a> LayoutValidator<'a> {
    /// Creates a new layout validator.
    #[must_use]
    pub const fn new(layout: &'a Layout, symbols: &'a Layer) -> Self {
        Self { layout, symbols }
    }

    /// Runs every check.
    ///
    /// Checks:
    /// - Name, digits and main layer are well formed
    /// - Main layer has as many rows as the shared layers
    /// - Explicit shift layer matches the main layer's shape
    /// - No letter covers a symbol unless allow-listed
    /// - Rows are even and keys bind something (warnings)
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if let Err(reason) = self.layout.validate_structure() {
            report.add_error(ValidationError::new(
                ValidationErrorKind::InvalidStructure,
                reason.to_string(),
            ));
        }

        self.validate_rows(&mut report);
        self.validate_shift_shape(&mut report);
        self.validate_symbol_overlap(&mut report);
        self.validate_keys(&mut report);

        debug!(
            layout = %self.layout.id,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "Validated layout"
        );

        report
    }

    fn validate_rows(&self, report: &mut ValidationReport) {
        let rows = self.layout.main_layer.row_count();
        if rows != LAYER_ROWS && rows != 0 {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::RowCountMismatch,
                    format!("Main layer has {rows} rows, expected {LAYER_ROWS}"),
                )
                .with_suggestion("Pad the layer with empty rows or merge rows together"),
            );
        }

        if !self.layout.main_layer.is_rectangular() {
            report.add_warning(ValidationWarning::new(format!(
                "Layout '{}' has rows of different lengths",
                self.layout.id
            )));
        }
    }

    fn validate_shift_shape(&self, report: &mut ValidationReport) {
        if !self.layout.shift_layer_matches() {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::ShiftShapeMismatch,
                    "Shift layer shape differs from the main layer",
                )
                .with_suggestion("Give the shift layer one key per main layer key"),
            );
        }
    }

    fn validate_symbol_overlap(&self, report: &mut ValidationReport) {
        for (position, key) in self.layout.main_layer.keys() {
            let Some(symbol_key) = self.symbols.get_key(position) else {
                continue;
            };

            for (direction, action) in &key.actions {
                let Some(symbol) = symbol_key.action(*direction) else {
                    continue;
                };
                if self.layout.allows_override(position, *direction) {
                    continue;
                }

                warn!(
                    layout = %self.layout.id,
                    %direction,
                    "Letter {action} covers symbol {symbol}"
                );
                report.add_error(
                    ValidationError::new(
                        ValidationErrorKind::ShadowedSymbol,
                        format!("{action} at {direction} covers symbol {symbol}"),
                    )
                    .with_position(position.row, position.col)
                    .with_suggestion("Move the letter or add a symbol override"),
                );
            }
        }

        for entry in &self.layout.symbol_overrides {
            let covers_symbol = self
                .symbols
                .get_key(entry.position)
                .and_then(|k| k.action(entry.direction))
                .is_some();
            let has_letter = self
                .layout
                .main_layer
                .get_key(entry.position)
                .and_then(|k| k.action(entry.direction))
                .is_some();

            if !(covers_symbol && has_letter) {
                report.add_warning(ValidationWarning::new(format!(
                    "Symbol override at ({}, {}) {} doesn't cover anything",
                    entry.position.row, entry.position.col, entry.direction
                )));
            }
        }
    }

    fn validate_keys(&self, report: &mut ValidationReport) {
        for (position, key) in self.layout.main_layer.keys() {
            let fallback_empty = self
                .symbols
                .get_key(position)
                .is_none_or(crate::models::KeyM::is_empty);
            if key.is_empty() && fallback_empty {
                report.add_warning(ValidationWarning::new(format!(
                    "Key at ({}, {}) has no bindings",
                    position.row, position.col
                )));
            }
        }
    }
}
