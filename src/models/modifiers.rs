//! Modifier state snapshot supplied by the session layer.

use serde::{Deserialize, Serialize};

/// Sticky shift level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftLevel {
    /// Lower case
    #[default]
    Normal,
    /// Upper case for the next character
    Shift,
    /// Upper case until toggled off
    CapsLock,
}

impl ShiftLevel {
    /// Returns true when characters should currently be upper-cased.
    #[must_use]
    pub const fn is_shifted(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// Current modifier flags.
///
/// The core only reads this value; the session layer owns and mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierState {
    /// Shift level
    pub shift: ShiftLevel,
    /// Ctrl held/latched
    pub ctrl: bool,
    /// Alt held/latched
    pub alt: bool,
    /// Combining-mark ("zalgo") mode
    pub zalgo: bool,
    /// Selection mode (cursor movement extends the selection)
    pub select: bool,
}

impl ModifierState {
    /// Sets the shift level.
    #[must_use]
    pub const fn with_shift(mut self, shift: ShiftLevel) -> Self {
        self.shift = shift;
        self
    }

    /// Sets the ctrl flag.
    #[must_use]
    pub const fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    /// Sets the alt flag.
    #[must_use]
    pub const fn with_alt(mut self, alt: bool) -> Self {
        self.alt = alt;
        self
    }

    /// Sets the zalgo flag.
    #[must_use]
    pub const fn with_zalgo(mut self, zalgo: bool) -> Self {
        self.zalgo = zalgo;
        self
    }

    /// Sets the select flag.
    #[must_use]
    pub const fn with_select(mut self, select: bool) -> Self {
        self.select = select;
        self
    }
}
