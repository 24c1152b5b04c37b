//! Compass directions around a key center.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine zones of a key: the eight compass points plus the center.
///
/// Screen coordinates are used throughout, so `Top` means "negative Y".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Up and to the left
    TopLeft,
    /// Straight up
    Top,
    /// Up and to the right
    TopRight,
    /// Straight left
    Left,
    /// Tap/hold zone, never produced by a swipe
    Center,
    /// Straight right
    Right,
    /// Down and to the left
    BottomLeft,
    /// Straight down
    Bottom,
    /// Down and to the right
    BottomRight,
}

impl Direction {
    /// All nine directions in reading order (row by row, top to bottom).
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Center,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    /// The four diagonal zones.
    pub const CORNERS: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Maps a quantized angle slice (0..8, clockwise from `Right` in
    /// screen coordinates) to its compass direction.
    #[must_use]
    pub const fn from_slice(slice: u8) -> Self {
        match slice % 8 {
            0 => Self::Right,
            1 => Self::BottomRight,
            2 => Self::Bottom,
            3 => Self::BottomLeft,
            4 => Self::Left,
            5 => Self::TopLeft,
            6 => Self::Top,
            _ => Self::TopRight,
        }
    }

    /// Returns true for the diagonal zones.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    /// Unit grid offset `(dx, dy)` of this zone relative to the center.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::TopLeft => (-1, -1),
            Self::Top => (0, -1),
            Self::TopRight => (1, -1),
            Self::Left => (-1, 0),
            Self::Center => (0, 0),
            Self::Right => (1, 0),
            Self::BottomLeft => (-1, 1),
            Self::Bottom => (0, 1),
            Self::BottomRight => (1, 1),
        }
    }

    /// Short human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::Top => "top",
            Self::TopRight => "top-right",
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::BottomLeft => "bottom-left",
            Self::Bottom => "bottom",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
