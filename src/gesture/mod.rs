//! Gesture recognition for a single touch contact.
//!
//! The recognizer turns a stream of pointer samples into at most one
//! terminal [`Gesture`], optionally firing fast actions while the finger is
//! still moving.

pub mod geometry;
pub mod recognizer;
pub mod source;

use crate::models::Direction;
use serde::{Deserialize, Serialize};

pub use geometry::{direction, looks_round, Offset};
pub use recognizer::{recognize, GestureRecognizer, Step};
pub use source::{NextEvent, PointerEvent, PointerPhase, PointerSource, ReplaySource};

/// Rotation of a circular stroke as seen on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleDirection {
    /// Clockwise
    Clockwise,
    /// Counter-clockwise
    CounterClockwise,
}

/// A tap, hold or swipe resolved to a single zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flick {
    /// Zone the gesture selected
    pub direction: Direction,
    /// Finger was held still past the long-press timeout
    pub long_hold: bool,
    /// Alternate/upper-case variant requested
    pub shift: bool,
}

impl Flick {
    /// A plain tap.
    pub const TAP: Self = Self {
        direction: Direction::Center,
        long_hold: false,
        shift: false,
    };

    /// A stationary long hold.
    pub const HOLD: Self = Self {
        direction: Direction::Center,
        long_hold: true,
        shift: false,
    };

    /// A plain swipe towards `direction`.
    #[must_use]
    pub const fn swipe(direction: Direction, shift: bool) -> Self {
        Self {
            direction,
            long_hold: false,
            shift,
        }
    }
}

/// A recognized terminal gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gesture {
    /// Tap, hold or directional swipe
    Flick(Flick),
    /// Closed circular stroke
    Circle {
        /// Rotation direction
        direction: CircleDirection,
    },
}

impl Gesture {
    /// Normalizes this gesture to a [`Flick`] for resolution.
    ///
    /// Circles become a shifted tap, except clockwise circles which become a
    /// long hold when `long_hold_on_clockwise_circle` is set.
    #[must_use]
    pub const fn to_flick(self, long_hold_on_clockwise_circle: bool) -> Flick {
        match self {
            Self::Flick(flick) => flick,
            Self::Circle {
                direction: CircleDirection::Clockwise,
            } if long_hold_on_clockwise_circle => Flick::HOLD,
            Self::Circle { .. } => Flick {
                direction: Direction::Center,
                long_hold: false,
                shift: true,
            },
        }
    }
}
