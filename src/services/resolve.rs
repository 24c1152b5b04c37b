//! Gesture to action resolution.

use crate::gesture::{Flick, Gesture};
use crate::models::{Action, KeyM};

/// Picks the action a flick selects on `key`.
///
/// A long hold selects the hold action. A shift flick uses the transient
/// shift variant when present, otherwise the shift variant, provided that
/// variant binds the flicked direction. Everything else falls back to the
/// base binding for the direction.
#[must_use]
pub fn resolve<'k>(flick: &Flick, key: &'k KeyM) -> Option<&'k Action> {
    if flick.long_hold {
        return key.hold_action.as_ref();
    }

    if flick.shift {
        let variant = key.transient_shift.as_deref().or(key.shift.as_deref());
        if let Some(action) = variant.and_then(|v| v.action(flick.direction)) {
            return Some(action);
        }
    }

    key.action(flick.direction)
}

/// Resolves any gesture, normalizing circles first.
#[must_use]
pub fn resolve_gesture<'k>(
    gesture: &Gesture,
    key: &'k KeyM,
    long_hold_on_clockwise_circle: bool,
) -> Option<&'k Action> {
    resolve(&gesture.to_flick(long_hold_on_clockwise_circle), key)
}
