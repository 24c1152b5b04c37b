//! Runs one contact from raw pointer events to emitted actions.

use crate::config::GestureConfig;
use crate::gesture::{recognize, Gesture, PointerSource};
use crate::models::{Action, KeyM};
use crate::services::resolve::resolve_gesture;
use tracing::debug;

/// Recognizes one contact on `key` and emits its actions through `on_action`.
///
/// Fast actions are emitted while the contact is in progress. The resolved
/// terminal action, if any, is emitted last. Returns the terminal gesture.
pub fn process_contact<S, F>(
    source: &mut S,
    key: &KeyM,
    config: &GestureConfig,
    mut on_action: F,
) -> Option<Gesture>
where
    S: PointerSource + ?Sized,
    F: FnMut(&Action),
{
    let gesture = recognize(source, key, config, &mut on_action)?;

    match resolve_gesture(&gesture, key, config.long_hold_on_clockwise_circle) {
        Some(action) => {
            debug!(?gesture, %action, "Resolved terminal action");
            on_action(action);
        }
        None => debug!(?gesture, "Gesture resolved to no action"),
    }

    Some(gesture)
}
