//! Per-contact gesture state machine.
//!
//! [`GestureRecognizer`] is advanced by [`recognize`], an event pump whose
//! only blocking point is [`PointerSource::next_event`]. While the contact
//! has not started dragging, that wait carries the long-press timeout.

use crate::config::GestureConfig;
use crate::gesture::geometry::{direction, looks_round, Offset};
use crate::gesture::source::{NextEvent, PointerEvent, PointerPhase, PointerSource};
use crate::gesture::{Flick, Gesture};
use crate::models::{Action, KeyM};
use std::time::Duration;
use tracing::{debug, trace};

/// Outcome of feeding one input to the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep waiting for events
    Continue,
    /// The contact is resolved; `None` means no gesture
    Finished(Option<Gesture>),
}

/// State for one touch contact, from down to up.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    config: GestureConfig,
    origin: Offset,
    last_position: Offset,
    trail: Vec<Offset>,
    dragging: bool,
    most_extreme: Offset,
    most_extreme_distance_squared: f64,
    fast_traversal: Offset,
    fast_action_performed: bool,
}

impl GestureRecognizer {
    /// Starts tracking a contact that touched down at `origin`.
    ///
    /// `config` is copied so threshold changes never affect a gesture
    /// that is already in flight.
    #[must_use]
    pub fn new(config: GestureConfig, origin: Offset) -> Self {
        Self {
            config,
            origin,
            last_position: origin,
            trail: vec![origin],
            dragging: false,
            most_extreme: Offset::ZERO,
            most_extreme_distance_squared: 0.0,
            fast_traversal: Offset::ZERO,
            fast_action_performed: false,
        }
    }

    /// Returns true once the contact has left the tap radius.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns true if a fast action fired during this contact.
    #[must_use]
    pub const fn fast_action_performed(&self) -> bool {
        self.fast_action_performed
    }

    /// How long the next wait may last before it counts as a long hold.
    #[must_use]
    pub const fn wait_timeout(&self) -> Option<Duration> {
        if self.dragging {
            None
        } else {
            Some(self.config.long_press_timeout())
        }
    }

    /// Handles the long-press timeout elapsing with no event.
    pub fn on_timeout(&mut self) -> Step {
        if self.dragging {
            return Step::Continue;
        }
        debug!("Long hold detected");
        Step::Finished(Some(Gesture::Flick(Flick::HOLD)))
    }

    /// Handles one pointer event, firing fast actions bound on `key`
    /// through `on_fast_action`.
    pub fn on_event<F>(&mut self, event: &PointerEvent, key: &KeyM, on_fast_action: &mut F) -> Step
    where
        F: FnMut(&Action),
    {
        if event.consumed {
            debug!("Pointer event consumed by another owner, aborting gesture");
            return Step::Finished(None);
        }

        match event.phase {
            PointerPhase::Down => {
                trace!("Ignoring repeated down event");
                Step::Continue
            }
            PointerPhase::Move => {
                self.track(event.position);
                self.accumulate_fast_actions(event.position, key, on_fast_action);
                self.last_position = event.position;
                Step::Continue
            }
            PointerPhase::Up => {
                self.track(event.position);
                self.last_position = event.position;
                Step::Finished(self.release(event.position))
            }
            PointerPhase::Cancel => {
                debug!("Contact cancelled");
                Step::Finished(None)
            }
        }
    }

    fn track(&mut self, position: Offset) {
        let offset = position - self.origin;
        let distance_squared = offset.distance_squared();

        if !self.dragging
            && distance_squared > self.config.swipe_threshold * self.config.swipe_threshold
        {
            trace!(?offset, "Drag started");
            self.dragging = true;
        }

        if distance_squared > self.most_extreme_distance_squared {
            self.most_extreme = offset;
            self.most_extreme_distance_squared = distance_squared;
        }

        self.trail.push(position);
    }

    fn accumulate_fast_actions<F>(&mut self, position: Offset, key: &KeyM, on_fast_action: &mut F)
    where
        F: FnMut(&Action),
    {
        if key.fast_actions.is_empty() {
            return;
        }

        let threshold = self.config.fast_swipe_threshold;
        self.fast_traversal += position - self.last_position;

        while self.fast_traversal.distance_squared() > threshold * threshold {
            let heading = direction(self.fast_traversal);
            let unit = self.fast_traversal / self.fast_traversal.distance();
            self.fast_traversal -= unit * threshold;

            if let Some(action) = key.fast_actions.get(&heading) {
                debug!(%action, %heading, "Fast action");
                on_fast_action(action);
                self.fast_action_performed = true;
            }
        }
    }

    fn release(&self, position: Offset) -> Option<Gesture> {
        if self.fast_action_performed {
            debug!("Release after fast actions, no terminal gesture");
            return None;
        }

        if !self.dragging {
            debug!("Tap");
            return Some(Gesture::Flick(Flick::TAP));
        }

        if let Some(circle) = looks_round(
            &self.trail,
            self.config.circle_jaggedness_threshold,
            self.config.circle_discontinuity_threshold,
            self.config.circle_angle_threshold,
        ) {
            debug!(?circle, "Circle");
            return Some(Gesture::Circle { direction: circle });
        }

        let heading = direction(self.most_extreme);
        let release = position - self.origin;
        let u_turn = (release - self.most_extreme).distance_squared()
            > self.most_extreme_distance_squared * self.config.u_turn_ratio;

        debug!(%heading, shift = u_turn, "Swipe");
        Some(Gesture::Flick(Flick::swipe(heading, u_turn)))
    }
}

/// Runs the recognizer for one contact pulled from `source`.
///
/// The first event must be a down event; anything else yields no gesture.
/// Fast actions are reported through `on_fast_action` as they happen.
pub fn recognize<S, F>(
    source: &mut S,
    key: &KeyM,
    config: &GestureConfig,
    mut on_fast_action: F,
) -> Option<Gesture>
where
    S: PointerSource + ?Sized,
    F: FnMut(&Action),
{
    let down = match source.next_event(None) {
        NextEvent::Event(event) if event.phase == PointerPhase::Down && !event.consumed => event,
        other => {
            debug!(?other, "Contact did not start with a down event");
            return None;
        }
    };

    let mut recognizer = GestureRecognizer::new(*config, down.position);

    loop {
        let step = match source.next_event(recognizer.wait_timeout()) {
            NextEvent::Event(event) => recognizer.on_event(&event, key, &mut on_fast_action),
            NextEvent::TimedOut => recognizer.on_timeout(),
        };

        if let Step::Finished(gesture) = step {
            return gesture;
        }
    }
}
