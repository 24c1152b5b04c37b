//! Pointer event types and event sources for the recognizer.

use crate::gesture::geometry::Offset;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

/// Phase of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    /// Finger touched down
    Down,
    /// Finger moved
    Move,
    /// Finger lifted
    Up,
    /// Contact was cancelled by the platform
    Cancel,
}

/// One pointer sample for a single touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Position in screen pixels
    pub position: Offset,
    /// Timestamp in milliseconds (monotonic, arbitrary origin)
    pub time_millis: u64,
    /// Phase
    pub phase: PointerPhase,
    /// Already claimed by another gesture owner
    #[serde(default)]
    pub consumed: bool,
}

impl PointerEvent {
    /// Creates an unconsumed event.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f64, y: f64, time_millis: u64) -> Self {
        Self {
            position: Offset::new(x, y),
            time_millis,
            phase,
            consumed: false,
        }
    }

    /// Touch-down at `(x, y)`.
    #[must_use]
    pub const fn down(x: f64, y: f64, time_millis: u64) -> Self {
        Self::new(PointerPhase::Down, x, y, time_millis)
    }

    /// Move to `(x, y)`.
    #[must_use]
    pub const fn moved(x: f64, y: f64, time_millis: u64) -> Self {
        Self::new(PointerPhase::Move, x, y, time_millis)
    }

    /// Lift at `(x, y)`.
    #[must_use]
    pub const fn up(x: f64, y: f64, time_millis: u64) -> Self {
        Self::new(PointerPhase::Up, x, y, time_millis)
    }

    /// Cancellation.
    #[must_use]
    pub const fn cancel(time_millis: u64) -> Self {
        Self::new(PointerPhase::Cancel, 0.0, 0.0, time_millis)
    }

    /// Marks this event as claimed by another owner.
    #[must_use]
    pub const fn into_consumed(mut self) -> Self {
        self.consumed = true;
        self
    }
}

/// Result of waiting for the next pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NextEvent {
    /// An event arrived
    Event(PointerEvent),
    /// The timeout elapsed first
    TimedOut,
}

/// Delivers the events of one touch contact in order.
///
/// `next_event` is the recognizer's only suspend point. With
/// `Some(timeout)` it must return [`NextEvent::TimedOut`] once the timeout
/// elapses without an event. A source that can no longer produce events must
/// report a [`PointerPhase::Cancel`] event rather than block.
pub trait PointerSource {
    /// Waits for the next event, or until `timeout` elapses.
    fn next_event(&mut self, timeout: Option<Duration>) -> NextEvent;
}

impl PointerSource for Receiver<PointerEvent> {
    fn next_event(&mut self, timeout: Option<Duration>) -> NextEvent {
        match timeout {
            Some(timeout) => match self.recv_timeout(timeout) {
                Ok(event) => NextEvent::Event(event),
                Err(RecvTimeoutError::Timeout) => NextEvent::TimedOut,
                Err(RecvTimeoutError::Disconnected) => NextEvent::Event(PointerEvent::cancel(0)),
            },
            None => match self.recv() {
                Ok(event) => NextEvent::Event(event),
                Err(_) => NextEvent::Event(PointerEvent::cancel(0)),
            },
        }
    }
}

/// Replays a recorded trail using its own timestamps as the clock.
///
/// A gap between consecutive events longer than the requested timeout
/// yields [`NextEvent::TimedOut`] and advances the clock by the timeout. An
/// exhausted trail reports a cancellation.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    events: VecDeque<PointerEvent>,
    clock: Option<u64>,
}

impl ReplaySource {
    /// Creates a source replaying `events` in order.
    pub fn new(events: impl IntoIterator<Item = PointerEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            clock: None,
        }
    }

    /// Number of events not yet delivered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl PointerSource for ReplaySource {
    fn next_event(&mut self, timeout: Option<Duration>) -> NextEvent {
        let Some(next) = self.events.front().copied() else {
            return NextEvent::Event(PointerEvent::cancel(self.clock.unwrap_or_default()));
        };

        if let (Some(clock), Some(timeout)) = (self.clock, timeout) {
            let timeout_millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
            if next.time_millis.saturating_sub(clock) >= timeout_millis {
                self.clock = Some(clock.saturating_add(timeout_millis));
                return NextEvent::TimedOut;
            }
        }

        self.events.pop_front();
        self.clock = Some(next.time_millis);
        NextEvent::Event(next)
    }
}
