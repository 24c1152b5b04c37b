//! Single-key action model.

use crate::models::action::{Action, ActionClass};
use crate::models::direction::Direction;
use crate::models::locale::Locale;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every action a single key can fire.
///
/// # Structure
///
/// - `actions` binds up to nine zones; unbound zones are no-ops
/// - `fast_actions` fire while dragging, before release
/// - `shift` and `transient_shift` are full keys themselves (usually one level deep)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyM {
    /// Zone bindings
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub actions: BTreeMap<Direction, Action>,
    /// Bindings fired mid-drag
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fast_actions: BTreeMap<Direction, Action>,
    /// Fired on a stationary long hold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_action: Option<Action>,
    /// Width in grid cells
    #[serde(default = "default_colspan")]
    pub colspan: u32,
    /// Upper-case/alternate variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<Box<KeyM>>,
    /// Variant used while a modifier is momentarily held
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transient_shift: Option<Box<KeyM>>,
}

const fn default_colspan() -> u32 {
    1
}

impl Default for KeyM {
    fn default() -> Self {
        Self {
            actions: BTreeMap::new(),
            fast_actions: BTreeMap::new(),
            hold_action: None,
            colspan: default_colspan(),
            shift: None,
            transient_shift: None,
        }
    }
}

impl KeyM {
    /// Creates a key from zone bindings.
    pub fn new(actions: impl IntoIterator<Item = (Direction, Action)>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Creates a key with one text action per listed zone.
    pub fn text(bindings: &[(Direction, &str)]) -> Self {
        Self::new(bindings.iter().map(|(d, t)| (*d, Action::text(*t))))
    }

    /// A key with nothing bound.
    #[must_use]
    pub fn empty() -> Self {
        Self::new([])
    }

    /// Sets the fast actions.
    #[must_use]
    pub fn with_fast_actions(mut self, fast: impl IntoIterator<Item = (Direction, Action)>) -> Self {
        self.fast_actions = fast.into_iter().collect();
        self
    }

    /// Sets the hold action.
    #[must_use]
    pub fn with_hold(mut self, action: Action) -> Self {
        self.hold_action = Some(action);
        self
    }

    /// Sets the column span.
    #[must_use]
    pub const fn with_colspan(mut self, colspan: u32) -> Self {
        self.colspan = colspan;
        self
    }

    /// Sets the shift variant.
    #[must_use]
    pub fn with_shift(mut self, shift: KeyM) -> Self {
        self.shift = Some(Box::new(shift));
        self
    }

    /// Sets the transient shift variant.
    #[must_use]
    pub fn with_transient_shift(mut self, transient: KeyM) -> Self {
        self.transient_shift = Some(Box::new(transient));
        self
    }

    /// Action bound at `direction`, if any.
    #[must_use]
    pub fn action(&self, direction: Direction) -> Option<&Action> {
        self.actions.get(&direction)
    }

    /// Returns true if nothing at all is bound (including hold and fast actions).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.fast_actions.is_empty() && self.hold_action.is_none()
    }

    /// Fills every zone this key leaves unbound from `fallback`.
    ///
    /// Shift variants are merged recursively when both sides have one.
    /// The hold action comes from `self`, then `fallback`, then (with
    /// `hold_for_fallback`) the fallback's center action. The transient
    /// shift is taken as-is from whichever side defines it, `self` first.
    #[must_use]
    pub fn merge_fallback(&self, fallback: &KeyM, hold_for_fallback: bool) -> Self {
        let mut actions = fallback.actions.clone();
        actions.extend(self.actions.iter().map(|(d, a)| (*d, a.clone())));

        let mut fast_actions = fallback.fast_actions.clone();
        fast_actions.extend(self.fast_actions.iter().map(|(d, a)| (*d, a.clone())));

        let hold_action = self
            .hold_action
            .clone()
            .or_else(|| fallback.hold_action.clone())
            .or_else(|| {
                if hold_for_fallback {
                    fallback.action(Direction::Center).cloned()
                } else {
                    None
                }
            });

        let shift = match (&self.shift, &fallback.shift) {
            (Some(own), Some(other)) => {
                Some(Box::new(own.merge_fallback(other, hold_for_fallback)))
            }
            (Some(own), None) => Some(own.clone()),
            (None, other) => other.clone(),
        };

        Self {
            actions,
            fast_actions,
            hold_action,
            colspan: self.colspan,
            shift,
            transient_shift: self
                .transient_shift
                .clone()
                .or_else(|| fallback.transient_shift.clone()),
        }
    }

    /// Returns a copy with `shift` attached as the shift variant.
    #[must_use]
    pub fn set_shift(&self, shift: KeyM) -> Self {
        Self {
            shift: Some(Box::new(shift)),
            ..self.clone()
        }
    }

    /// Derives the shift variant from the base bindings.
    ///
    /// Every action is passed through [`Action::shift`]; bindings of an
    /// explicit shift variant win for the zones they define.
    #[must_use]
    pub fn auto_shift(&self, locale: &Locale) -> Self {
        let synthesized = Self {
            actions: shifted(&self.actions, locale),
            fast_actions: shifted(&self.fast_actions, locale),
            hold_action: self.hold_action.as_ref().map(|a| a.shift(locale)),
            colspan: self.colspan,
            shift: None,
            transient_shift: None,
        };

        let shift = match &self.shift {
            Some(explicit) => explicit.merge_fallback(&synthesized, false),
            None => synthesized,
        };

        self.set_shift(shift)
    }

    /// Keeps actions whose class is shown, hides or drops the rest.
    #[must_use]
    pub fn filter_actions(&self, shown: &[ActionClass], enable_hidden_actions: bool) -> Self {
        let filter = |map: &BTreeMap<Direction, Action>| -> BTreeMap<Direction, Action> {
            map.iter()
                .filter_map(|(d, a)| {
                    filter_action(a, shown, enable_hidden_actions).map(|kept| (*d, kept))
                })
                .collect()
        };

        Self {
            actions: filter(&self.actions),
            fast_actions: filter(&self.fast_actions),
            hold_action: self
                .hold_action
                .as_ref()
                .and_then(|a| filter_action(a, shown, enable_hidden_actions)),
            colspan: self.colspan,
            shift: self
                .shift
                .as_ref()
                .map(|k| Box::new(k.filter_actions(shown, enable_hidden_actions))),
            transient_shift: self
                .transient_shift
                .as_ref()
                .map(|k| Box::new(k.filter_actions(shown, enable_hidden_actions))),
        }
    }

    /// Swaps bracket pairs in every action, recursively.
    #[must_use]
    pub fn flip_brackets(&self) -> Self {
        let flip = |map: &BTreeMap<Direction, Action>| -> BTreeMap<Direction, Action> {
            map.iter().map(|(d, a)| (*d, a.flip_brackets())).collect()
        };

        Self {
            actions: flip(&self.actions),
            fast_actions: flip(&self.fast_actions),
            hold_action: self.hold_action.as_ref().map(Action::flip_brackets),
            colspan: self.colspan,
            shift: self.shift.as_ref().map(|k| Box::new(k.flip_brackets())),
            transient_shift: self
                .transient_shift
                .as_ref()
                .map(|k| Box::new(k.flip_brackets())),
        }
    }
}

fn shifted(map: &BTreeMap<Direction, Action>, locale: &Locale) -> BTreeMap<Direction, Action> {
    map.iter().map(|(d, a)| (*d, a.shift(locale))).collect()
}

fn filter_action(action: &Action, shown: &[ActionClass], enable_hidden: bool) -> Option<Action> {
    if shown.contains(&action.class()) {
        Some(action.clone())
    } else if enable_hidden {
        Some(action.hide())
    } else {
        None
    }
}
