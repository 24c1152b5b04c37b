//! Data models for keys, layers, layouts and actions.
//!
//! Everything here is an immutable value once built. Composition operators
//! return new trees instead of modifying their inputs.

pub mod action;
pub mod direction;
pub mod key;
pub mod layer;
pub mod layout;
pub mod locale;
pub mod modifiers;

// Re-export all model types
pub use action::{
    Action, ActionClass, ActionVisual, Icon, PassthroughKey, SearchDirection, TextBoundary,
};
pub use direction::Direction;
pub use key::KeyM;
pub use layer::{Layer, Position};
pub use layout::{Layout, SymbolOverride, TextDirection, ASCII_DIGITS};
pub use locale::Locale;
pub use modifiers::{ModifierState, ShiftLevel};
