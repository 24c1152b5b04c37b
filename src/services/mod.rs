//! Service layer for business logic.
//!
//! These services sit between the pure models and the outer surfaces:
//! resolving gestures to actions, running contacts end to end, composing
//! the visible layer, and reading, writing and checking layout files.

pub mod compose;
pub mod dispatch;
pub mod layouts;
pub mod resolve;
pub mod validator;

// Re-export commonly used types and functions
pub use compose::{compose, compose_with, letter_layer};
pub use dispatch::process_contact;
pub use layouts::LayoutService;
pub use resolve::{resolve, resolve_gesture};
pub use validator::{
    LayoutValidator, ValidationError, ValidationErrorKind, ValidationReport, ValidationWarning,
};
