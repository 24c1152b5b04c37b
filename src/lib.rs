//! Flick keyboard engine library
//!
//! Turns raw touch samples on a key into gestures, resolves gestures to
//! editing actions, and composes the layered keyboards those keys live in.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod gesture;
pub mod layouts;
pub mod models;
pub mod services;
