//! CLI command handlers for flickgrid.
//!
//! Headless access to layout composition, gesture classification and
//! layout checks, for scripting and CI.

pub mod check;
pub mod classify;
pub mod common;
pub mod config;
pub mod layouts;
pub mod show;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use classify::ClassifyArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layouts::LayoutsArgs;
pub use show::ShowArgs;
