//! Shared CLI plumbing: error type, exit codes and output helpers.

use crate::config::Config;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was understood but is invalid
    Validation = 1,
    /// File system or serialization failure
    Io = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A CLI failure with the exit code it maps to.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code category
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or a failed check.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Maps a file loading failure to an exit code.
///
/// Failures to read the file are I/O errors; anything else means the
/// content was rejected.
pub fn load_error(what: &str, error: &anyhow::Error) -> CliError {
    let message = format!("Failed to load {what}: {error:#}");
    if error.chain().any(|cause| cause.is::<std::io::Error>()) {
        CliError::io(message)
    } else {
        CliError::validation(message)
    }
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("bad").exit_code(), 1);
        assert_eq!(CliError::io("disk").exit_code(), 2);
        assert_eq!(CliError::io("disk").to_string(), "disk");
    }

    #[test]
    fn test_load_error_exit_codes() {
        let unreadable = anyhow::Error::new(std::io::Error::from(std::io::ErrorKind::NotFound))
            .context("Failed to read layout file: x.json");
        assert_eq!(load_error("layout", &unreadable).kind, ExitCode::Io);

        let parse_failure = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let malformed =
            anyhow::Error::new(parse_failure).context("Failed to parse layout from x.json");
        let error = load_error("layout", &malformed);
        assert_eq!(error.kind, ExitCode::Validation);
        assert!(error.message.starts_with("Failed to load layout: Failed to parse"));
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let config = load_config(Some(Path::new("/nonexistent/flickgrid.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }
}
