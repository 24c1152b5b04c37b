//! Application-wide constants.

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "flickgrid";

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV_VAR: &str = "FLICKGRID_CONFIG";
