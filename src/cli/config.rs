//! Configuration CLI command.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use clap::Args;
use std::path::{Path, PathBuf};

/// Show, locate or initialize the configuration file
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Print the configuration file path and exit
    #[arg(long)]
    pub path: bool,

    /// Write a default configuration file
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing file with --init
    #[arg(long, requires = "init")]
    pub force: bool,

    /// Output as JSON instead of TOML
    #[arg(long, conflicts_with_all = ["path", "init"])]
    pub json: bool,
}

impl ConfigArgs {
    /// Execute config command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let path = resolve_path(config_path)?;

        if self.path {
            println!("{}", path.display());
            return Ok(());
        }

        if self.init {
            if path.exists() && !self.force {
                return Err(CliError::validation(format!(
                    "Configuration already exists at {} (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default()
                .save_to(&path)
                .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;
            println!("Wrote default configuration to {}", path.display());
            return Ok(());
        }

        let config = load_config(Some(&path))?;
        if self.json {
            return print_json(&config);
        }

        let toml = toml::to_string_pretty(&config)
            .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
        print!("{toml}");
        Ok(())
    }
}

fn resolve_path(config_path: Option<&Path>) -> CliResult<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}"))),
    }
}
