//! flickgrid - flick keyboard layouts and gesture classification from the
//! command line.

use clap::{Parser, Subcommand};
use flickgrid::cli::{CheckArgs, ClassifyArgs, CliResult, ConfigArgs, LayoutsArgs, ShowArgs};
use flickgrid::constants::{APP_BINARY_NAME, CONFIG_ENV_VAR};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// flickgrid - gesture-driven flick keyboard engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE", env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in layouts
    Layouts(LayoutsArgs),
    /// Show the composed layer for a layout
    Show(ShowArgs),
    /// Classify a recorded pointer trail on a key
    Classify(ClassifyArgs),
    /// Check layouts for shadowed symbols and structural problems
    Check(CheckArgs),
    /// Show, locate or initialize the configuration file
    Config(ConfigArgs),
}

impl Cli {
    fn execute(&self) -> CliResult<()> {
        let config = self.config.as_deref();
        match &self.command {
            Command::Layouts(args) => args.execute(),
            Command::Show(args) => args.execute(config),
            Command::Classify(args) => args.execute(config),
            Command::Check(args) => args.execute(),
            Command::Config(args) => args.execute(config),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays parseable
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("For more options, run:");
        eprintln!("  {APP_BINARY_NAME} --help");
        std::process::exit(e.exit_code());
    }
}
