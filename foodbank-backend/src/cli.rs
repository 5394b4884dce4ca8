use std::path::PathBuf;

use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "foodbank-backend", version, about = "Foodbank backend HTTP server")]
pub struct CliArgs {
    /// Path to configuration file (toml, yaml or json)
    #[arg(short = 'c', long = "config-path", env = "FOODBANK_CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}
