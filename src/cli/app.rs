//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use super::commands;
use structcheck::output::OutputMode;

/// structcheck - structural validation for the Wi-Fi console implementation
#[derive(Parser, Debug)]
#[command(
    name = "structcheck",
    version,
    about = "Static structural checks for the Wi-Fi console implementation",
    long_about = "Validate that the Wi-Fi console artifacts exist and contain the\n\
                  expected declarations, UI hooks, and backward-compatible entry\n\
                  points.\n\n\
                  Checks are textual pattern searches over raw file contents;\n\
                  nothing is compiled or executed. Exits 0 when every check\n\
                  passes, 1 otherwise."
)]
pub struct Cli {
    /// Base directory containing the project tree to inspect
    #[arg(value_name = "BASE_DIR", env = "STRUCTCHECK_DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::validate(&cli.base_dir, output_mode)
}
