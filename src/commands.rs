//! CLI command definitions
//!
//! Defines the clap commands for the harness CLI. Running with no
//! subcommand is the same as `run`, and accepts the same flags.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photoshoot-harness", about = "Integration tests for the photoshoot API")]
#[command(version, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,
}

impl Cli {
    /// The command to execute, defaulting to `run` with the top-level flags
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Run(self.run))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the photoshoot integration sequence (default)
    Run(RunArgs),

    /// Show the configuration file location and effective settings
    Config {
        /// Read settings from this file instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default, PartialEq)]
pub struct RunArgs {
    /// Read settings from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the API under test (default: http://localhost:8080)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Identifier of an existing photo to attach to the created shoot
    #[arg(long)]
    pub photo_id: Option<String>,
}
