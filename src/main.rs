//! Photoshoot API integration harness
//!
//! Runs the fixed photoshoot test sequence and prints one outcome per step.
//! The exit status only reflects start-up errors, never step results.

use std::path::Path;

use clap::Parser;
use photoshoot_harness::commands::{Cli, Commands, RunArgs};
use photoshoot_harness::common::config::Config;
use photoshoot_harness::common::{logging, paths, Result};
use photoshoot_harness::{HttpApiClient, PhotoId, TestRunner};

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    let result = match cli.into_command() {
        Commands::Run(args) => run(args).await,
        Commands::Config { config } => show_config(config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run(args: RunArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?.with_overrides(args.base_url, args.photo_id);

    let client = HttpApiClient::new(&config.target.base_url)?;
    tracing::info!(base_url = %client.base_url(), "targeting photoshoot API");

    let runner = TestRunner::new(client, PhotoId::new(config.fixtures.photo_id));
    runner.run().await;
    Ok(())
}

fn show_config(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;

    let source = match path {
        Some(path) => path.display().to_string(),
        None => match paths::config_path() {
            Some(default) if default.exists() => default.display().to_string(),
            Some(default) => format!("{} (not present, using defaults)", default.display()),
            None => "(no config directory, using defaults)".to_string(),
        },
    };

    println!("Config file: {source}");
    println!("[target]");
    println!("base_url = {:?}", config.target.base_url);
    println!("[fixtures]");
    println!("photo_id = {:?}", config.fixtures.photo_id);
    Ok(())
}
