//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phishing_report` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use phishing_report::app;
use phishing_report::config::{Cli, Config};
use phishing_report::initialization::init_logger_with;

#[tokio::main]
async fn main() -> Result<()> {
    // .env in the current directory, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = Config::from(&cli.global);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = app::run(config, cli.command).await {
        eprintln!("phishing_report error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
