//! CLI application layer.
//!
//! This module wires the parsed command line to the library: it builds the
//! service client, runs one subcommand and renders its output.

pub mod commands;
mod render;

use std::io;

use anyhow::{Context, Result};

use crate::config::{Command, Config};
use crate::service::{AnalysisClient, HistoryQuery};

pub use render::{render_analysis, render_history, render_summary};

/// Runs one subcommand against the configured service.
pub async fn run(config: Config, command: Command) -> Result<()> {
    let client = AnalysisClient::new(&config).context("Failed to initialize the service client")?;
    let stdout = io::stdout();

    match command {
        Command::Analyze { url, json } => {
            commands::analyze(&client, &url, json, stdout.lock()).await
        }
        Command::History { skip, limit } => {
            commands::history(&client, &config, HistoryQuery { skip, limit }, stdout.lock()).await
        }
        Command::Summary { limit, json } => {
            commands::summary(&client, limit, json, stdout.lock()).await
        }
        Command::Export {
            format,
            output,
            limit,
        } => commands::export(&client, format, output.as_deref(), limit)
            .await
            .map(|_| ()),
    }
}
