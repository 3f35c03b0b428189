//! Subcommand handlers.
//!
//! Handlers fetch from the service, derive the view and write it to `out`.
//! Service errors are turned into their user message here; the log keeps the
//! detailed cause.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{error, info};

use crate::config::Config;
use crate::display::history_rows;
use crate::error_handling::ServiceError;
use crate::export::{self, ExportFormat, IgnoreBrokenPipe};
use crate::record::AnalysisRecord;
use crate::service::{AnalysisClient, HistoryQuery};
use crate::statistics::aggregate;

use super::render::{render_analysis, render_history, render_summary};

/// `analyze <url>`: one request, then the verdict view (or raw JSON).
pub async fn analyze<W: Write>(
    client: &AnalysisClient,
    url: &str,
    json: bool,
    mut out: W,
) -> Result<()> {
    let record = client.analyze(url).await.map_err(user_facing)?;
    if json {
        serde_json::to_writer_pretty(&mut out, &record).context("Failed to encode record")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_analysis(&record))?;
    }
    Ok(())
}

/// `history`: one page of the history as a table.
pub async fn history<W: Write>(
    client: &AnalysisClient,
    config: &Config,
    query: HistoryQuery,
    mut out: W,
) -> Result<()> {
    let records = fetch_history(client, query).await?;
    let rows = history_rows(&records, config.utc_offset_minutes);
    write!(out, "{}", render_history(&rows))?;
    Ok(())
}

/// `summary`: aggregate statistics over one history snapshot.
pub async fn summary<W: Write>(
    client: &AnalysisClient,
    limit: u32,
    json: bool,
    mut out: W,
) -> Result<()> {
    let records = fetch_history(client, HistoryQuery { skip: 0, limit }).await?;
    let summary = aggregate(&records);
    if json {
        serde_json::to_writer_pretty(&mut out, &summary).context("Failed to encode summary")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_summary(&summary))?;
    }
    Ok(())
}

/// `export`: writes the history to `output`, or stdout when `None`.
pub async fn export(
    client: &AnalysisClient,
    format: ExportFormat,
    output: Option<&Path>,
    limit: u32,
) -> Result<usize> {
    let records = fetch_history(client, HistoryQuery { skip: 0, limit }).await?;
    write_export(&records, format, output)
}

/// Writes an already-fetched history to a file or stdout.
pub fn write_export(
    records: &[AnalysisRecord],
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<usize> {
    let written = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let n = export::write(records, format, BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Exported {n} record(s) to {}", path.display());
            n
        }
        None => {
            let stdout = io::stdout();
            export::write(records, format, IgnoreBrokenPipe::new(stdout.lock()))
                .context("Failed to write export to stdout")?
        }
    };
    Ok(written)
}

async fn fetch_history(client: &AnalysisClient, query: HistoryQuery) -> Result<Vec<AnalysisRecord>> {
    client.list_history(query).await.map_err(user_facing)
}

fn user_facing(err: ServiceError) -> anyhow::Error {
    error!("{err:#}");
    anyhow::anyhow!(err.user_message())
}
