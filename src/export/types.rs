//! Export types.

use clap::ValueEnum;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// XLSX workbook with a "History" sheet
    Xlsx,
    /// CSV format (same flattened layout as plain text)
    Csv,
    /// JSONL format (nested, preserves all data for programmatic access)
    Jsonl,
}

impl ExportFormat {
    /// Conventional file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "jsonl",
        }
    }
}
