//! Export functionality for analysis history.
//!
//! This module turns a fetched history into a downloadable artifact:
//! - XLSX: workbook with a "History" sheet, one column per field
//! - CSV: the same flat layout as text
//! - JSONL: one nested JSON object per record

mod csv;
mod jsonl;
mod output;
mod row;
mod types;
mod xlsx;

use std::io::Write;

pub use self::csv::{export_csv, write_csv};
pub use jsonl::{export_jsonl, write_jsonl};
pub use output::IgnoreBrokenPipe;
pub use row::{Cell, ExportLayout};
pub use types::ExportFormat;
pub use xlsx::{export_tabular, write_xlsx, SHEET_NAME};

use crate::error_handling::ExportError;
use crate::record::AnalysisRecord;

/// Serializes `records` in `format` and returns the bytes.
pub fn export(records: &[AnalysisRecord], format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Xlsx => export_tabular(records),
        ExportFormat::Csv => export_csv(records),
        ExportFormat::Jsonl => export_jsonl(records),
    }
}

/// Streams `records` in `format` into `out`. Returns the number of records written.
pub fn write<W: Write>(
    records: &[AnalysisRecord],
    format: ExportFormat,
    out: W,
) -> Result<usize, ExportError> {
    match format {
        ExportFormat::Xlsx => write_xlsx(records, out),
        ExportFormat::Csv => write_csv(records, out),
        ExportFormat::Jsonl => write_jsonl(records, out),
    }
}
