//! CSV export functionality.
//!
//! One row per record, every field flattened to a single cell. Same layout as
//! the workbook export, for tools that want plain text.

use std::io::Write;

use csv::Writer;

use crate::error_handling::ExportError;
use crate::record::AnalysisRecord;

use super::row::ExportLayout;

/// Serializes `records` to CSV bytes (header plus one row per record).
///
/// An empty slice produces a header-only artifact.
pub fn export_csv(records: &[AnalysisRecord]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(buf)
}

/// Streams `records` as CSV into `out`. Returns the number of data rows.
pub fn write_csv<W: Write>(records: &[AnalysisRecord], out: W) -> Result<usize, ExportError> {
    let layout = ExportLayout::for_records(records);
    let mut writer = Writer::from_writer(out);

    writer.write_record(layout.header())?;
    for record in records {
        writer.write_record(layout.row(record))?;
    }
    writer.flush()?;

    log::debug!(
        "Wrote {} CSV row(s) with {} column(s)",
        records.len(),
        layout.width()
    );
    Ok(records.len())
}
