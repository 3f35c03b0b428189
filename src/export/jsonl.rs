//! JSONL export functionality.
//!
//! One JSON object per line, nested exactly as the service sent it.

use std::io::Write;

use crate::error_handling::ExportError;
use crate::record::AnalysisRecord;

/// Serializes `records` as JSON Lines bytes.
pub fn export_jsonl(records: &[AnalysisRecord]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_jsonl(records, &mut buf)?;
    Ok(buf)
}

/// Streams `records` as JSON Lines into `out`. Returns the number of lines.
pub fn write_jsonl<W: Write>(records: &[AnalysisRecord], mut out: W) -> Result<usize, ExportError> {
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    log::debug!("Wrote {} JSONL record(s)", records.len());
    Ok(records.len())
}
