//! XLSX export functionality.
//!
//! The downloadable spreadsheet: one "History" sheet, a bold header row of
//! wire names, then one row per record. Flags are boolean cells, counts are
//! numbers, and absent values are left blank.

use std::io::Write;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error_handling::ExportError;
use crate::record::AnalysisRecord;

use super::row::{Cell, ExportLayout};

/// Name of the single worksheet in the workbook.
pub const SHEET_NAME: &str = "History";

/// Serializes `records` to an XLSX workbook.
///
/// An empty slice produces a workbook holding only the header row.
pub fn export_tabular(records: &[AnalysisRecord]) -> Result<Vec<u8>, ExportError> {
    let layout = ExportLayout::for_records(records);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, name) in layout.header().into_iter().enumerate() {
        sheet.write_string_with_format(0, column(col)?, name, &bold)?;
    }
    for (i, record) in records.iter().enumerate() {
        let row = u32::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, cell) in layout.cells(record).into_iter().enumerate() {
            write_cell(sheet, row, column(col)?, cell)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    log::debug!(
        "Built XLSX workbook with {} row(s) and {} column(s), {} bytes",
        records.len(),
        layout.width(),
        bytes.len()
    );
    Ok(bytes)
}

/// Streams the workbook for `records` into `out`. Returns the number of data rows.
pub fn write_xlsx<W: Write>(records: &[AnalysisRecord], mut out: W) -> Result<usize, ExportError> {
    let bytes = export_tabular(records)?;
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(records.len())
}

fn column(index: usize) -> Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: Cell) -> Result<(), XlsxError> {
    match cell {
        Cell::Empty => {}
        Cell::Text(s) => {
            sheet.write_string(row, col, s)?;
        }
        Cell::Bool(b) => {
            sheet.write_boolean(row, col, b)?;
        }
        Cell::Number(n) => {
            sheet.write_number(row, col, n)?;
        }
    }
    Ok(())
}
