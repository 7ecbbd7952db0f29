//! Delimited-text parsing and spreadsheet output.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::error::ConvertError;

/// Header row plus body rows, ready to materialize as a worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse delimited text into a table.
///
/// The first record is the header row; every body record must have the
/// same field count as the header, otherwise the row is reported as
/// malformed. Quoted fields are handled, matching [`crate::merge::write_delimited`].
pub fn parse_delimited(text: &str, delimiter: u8) -> Result<Table, ConvertError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ConvertError::MalformedRow {
            row: 0,
            message: e.to_string(),
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ConvertError::MalformedRow {
            row: i + 1,
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table { headers, rows })
}

/// Write the table as a single-sheet workbook: bold header row first,
/// body rows below, no index column.
pub fn write_spreadsheet(table: &Table, path: &Path) -> Result<(), ConvertError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, header, &header_format)
            .map_err(|e| spreadsheet_error(path, e))?;
    }

    for (row, values) in table.rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            worksheet
                .write_string((row + 1) as u32, col as u16, value)
                .map_err(|e| spreadsheet_error(path, e))?;
        }
    }

    workbook.save(path).map_err(|e| spreadsheet_error(path, e))
}

fn spreadsheet_error(path: &Path, e: XlsxError) -> ConvertError {
    ConvertError::SpreadsheetWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
