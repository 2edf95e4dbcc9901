//! CSV reader

use std::io::Read;

use crate::error::SheetsResult;
use crate::options::FetchOptions;
use crate::row::SheetRow;

/// Reads a CSV export into rows
///
/// Every record becomes a row (there is no header row) and rows may have differing
/// numbers of fields.
pub struct CsvRowReader;

impl CsvRowReader {
    /// Read CSV from a reader into rows
    pub fn read<R: Read>(reader: R, options: &FetchOptions) -> SheetsResult<Vec<SheetRow>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            rows.push(SheetRow::from(result?));
        }

        Ok(rows)
    }

    /// Read CSV text into rows
    pub fn read_str(text: &str, options: &FetchOptions) -> SheetsResult<Vec<SheetRow>> {
        Self::read(text.as_bytes(), options)
    }
}
