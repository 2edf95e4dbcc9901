//! # sheetroll-sheets
//!
//! Spreadsheet access for sheetroll.
//!
//! - [`extract_sheet_id`] pulls the spreadsheet identifier out of a share link
//! - [`CsvRowReader`] turns a CSV export into [`SheetRow`]s
//! - [`SheetFetcher`] retrieves a sheet's rows; [`HttpSheetFetcher`] does it over HTTP

mod error;
mod fetcher;
mod options;
mod reader;
mod row;
mod sheet_id;

pub use error::{SheetsError, SheetsResult};
pub use fetcher::{HttpSheetFetcher, SheetFetcher};
pub use options::{FetchOptions, DEFAULT_CSV_URL_TEMPLATE};
pub use reader::CsvRowReader;
pub use row::SheetRow;
pub use sheet_id::{extract_sheet_id, SheetId};
