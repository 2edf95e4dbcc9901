//! Fetch options

use std::time::Duration;

use crate::sheet_id::SheetId;

/// CSV export URL for Google Sheets; `{id}` is replaced by the sheet identifier
pub const DEFAULT_CSV_URL_TEMPLATE: &str =
    "https://docs.google.com/spreadsheets/d/{id}/gviz/tq?tqx=out:csv";

/// Options for retrieving sheets
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// URL template with an `{id}` placeholder
    pub url_template: String,
    /// Upper bound for a single retrieval (default: 10 seconds)
    pub timeout: Duration,
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
}

impl FetchOptions {
    /// Export URL for a sheet
    pub fn csv_url(&self, id: &SheetId) -> String {
        self.url_template.replace("{id}", id.as_str())
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_CSV_URL_TEMPLATE.to_string(),
            timeout: Duration::from_secs(10),
            delimiter: b',',
            quote: b'"',
        }
    }
}
