//! Spreadsheet identifiers

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Opaque identifier of a remote spreadsheet, as found in its share link
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetId(String);

impl SheetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn sheet_id_pattern() -> &'static Regex {
    static SHEET_ID_RE: OnceLock<Regex> = OnceLock::new();
    SHEET_ID_RE
        .get_or_init(|| Regex::new(r"/d/([A-Za-z0-9_-]+)").expect("sheet id regex must compile"))
}

/// Extract the spreadsheet identifier from a share link
///
/// The identifier is the first run of `[A-Za-z0-9_-]` following `/d/`. Nothing else
/// about the link is checked.
///
/// # Example
/// ```rust
/// use sheetroll_sheets::extract_sheet_id;
///
/// let id = extract_sheet_id("https://docs.google.com/spreadsheets/d/ABC123-xyz/edit").unwrap();
/// assert_eq!(id.as_str(), "ABC123-xyz");
///
/// assert!(extract_sheet_id("https://example.com/sheet").is_none());
/// ```
pub fn extract_sheet_id(url: &str) -> Option<SheetId> {
    sheet_id_pattern()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| SheetId(m.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_edit_link() {
        let id = extract_sheet_id("https://docs.google.com/spreadsheets/d/ABC123-xyz/edit").unwrap();
        assert_eq!(id.as_str(), "ABC123-xyz");
    }

    #[test]
    fn test_extract_stops_at_disallowed_character() {
        let id = extract_sheet_id(
            "https://docs.google.com/spreadsheets/d/1a_B-2c?usp=sharing#gid=0",
        )
        .unwrap();
        assert_eq!(id.to_string(), "1a_B-2c");
    }

    #[test]
    fn test_first_match_wins() {
        let id = extract_sheet_id("https://host/d/first/d/second").unwrap();
        assert_eq!(id.as_str(), "first");
    }

    #[test]
    fn test_no_match() {
        assert!(extract_sheet_id("https://example.com/spreadsheets/ABC").is_none());
        assert!(extract_sheet_id("https://docs.google.com/spreadsheets/d/").is_none());
        assert!(extract_sheet_id("").is_none());
    }
}
