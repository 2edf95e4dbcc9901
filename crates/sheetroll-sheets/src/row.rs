//! Row types

/// One row of a fetched sheet: its text fields in column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    fields: Vec<String>,
}

impl SheetRow {
    /// Create a row from its fields
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at a 0-based column index
    pub fn field(&self, col: usize) -> Option<&str> {
        self.fields.get(col).map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SheetRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl From<csv::StringRecord> for SheetRow {
    fn from(record: csv::StringRecord) -> Self {
        record.iter().collect()
    }
}
