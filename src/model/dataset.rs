//! Loaded review dataset.
//!
//! A dataset is a header row plus an ordered list of records. All columns are
//! carried through opaquely; one column is designated as the review text.

/// An immutable tabular dataset with one designated review-text column.
///
/// Row and column counts are fixed after load. Construction goes through
/// [`crate::format::read_dataset`], which validates that the text column
/// exists and that the table is non-empty.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    text_column: usize,
}

impl Dataset {
    /// Create a dataset from parsed records.
    ///
    /// `text_column` must be a valid index into `headers`; the format layer
    /// resolves the configured column name before calling this.
    pub(crate) fn new(headers: Vec<String>, rows: Vec<Vec<String>>, text_column: usize) -> Self {
        debug_assert!(text_column < headers.len());
        Self {
            headers,
            rows,
            text_column,
        }
    }

    /// Number of data rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column names from the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Index of the review-text column.
    pub fn text_column(&self) -> usize {
        self.text_column
    }

    /// Name of the review-text column.
    pub fn text_column_name(&self) -> &str {
        &self.headers[self.text_column]
    }

    /// All cells of a row, in column order.
    pub fn row(&self, index: usize) -> &[String] {
        &self.rows[index]
    }

    /// Review text of a row. Short records yield an empty string.
    pub fn text(&self, index: usize) -> &str {
        self.rows[index]
            .get(self.text_column)
            .map(String::as_str)
            .unwrap_or("")
    }
}
