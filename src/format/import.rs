//! CSV dataset loading with schema validation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::format::error::FormatError;
use crate::model::Dataset;

/// Load a review dataset from a CSV file.
///
/// The file must be UTF-8 with a header row containing `text_column`.
/// Fails before any session state exists when the file is unreadable, the
/// column is absent, or the table has no data rows.
pub fn load_dataset(path: &Path, text_column: &str) -> Result<Dataset, FormatError> {
    log::info!("Loading dataset from {:?}", path);
    let file = File::open(path)?;
    let dataset = read_dataset(file, text_column)?;
    log::info!(
        "Loaded {} rows, {} columns (text column '{}')",
        dataset.row_count(),
        dataset.headers().len(),
        dataset.text_column_name()
    );
    Ok(dataset)
}

/// Read a review dataset from any CSV source.
pub fn read_dataset<R: Read>(reader: R, text_column: &str) -> Result<Dataset, FormatError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let Some(column) = headers.iter().position(|h| h == text_column) else {
        return Err(FormatError::missing_column(text_column));
    };

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    if rows.is_empty() {
        return Err(FormatError::EmptyDataset);
    }

    Ok(Dataset::new(headers, rows, column))
}
