//! Error types for dataset import/export.

use thiserror::Error;

/// Errors that can occur while loading or exporting a review dataset.
///
/// All of these are terminal for the session: the user must resupply a valid
/// file to proceed. Once a dataset has loaded validly, no annotation
/// operation can fail.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required column is missing from the header row
    #[error("Missing required column '{column}' in the input file")]
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// The input file has a header but no data rows
    #[error("Input file contains no data rows")]
    EmptyDataset,

    /// Invalid format structure or content
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of the format error
        message: String,
    },
}

impl FormatError {
    /// Create a missing column error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create an invalid format error with a message.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}
