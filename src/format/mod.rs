//! CSV import/export boundary.
//!
//! This module owns the two file-facing operations of the tool: loading a
//! review dataset from a CSV file (with schema validation) and writing the
//! annotated table back out. Everything in between is in-memory and lives in
//! [`crate::session`].

mod error;
mod export;
mod import;

pub use error::FormatError;
pub use export::{DEFAULT_EXPORT_FILENAME, annotated_csv_bytes, write_annotated_csv};
pub use import::{load_dataset, read_dataset};
