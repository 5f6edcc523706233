//! Annotated CSV serialization.

use std::path::Path;

use crate::format::error::FormatError;
use crate::session::AnnotatedTable;

/// Default filename for the exported annotated dataset.
pub const DEFAULT_EXPORT_FILENAME: &str = "annotated_pantai.csv";

/// Serialize an annotated table to CSV bytes (UTF-8, header row first).
///
/// Output is deterministic for a given table, so exporting twice without
/// intervening label changes yields byte-identical content.
pub fn annotated_csv_bytes(table: &AnnotatedTable) -> Result<Vec<u8>, FormatError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    wtr.into_inner()
        .map_err(|e| FormatError::invalid_format(e.to_string()))
}

/// Write an annotated table to a CSV file, replacing any existing file.
pub fn write_annotated_csv(table: &AnnotatedTable, path: &Path) -> Result<(), FormatError> {
    let bytes = annotated_csv_bytes(table)?;
    std::fs::write(path, &bytes)?;
    log::info!("Exported {} rows to {:?}", table.rows.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AnnotatedTable {
        AnnotatedTable {
            headers: vec![
                "id".into(),
                "ulasan".into(),
                "sentiment".into(),
                "aspect".into(),
            ],
            rows: vec![
                vec!["1".into(), "great view".into(), "Positive".into(), "Scenery".into()],
                vec!["2".into(), "dirty floor".into(), String::new(), String::new()],
            ],
        }
    }

    #[test]
    fn test_csv_bytes() {
        let bytes = annotated_csv_bytes(&table()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "id,ulasan,sentiment,aspect\n1,great view,Positive,Scenery\n2,dirty floor,,\n"
        );
    }

    #[test]
    fn test_idempotent_export() {
        let t = table();
        assert_eq!(
            annotated_csv_bytes(&t).unwrap(),
            annotated_csv_bytes(&t).unwrap()
        );
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILENAME);
        write_annotated_csv(&table(), &path).unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, annotated_csv_bytes(&table()).unwrap());
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let t = AnnotatedTable {
            headers: vec!["ulasan".into(), "sentiment".into(), "aspect".into()],
            rows: vec![vec!["cheap, clean".into(), "Positive".into(), "Price".into()]],
        };
        let text = String::from_utf8(annotated_csv_bytes(&t).unwrap()).unwrap();
        assert!(text.contains("\"cheap, clean\""));
    }
}
