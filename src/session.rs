//! The annotation session: cursor, per-row label arrays, advance logic, and
//! export assembly.
//!
//! This is the behavioral core of REVAT. It owns the loaded [`Dataset`] and
//! the in-memory label state for one interactive session, and exposes the
//! operations the frontend drives: set a label on the current row, navigate,
//! and assemble the annotated table for export. It performs no I/O and holds
//! no terminal state, so it is fully testable on its own.
//!
//! Loading a new file always builds a fresh session; label arrays from a
//! previous dataset never survive a reload.

use crate::model::{Aspect, Dataset, RowProgress, Sentiment};

/// Column name appended for sentiment labels on export.
pub const SENTIMENT_COLUMN: &str = "sentiment";

/// Column name appended for aspect labels on export.
pub const ASPECT_COLUMN: &str = "aspect";

/// Result of a label write, telling the caller whether the cursor moved.
///
/// The session never redraws anything itself; the presentation layer reads
/// this value and decides when to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current row is still incomplete; the cursor stayed put.
    Held,
    /// Both labels are now set; the cursor moved to the next row.
    Advanced {
        /// True when the cursor wrapped from the last row back to row 0.
        wrapped: bool,
    },
}

impl Advance {
    /// Check whether the cursor moved.
    pub fn moved(&self) -> bool {
        matches!(self, Advance::Advanced { .. })
    }
}

/// Annotated table assembled by [`AnnotationSession::export`].
///
/// Original columns are preserved in order, with the review-text column
/// replaced by the session's text copy and `sentiment` / `aspect` columns
/// populated from the label arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedTable {
    /// Header row of the output table.
    pub headers: Vec<String>,
    /// Data rows, one per dataset row, in dataset order.
    pub rows: Vec<Vec<String>>,
}

/// In-memory annotation state for one loaded dataset.
///
/// Invariant: the three per-row arrays always have exactly one entry per
/// dataset row, and the cursor stays in `[0, row_count)`. Empty strings mark
/// unlabeled rows; partial annotation is allowed and exports as-is.
#[derive(Debug, Clone)]
pub struct AnnotationSession {
    dataset: Dataset,
    cursor: usize,
    sentiment_labels: Vec<String>,
    aspect_labels: Vec<String>,
    // Per-row copy of the review text. Exported in place of the original
    // column but never mutated by any operation; kept so the output shape
    // matches the tool this replaces.
    edited_text: Vec<String>,
}

impl AnnotationSession {
    /// Create a fresh session over a loaded dataset.
    ///
    /// The cursor starts at row 0 and both label arrays start empty.
    pub fn new(dataset: Dataset) -> Self {
        let n = dataset.row_count();
        let edited_text = (0..n).map(|i| dataset.text(i).to_string()).collect();
        log::info!("Starting annotation session over {} rows", n);
        Self {
            dataset,
            cursor: 0,
            sentiment_labels: vec![String::new(); n],
            aspect_labels: vec![String::new(); n],
            edited_text,
        }
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Index of the row currently presented for annotation.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of rows in the session.
    pub fn row_count(&self) -> usize {
        self.dataset.row_count()
    }

    /// Review text of the current row.
    pub fn current_text(&self) -> &str {
        &self.edited_text[self.cursor]
    }

    /// Sentiment label of a row; empty string when unlabeled.
    pub fn sentiment(&self, index: usize) -> &str {
        &self.sentiment_labels[index]
    }

    /// Aspect label of a row; empty string when unlabeled.
    pub fn aspect(&self, index: usize) -> &str {
        &self.aspect_labels[index]
    }

    /// Sentiment label of the current row.
    pub fn current_sentiment(&self) -> &str {
        &self.sentiment_labels[self.cursor]
    }

    /// Aspect label of the current row.
    pub fn current_aspect(&self) -> &str {
        &self.aspect_labels[self.cursor]
    }

    /// Annotation progress of a row.
    pub fn row_progress(&self, index: usize) -> RowProgress {
        match (
            self.sentiment_labels[index].is_empty(),
            self.aspect_labels[index].is_empty(),
        ) {
            (true, true) => RowProgress::Unlabeled,
            (false, false) => RowProgress::FullyLabeled,
            _ => RowProgress::PartiallyLabeled,
        }
    }

    /// Assign an aspect label to the current row, then run the advance check.
    pub fn set_aspect(&mut self, label: Aspect) -> Advance {
        self.aspect_labels[self.cursor] = label.name().to_string();
        log::debug!("Row {}: aspect = {}", self.cursor, label.name());
        self.advance_if_complete()
    }

    /// Assign a sentiment label to the current row, then run the advance check.
    pub fn set_sentiment(&mut self, label: Sentiment) -> Advance {
        self.sentiment_labels[self.cursor] = label.name().to_string();
        log::debug!("Row {}: sentiment = {}", self.cursor, label.name());
        self.advance_if_complete()
    }

    /// Move the cursor forward when the current row carries both labels.
    ///
    /// Wraps to row 0 after the last row; the wrap is silent and the session
    /// never enters a terminal "all annotated" state.
    fn advance_if_complete(&mut self) -> Advance {
        if self.row_progress(self.cursor) != RowProgress::FullyLabeled {
            return Advance::Held;
        }
        let wrapped = self.cursor + 1 == self.row_count();
        self.cursor = (self.cursor + 1) % self.row_count();
        if wrapped {
            log::debug!("Cursor wrapped to row 0");
        }
        Advance::Advanced { wrapped }
    }

    /// Move to the next row without labeling, wrapping around.
    pub fn next_row(&mut self) {
        if self.row_count() > 0 {
            self.cursor = (self.cursor + 1) % self.row_count();
        }
    }

    /// Move to the previous row without labeling, wrapping around.
    pub fn prev_row(&mut self) {
        if self.row_count() > 0 {
            self.cursor = if self.cursor == 0 {
                self.row_count() - 1
            } else {
                self.cursor - 1
            };
        }
    }

    /// Get progress string like "3/15".
    pub fn progress(&self) -> String {
        format!("{}/{}", self.cursor + 1, self.row_count())
    }

    /// Number of rows from the cursor to the end of the dataset.
    pub fn remaining(&self) -> usize {
        self.row_count() - self.cursor
    }

    /// Assemble the annotated output table.
    ///
    /// Deterministic for a given session state: row order matches the input
    /// dataset, unlabeled rows export empty strings, and no session state is
    /// mutated. If the input already carries a `sentiment` or `aspect`
    /// column, that column is overwritten in place instead of duplicated.
    pub fn export(&self) -> AnnotatedTable {
        let mut headers = self.dataset.headers().to_vec();
        let sentiment_col = column_slot(&mut headers, SENTIMENT_COLUMN);
        let aspect_col = column_slot(&mut headers, ASPECT_COLUMN);

        let rows = (0..self.row_count())
            .map(|i| {
                let mut cells = self.dataset.row(i).to_vec();
                cells.resize(headers.len(), String::new());
                cells[self.dataset.text_column()] = self.edited_text[i].clone();
                cells[sentiment_col] = self.sentiment_labels[i].clone();
                cells[aspect_col] = self.aspect_labels[i].clone();
                cells
            })
            .collect();

        AnnotatedTable { headers, rows }
    }
}

/// Find the index of `name` in the header row, appending it when absent.
fn column_slot(headers: &mut Vec<String>, name: &str) -> usize {
    match headers.iter().position(|h| h == name) {
        Some(idx) => idx,
        None => {
            headers.push(name.to_string());
            headers.len() - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(texts: &[&str]) -> Dataset {
        let rows = texts
            .iter()
            .enumerate()
            .map(|(i, t)| vec![i.to_string(), t.to_string()])
            .collect();
        Dataset::new(vec!["id".into(), "ulasan".into()], rows, 1)
    }

    fn session(texts: &[&str]) -> AnnotationSession {
        AnnotationSession::new(dataset(texts))
    }

    #[test]
    fn test_initialization_invariant() {
        let s = session(&["a", "b", "c"]);
        assert_eq!(s.cursor(), 0);
        for i in 0..3 {
            assert_eq!(s.sentiment(i), "");
            assert_eq!(s.aspect(i), "");
            assert_eq!(s.row_progress(i), RowProgress::Unlabeled);
        }
    }

    #[test]
    fn test_single_label_does_not_advance() {
        let mut s = session(&["a", "b"]);
        assert_eq!(s.set_aspect(Aspect::Price), Advance::Held);
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.row_progress(0), RowProgress::PartiallyLabeled);

        let mut s = session(&["a", "b"]);
        assert_eq!(s.set_sentiment(Sentiment::Positive), Advance::Held);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_dual_label_advances_either_order() {
        let mut s = session(&["a", "b"]);
        s.set_aspect(Aspect::Scenery);
        let adv = s.set_sentiment(Sentiment::Positive);
        assert_eq!(adv, Advance::Advanced { wrapped: false });
        assert_eq!(s.cursor(), 1);

        let mut s = session(&["a", "b"]);
        s.set_sentiment(Sentiment::Negative);
        assert!(s.set_aspect(Aspect::Access).moved());
        assert_eq!(s.cursor(), 1);
    }

    #[test]
    fn test_wrap_around_on_last_row() {
        let mut s = session(&["a", "b"]);
        s.next_row();
        assert_eq!(s.cursor(), 1);
        s.set_aspect(Aspect::Price);
        let adv = s.set_sentiment(Sentiment::Negative);
        assert_eq!(adv, Advance::Advanced { wrapped: true });
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_wrapped_row_keeps_existing_labels() {
        let mut s = session(&["only"]);
        s.set_aspect(Aspect::Cleanliness);
        let adv = s.set_sentiment(Sentiment::Negative);
        assert_eq!(adv, Advance::Advanced { wrapped: true });
        assert_eq!(s.cursor(), 0);
        // Re-presented row still carries its labels
        assert_eq!(s.current_aspect(), "Cleanliness");
        assert_eq!(s.current_sentiment(), "Negative");
    }

    #[test]
    fn test_labels_overwrite_and_advance_again() {
        let mut s = session(&["a", "b"]);
        s.set_aspect(Aspect::Price);
        s.set_sentiment(Sentiment::Positive);
        assert_eq!(s.cursor(), 1);

        // Go back and overwrite; the row is already complete, so a single
        // write re-triggers the advance.
        s.prev_row();
        let adv = s.set_aspect(Aspect::Access);
        assert!(adv.moved());
        assert_eq!(s.aspect(0), "Access");
        assert_eq!(s.sentiment(0), "Positive");
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut s = session(&["a", "b", "c"]);
        s.prev_row();
        assert_eq!(s.cursor(), 2);
        s.next_row();
        assert_eq!(s.cursor(), 0);
        // Navigation never touches labels
        assert_eq!(s.row_progress(0), RowProgress::Unlabeled);
    }

    #[test]
    fn test_progress_and_remaining() {
        let mut s = session(&["a", "b", "c"]);
        assert_eq!(s.progress(), "1/3");
        assert_eq!(s.remaining(), 3);
        s.next_row();
        assert_eq!(s.progress(), "2/3");
        assert_eq!(s.remaining(), 2);
    }

    #[test]
    fn test_export_fidelity() {
        let mut s = session(&["great view", "dirty floor"]);
        s.set_aspect(Aspect::Scenery);
        s.set_sentiment(Sentiment::Positive);

        let table = s.export();
        assert_eq!(
            table.headers,
            vec!["id", "ulasan", "sentiment", "aspect"]
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[0],
            vec!["0", "great view", "Positive", "Scenery"]
        );
        assert_eq!(table.rows[1], vec!["1", "dirty floor", "", ""]);
    }

    #[test]
    fn test_export_overwrites_existing_label_columns() {
        let ds = Dataset::new(
            vec!["ulasan".into(), "sentiment".into(), "aspect".into()],
            vec![vec!["ok".into(), "stale".into(), "stale".into()]],
            0,
        );
        let mut s = AnnotationSession::new(ds);
        s.set_sentiment(Sentiment::Positive);

        let table = s.export();
        assert_eq!(table.headers, vec!["ulasan", "sentiment", "aspect"]);
        assert_eq!(table.rows[0], vec!["ok", "Positive", ""]);
    }

    #[test]
    fn test_export_does_not_mutate_state() {
        let mut s = session(&["a", "b"]);
        s.set_aspect(Aspect::Price);
        let before = s.clone();
        let first = s.export();
        let second = s.export();
        assert_eq!(first, second);
        assert_eq!(s.cursor(), before.cursor());
        assert_eq!(s.aspect(0), before.aspect(0));
    }

    #[test]
    fn test_three_row_scenario() {
        let mut s = session(&["great view", "dirty floor", "cheap price"]);

        s.set_aspect(Aspect::Scenery);
        s.set_sentiment(Sentiment::Positive);
        assert_eq!(s.cursor(), 1);

        s.set_sentiment(Sentiment::Negative);
        assert_eq!(s.cursor(), 1);

        s.set_aspect(Aspect::Cleanliness);
        assert_eq!(s.cursor(), 2);

        let table = s.export();
        let sentiments: Vec<&str> = table.rows.iter().map(|r| r[2].as_str()).collect();
        let aspects: Vec<&str> = table.rows.iter().map(|r| r[3].as_str()).collect();
        assert_eq!(sentiments, vec!["Positive", "Negative", ""]);
        assert_eq!(aspects, vec!["Scenery", "Cleanliness", ""]);
    }
}
