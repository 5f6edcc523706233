//! Application message types for REVAT.
//!
//! All key events are translated into messages in the Elm architecture style.

use crate::model::{Aspect, Sentiment};

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Assign an aspect label to the current row
    SetAspect(Aspect),
    /// Assign a sentiment label to the current row
    SetSentiment(Sentiment),
    /// Move to the next row without labeling
    NextRow,
    /// Move to the previous row without labeling
    PrevRow,
    /// Write the annotated dataset to the output file
    Export,
    /// Exit the application
    Quit,
}
