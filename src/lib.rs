//! REVAT - Review Annotation Tool
//!
//! A terminal application for labeling rows of a CSV review dataset with
//! sentiment and aspect categories, and re-exporting the augmented table.

mod app;
mod config;
mod format;
mod keybindings;
mod message;
mod model;
mod session;
mod ui;

pub use app::RevatApp;
pub use config::{AppConfig, ConfigError, LogLevel};
pub use format::{
    DEFAULT_EXPORT_FILENAME, FormatError, annotated_csv_bytes, load_dataset, read_dataset,
    write_annotated_csv,
};
pub use keybindings::KeyBindings;
pub use message::Message;
pub use model::{Aspect, Dataset, RowProgress, Sentiment};
pub use session::{Advance, AnnotatedTable, AnnotationSession};
