//! Data models for the REVAT application.

mod dataset;
mod label;

pub use dataset::Dataset;
pub use label::{Aspect, RowProgress, Sentiment};
