//! Configuration file support for REVAT.
//!
//! An optional JSON file supplies session defaults (review column name,
//! output path, log level). Command-line flags take precedence over the
//! config file, which takes precedence over built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::DEFAULT_EXPORT_FILENAME;

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Default name of the review-text column.
pub const DEFAULT_REVIEW_COLUMN: &str = "ulasan";

/// Errors that can occur while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error reading the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Application configuration loaded from an optional JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Name of the review-text column in the input CSV
    #[serde(default = "default_review_column")]
    pub review_column: String,

    /// Path the annotated CSV is written to
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Logging verbosity (overridable via RUST_LOG)
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_review_column() -> String {
    DEFAULT_REVIEW_COLUMN.to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_FILENAME)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            review_column: default_review_column(),
            output_path: default_output_path(),
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        if config.version != CONFIG_VERSION {
            log::warn!(
                "Config version {} differs from current version {}",
                config.version,
                CONFIG_VERSION
            );
        }
        Ok(config)
    }

    /// Load configuration from an optional path, falling back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
