//! REVAT entry point: CLI parsing, logging setup, and terminal lifecycle.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use revat::{AnnotationSession, AppConfig, RevatApp, load_dataset};

/// Filename the logger writes to while the TUI owns the terminal.
const LOG_FILE: &str = "revat.log";

/// Label text reviews in a CSV file with sentiment and aspect categories.
#[derive(Debug, Parser)]
#[command(name = "revat", version, about)]
struct Cli {
    /// Input CSV file with a header row
    input: PathBuf,

    /// Name of the review-text column (default from config, then "ulasan")
    #[arg(long)]
    column: Option<String>,

    /// Output path for the annotated CSV
    #[arg(long)]
    output: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Route logs to a file so they do not corrupt the TUI; RUST_LOG still
/// overrides the configured level.
fn init_logging(level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    if let Ok(file) = std::fs::File::create(LOG_FILE) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    let _ = builder.try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("revat: failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.log_level.to_level_filter());

    let column = cli.column.unwrap_or(config.review_column);
    let output = cli.output.unwrap_or(config.output_path);

    // Schema and input errors are fatal before any session state exists
    let dataset = match load_dataset(&cli.input, &column) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("revat: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = RevatApp::new(AnnotationSession::new(dataset), output);
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    if let Err(e) = result {
        eprintln!("revat: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
