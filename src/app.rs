//! REVAT application: state, message handling, and the terminal event loop.
//!
//! Elm architecture style: key events become [`Message`]s, `update` applies
//! them to the [`AnnotationSession`], and the view in [`crate::ui`] redraws
//! from the resulting state. The session decides whether a label write moved
//! the cursor; the app only reacts to that outcome.

use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::format;
use crate::keybindings::KeyBindings;
use crate::message::Message;
use crate::session::{Advance, AnnotationSession};
use crate::ui;

/// Top-level application state for one annotation session.
pub struct RevatApp {
    session: AnnotationSession,
    keybindings: KeyBindings,
    output_path: PathBuf,
    status: Option<String>,
    should_quit: bool,
}

impl RevatApp {
    /// Create the application over a freshly created session.
    pub fn new(session: AnnotationSession, output_path: PathBuf) -> Self {
        Self {
            session,
            keybindings: KeyBindings::default(),
            output_path,
            status: None,
            should_quit: false,
        }
    }

    /// The annotation session being driven.
    pub fn session(&self) -> &AnnotationSession {
        &self.session
    }

    /// The configured keybindings.
    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    /// Path the annotated CSV is written to on export.
    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    /// Last status line message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Whether the event loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply a message to the application state.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::SetAspect(aspect) => {
                let advance = self.session.set_aspect(aspect);
                self.note_advance(advance);
            }
            Message::SetSentiment(sentiment) => {
                let advance = self.session.set_sentiment(sentiment);
                self.note_advance(advance);
            }
            Message::NextRow => {
                self.session.next_row();
                self.status = None;
            }
            Message::PrevRow => {
                self.session.prev_row();
                self.status = None;
            }
            Message::Export => self.export(),
            Message::Quit => self.should_quit = true,
        }
    }

    /// Record a wrap-around in the status line so the silent loop back to
    /// row 0 is at least visible to the user.
    fn note_advance(&mut self, advance: Advance) {
        self.status = match advance {
            Advance::Advanced { wrapped: true } => {
                Some("Reached the end; back to the first row".to_string())
            }
            _ => None,
        };
    }

    fn export(&mut self) {
        let table = self.session.export();
        match format::write_annotated_csv(&table, &self.output_path) {
            Ok(()) => {
                self.status = Some(format!(
                    "Saved {} rows to {}",
                    table.rows.len(),
                    self.output_path.display()
                ));
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    /// Run the blocking event loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(message) = self.keybindings.message_for(key) {
                        self.update(message);
                    }
                }
            }
        }
        Ok(())
    }
}
