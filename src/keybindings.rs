//! Keybindings for REVAT.
//!
//! Maps terminal key events to application messages. Aspect options are
//! always bound to the digit keys in display order; the remaining bindings
//! live in [`KeyBindings`] so a settings layer can rebind them later.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::message::Message;
use crate::model::{Aspect, Sentiment};

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Hotkey for the Positive sentiment
    pub sentiment_positive: KeyCode,
    /// Hotkey for the Negative sentiment
    pub sentiment_negative: KeyCode,
    /// Hotkey to move to the next row
    pub next_row: KeyCode,
    /// Hotkey to move to the previous row
    pub prev_row: KeyCode,
    /// Hotkey to export the annotated dataset
    pub export: KeyCode,
    /// Hotkey to quit
    pub quit: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            sentiment_positive: KeyCode::Char('p'),
            sentiment_negative: KeyCode::Char('n'),
            next_row: KeyCode::Right,
            prev_row: KeyCode::Left,
            export: KeyCode::Char('s'),
            quit: KeyCode::Char('q'),
        }
    }
}

impl KeyBindings {
    /// Translate a key event into a message, if it is bound.
    pub fn message_for(&self, key: KeyEvent) -> Option<Message> {
        // Ctrl-C and Esc always quit, regardless of bindings
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Message::Quit);
        }
        if key.code == KeyCode::Esc {
            return Some(Message::Quit);
        }

        if let KeyCode::Char(c @ '1'..='9') = key.code {
            let index = (c as usize) - ('1' as usize);
            if let Some(aspect) = Aspect::all().get(index) {
                return Some(Message::SetAspect(*aspect));
            }
        }

        match key.code {
            c if c == self.sentiment_positive => Some(Message::SetSentiment(Sentiment::Positive)),
            c if c == self.sentiment_negative => Some(Message::SetSentiment(Sentiment::Negative)),
            c if c == self.next_row => Some(Message::NextRow),
            c if c == self.prev_row => Some(Message::PrevRow),
            c if c == self.export => Some(Message::Export),
            c if c == self.quit => Some(Message::Quit),
            _ => None,
        }
    }
}
