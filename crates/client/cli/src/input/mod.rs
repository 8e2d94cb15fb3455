//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use pet_core::Action;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Submit the decoded pet action to the runtime.
    Submit(Action),
    /// Show or hide the help overlay.
    ToggleHelp,
    /// Close an overlay, or quit from the normal view.
    Back,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into pet commands.
pub struct InputHandler;

impl InputHandler {
    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Esc => KeyAction::Back,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => KeyAction::Quit,
            'f' => KeyAction::Submit(Action::Feed),
            'p' => KeyAction::Submit(Action::Play),
            's' => KeyAction::Submit(Action::Sleep),
            'c' => KeyAction::Submit(Action::Code),
            'x' => KeyAction::Submit(Action::Clean),
            'h' | '?' => KeyAction::ToggleHelp,
            _ => KeyAction::None,
        }
    }
}
