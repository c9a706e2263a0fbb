//! # Chat Input Boundary
//!
//! File: cli/src/chat/input.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything that decides whether typed text becomes a submission:
//! - Blank or whitespace-only text is rejected here, before the selector is
//!   ever consulted, so it never produces a transcript entry.
//! - Enter submits; Enter with a modifier held inserts a newline instead, which
//!   is how multi-line messages are composed.
//!
//! In the terminal REPL there is no modifier state, so a line ending in a
//! backslash stands in for a modifier-held Enter (see `Composer`).
//!
use crate::core::error::FolioError;

/// Marker that continues the current message onto the next line.
pub const LINE_CONTINUATION: char = '\\';

/// Returns the text unchanged if it has at least one non-whitespace character.
pub fn validate_submission(text: &str) -> Result<&str, FolioError> {
    if text.trim().is_empty() {
        return Err(FolioError::EmptyInput);
    }
    Ok(text)
}

/// The keys the submission logic cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// A key press together with the modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

/// What a key press does to the message being composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    InsertNewline,
    Ignore,
}

impl KeyPress {
    pub fn enter() -> Self {
        Self {
            key: Key::Enter,
            shift: false,
        }
    }

    pub fn shift_enter() -> Self {
        Self {
            key: Key::Enter,
            shift: true,
        }
    }

    pub fn action(self) -> KeyAction {
        match (self.key, self.shift) {
            (Key::Enter, false) => KeyAction::Submit,
            (Key::Enter, true) => KeyAction::InsertNewline,
            (Key::Other, _) => KeyAction::Ignore,
        }
    }
}

/// Assembles terminal lines into a message.
///
/// Each raw line arrives as if Enter was pressed; a trailing backslash turns
/// that Enter into a modifier-held one.
#[derive(Debug, Default)]
pub struct Composer {
    buffer: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line (without its newline). Returns the finished message
    /// once a line is submitted.
    pub fn feed_line(&mut self, line: &str) -> Option<String> {
        let (text, press) = match line.strip_suffix(LINE_CONTINUATION) {
            Some(head) => (head, KeyPress::shift_enter()),
            None => (line, KeyPress::enter()),
        };
        self.buffer.push_str(text);
        match press.action() {
            KeyAction::Submit => Some(std::mem::take(&mut self.buffer)),
            KeyAction::InsertNewline => {
                self.buffer.push('\n');
                None
            }
            KeyAction::Ignore => None,
        }
    }

    /// True while a multi-line message is partially composed.
    pub fn is_composing(&self) -> bool {
        !self.buffer.is_empty()
    }
}
