//! # Messages and Transcript
//!
//! File: cli/src/chat/message.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A `Message` is one turn of the conversation. The `Transcript` only ever
//! grows: there is no way to edit or remove a message once appended. It lives
//! in memory for the duration of a chat session and is never persisted.
//!
use chrono::{DateTime, Utc};
use std::fmt;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Author::User => f.write_str("You"),
            Author::Assistant => f.write_str("Assistant"),
        }
    }
}

/// One immutable turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: usize,
    author: Author,
    text: String,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// 1-based position in the transcript.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Append-only, ordered record of a conversation.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message stamped with the current time and returns it.
    pub fn append(&mut self, author: Author, text: impl Into<String>) -> &Message {
        let message = Message {
            id: self.messages.len() + 1,
            author,
            text: text.into(),
            timestamp: Utc::now(),
        };
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
