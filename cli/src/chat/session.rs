//! # Chat Session
//!
//! File: cli/src/chat/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A conversation with the assistant: the transcript plus an explicit state.
//!
//! ```text
//!            submit(text)                   reply_ready() [queue empty]
//!   Idle ───────────────▶ AwaitingReply ────────────────────────────▶ Idle
//!                          │   ▲
//!                          └───┘ submit(text) / reply_ready() [queue not empty]
//! ```
//!
//! Submissions made while a reply is still pending are queued and answered in
//! order, so every user message gets exactly one reply.
//!
use crate::chat::input::validate_submission;
use crate::chat::message::{Author, Message, Transcript};
use crate::chat::selector::ResponseSelector;
use crate::core::error::FolioError;
use std::collections::VecDeque;
use tracing::debug;

/// Where the session is between a submission and its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingReply { pending: VecDeque<String> },
}

/// One conversation with the assistant.
#[derive(Debug, Clone)]
pub struct ChatSession<'a> {
    selector: &'a ResponseSelector,
    transcript: Transcript,
    state: ChatState,
}

impl<'a> ChatSession<'a> {
    /// Starts a session whose transcript opens with the assistant's welcome.
    pub fn new(selector: &'a ResponseSelector, welcome: &str) -> Self {
        let mut transcript = Transcript::new();
        transcript.append(Author::Assistant, welcome);
        Self {
            selector,
            transcript,
            state: ChatState::Idle,
        }
    }

    /// Records a user message and queues it for a reply.
    ///
    /// Blank text is rejected with `FolioError::EmptyInput` and leaves the
    /// session untouched.
    pub fn submit(&mut self, text: &str) -> Result<&Message, FolioError> {
        let text = validate_submission(text)?;
        if let ChatState::AwaitingReply { pending } = &mut self.state {
            pending.push_back(text.to_string());
        } else {
            self.state = ChatState::AwaitingReply {
                pending: VecDeque::from([text.to_string()]),
            };
        }
        debug!("Queued user message; {} awaiting reply", self.pending_count());
        Ok(self.transcript.append(Author::User, text))
    }

    /// Answers the oldest unanswered submission and appends the reply.
    ///
    /// If no reply can be selected the submission stays queued and the
    /// session keeps awaiting it.
    pub fn reply_ready(&mut self) -> Result<&Message, FolioError> {
        let ChatState::AwaitingReply { pending } = &mut self.state else {
            return Err(FolioError::NoPendingReply);
        };
        let utterance = pending.front().ok_or(FolioError::NoPendingReply)?;
        let reply = self.selector.select_response(utterance)?;
        pending.pop_front();
        if pending.is_empty() {
            self.state = ChatState::Idle;
        }
        Ok(self.transcript.append(Author::Assistant, reply))
    }

    /// True while the assistant owes at least one reply.
    pub fn is_typing(&self) -> bool {
        matches!(self.state, ChatState::AwaitingReply { .. })
    }

    pub fn pending_count(&self) -> usize {
        match &self.state {
            ChatState::Idle => 0,
            ChatState::AwaitingReply { pending } => pending.len(),
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
