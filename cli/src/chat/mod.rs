//! # Folio Chat Assistant
//!
//! File: cli/src/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The scripted FAQ assistant. It answers free-text questions about the
//! portfolio owner by picking one of a fixed set of replies with ordered,
//! case-insensitive keyword matching.
//!
//! ## Architecture
//!
//! - `topic`: the closed set of intents (`Topic`).
//! - `rules`: ordered keyword rules; the first match wins and a catch-all rule is mandatory.
//! - `responses`: the reply text for every topic.
//! - `selector`: `ResponseSelector`, the pure utterance → reply function.
//! - `message`: messages and the append-only transcript.
//! - `input`: blank-input rejection and Enter / modifier-Enter handling.
//! - `session`: `ChatSession`, the `Idle` / `AwaitingReply` state machine.
//! - `typing`: the cosmetic delay before a reply is shown.
//!
//! ## Examples
//!
//! ```rust
//! use folio::chat::selector::select_response;
//!
//! let reply = select_response("Hi there").unwrap();
//! assert!(reply.starts_with("Hello!"));
//! ```
//!

pub mod input;
pub mod message;
pub mod responses;
pub mod rules;
pub mod selector;
pub mod session;
pub mod topic;
pub mod typing;
