//! # Folio Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout Folio. Domain failures
//! that callers may want to match on (a rule list without a fallback, a blank
//! chat submission, an unknown gallery tab) are variants of `FolioError`;
//! everything else travels as an `anyhow::Error` with context attached.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `FolioError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover these domains:
//! - Configuration errors (rule lists, response tables, config files)
//! - Chat input and session errors
//! - Lookup errors for topics and project categories
//!
//! ## Examples
//!
//! ```rust
//! use folio::core::error::FolioError;
//!
//! let err = FolioError::UnknownTopic { name: "weather".into() };
//! assert_eq!(err.to_string(), "Unknown topic 'weather'.");
//! ```
//!
//! Matching on a specific failure coming back as `anyhow::Error`:
//!
//! ```rust,ignore
//! match session.submit(line) {
//!     Err(e) if matches!(e.downcast_ref::<FolioError>(), Some(FolioError::EmptyInput)) => {
//!         println!("Type something first.");
//!     }
//!     Err(e) => return Err(e),
//!     Ok(()) => {}
//! }
//! ```
//!
use crate::chat::topic::Topic;
use thiserror::Error;

/// Custom error type for the Folio application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration error: the rule list has no catch-all fallback rule.")]
    MissingFallback,

    #[error("Configuration error: no response text configured for topic '{topic}'.")]
    MissingResponse { topic: Topic },

    #[error("No rule matched the utterance; the rule list is misconfigured.")]
    NoRuleMatched,

    #[error("Input cannot be empty.")]
    EmptyInput,

    #[error("No reply is pending; submit a message first.")]
    NoPendingReply,

    #[error("Unknown topic '{name}'.")]
    UnknownTopic { name: String },

    #[error("Unknown project category '{name}'. Expected one of: all, web-app, website, mobile-app, ui-ux.")]
    UnknownCategory { name: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
