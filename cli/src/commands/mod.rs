//! # Folio Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates all top-level commands of the Folio CLI and makes
//! them accessible to the main application entry point (`main.rs`).
//!
//! ## Command Groups
//!
//! - `chat`: Interactive conversation with the portfolio assistant
//! - `ask`: One-shot question to the assistant
//! - `topics`: The assistant's ordered keyword rules
//! - `profile`: Static portfolio content (about, skills, projects, links)
//!
//! Each command defines its own arguments structure and handler function.
//!

/// One-shot question (`folio ask`).
pub mod ask;
/// Interactive REPL (`folio chat`).
pub mod chat;
/// Command group for the static portfolio content. Includes subcommands `about`, `skills`, `projects`, `links`.
pub mod profile;
/// Rule listing (`folio topics`).
pub mod topics;
