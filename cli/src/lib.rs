//! # Folio Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The library half of the `folio` crate. The binary (`main.rs`) and the
//! integration tests under `cli/tests/` both go through these modules.
//!
//! - `chat`: the scripted portfolio assistant (rules, selector, session)
//! - `profile`: static portfolio content and the project gallery filter
//! - `commands`: the CLI command handlers wired up by `main.rs`
//! - `core`: configuration and error handling
//!

pub mod chat;
pub mod commands;
pub mod core;
pub mod profile;
