//! # Folio Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `folio ask <words>...` puts a single question to the assistant and prints
//! the reply, without the typing delay or a transcript. With `--topic` it
//! prints the matched topic key instead, which is handy for checking how an
//! utterance is classified.
//!
//! ## Examples
//!
//! ```bash
//! folio ask what are your skills
//! folio ask --topic "mobile web app"   # prints: mobile
//! ```
//!
//! Blank questions are rejected with a non-zero exit status.
//!
use crate::chat::input::validate_submission;
use crate::core::{config, error::Result};
use clap::Parser;
use std::path::Path;
use tracing::debug;

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Print the matched topic key instead of the reply.
    #[arg(long)]
    pub topic: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Loads the configuration, validates the question at the input boundary and
/// prints either the reply or the topic.
pub async fn handle_ask(args: AskArgs, config_path: Option<&Path>) -> Result<()> {
    let utterance = args.words.join(" ");
    let utterance = validate_submission(&utterance)?;

    let cfg = config::load_config(config_path)?;
    let selector = cfg.selector()?;

    if args.topic {
        let topic = selector.classify(utterance)?;
        debug!("Classified {:?} as '{}'", utterance, topic);
        println!("{}", topic);
    } else {
        println!("{}", selector.select_response(utterance)?);
    }
    Ok(())
}
