//! # Folio Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `folio chat` opens an interactive conversation with the portfolio
//! assistant on stdin/stdout.
//!
//! ## Architecture
//!
//! The REPL loop:
//! 1. Print the welcome message (already the first transcript entry)
//! 2. Read lines; a trailing `\` continues the message on the next line
//! 3. Reject blank messages with a notice (no reply, no transcript entry)
//! 4. Submit the message, wait out the typing delay, print the reply
//! 5. Stop on `bye`, `exit`, `quit`, or end of input
//!
//! ## Examples
//!
//! ```bash
//! folio chat
//! folio chat --no-delay
//! ```
//!
//! ```text
//! Assistant: Hi! I'm Nisal's AI assistant. Feel free to ask me about his skills, projects, or experience!
//! You: what tech do you use?
//! Assistant is typing...
//! Assistant: Nisal is proficient in full-stack development with ...
//! You: bye
//! Assistant: Goodbye!
//! ```
//!
use crate::chat::input::Composer;
use crate::chat::message::Author;
use crate::chat::selector::ResponseSelector;
use crate::chat::session::ChatSession;
use crate::chat::typing::TypingDelay;
use crate::core::config;
use crate::core::error::{FolioError, Result};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

/// Words that end the conversation.
const EXIT_WORDS: [&str; 3] = ["bye", "exit", "quit"];

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Reply immediately instead of simulating typing.
    #[arg(long)]
    pub no_delay: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads configuration, builds the selector and runs the REPL on the
/// process's stdin/stdout.
pub async fn handle_chat(args: ChatArgs, config_path: Option<&Path>) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let selector = cfg.selector()?;
    let delay = if args.no_delay {
        TypingDelay::none()
    } else {
        cfg.chat.typing_delay()
    };
    info!("Starting chat session (delay: {:?})", delay);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(
        stdin.lock(),
        stdout.lock(),
        &selector,
        &cfg.chat.welcome,
        delay,
    )
    .await?;
    Ok(())
}

/// Runs one conversation over arbitrary reader/writer handles.
///
/// Returns the number of user messages answered.
pub async fn run_repl<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    selector: &ResponseSelector,
    welcome: &str,
    delay: TypingDelay,
) -> Result<usize> {
    let mut session = ChatSession::new(selector, welcome);
    let mut composer = Composer::new();
    let mut answered = 0;

    if let Some(first) = session.transcript().last() {
        writeln!(writer, "{}: {}", Author::Assistant, first.text())?;
    }
    prompt(&mut writer, &composer)?;

    for line in reader.lines() {
        let line = line.context("Failed to read from input")?;
        let Some(message) = composer.feed_line(line.trim_end_matches('\r')) else {
            prompt(&mut writer, &composer)?;
            continue;
        };

        if EXIT_WORDS.contains(&message.trim().to_lowercase().as_str()) {
            writeln!(writer, "{}: Goodbye!", Author::Assistant)?;
            debug!("User ended the session after {} replies", answered);
            return Ok(answered);
        }

        match session.submit(&message) {
            Ok(_) => {}
            Err(FolioError::EmptyInput) => {
                writeln!(writer, "(Type a question, or 'bye' to leave.)")?;
                prompt(&mut writer, &composer)?;
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        if delay != TypingDelay::none() {
            writeln!(writer, "{} is typing...", Author::Assistant)?;
            writer.flush()?;
        }
        delay.wait().await;

        let reply = session.reply_ready()?;
        writeln!(writer, "{}: {}", reply.author(), reply.text())?;
        answered += 1;
        prompt(&mut writer, &composer)?;
    }

    if composer.is_composing() {
        debug!("Input closed mid-message; discarding the unfinished message");
    }
    debug!("Input closed after {} replies", answered);
    Ok(answered)
}

fn prompt<W: Write>(writer: &mut W, composer: &Composer) -> io::Result<()> {
    if composer.is_composing() {
        write!(writer, "...  ")?;
    } else {
        write!(writer, "{}: ", Author::User)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::topic::Topic;
    use std::io::Cursor;

    async fn converse(input: &str) -> (usize, String) {
        let mut output = Vec::new();
        let answered = run_repl(
            Cursor::new(input.to_string()),
            &mut output,
            ResponseSelector::standard(),
            "Welcome!",
            TypingDelay::none(),
        )
        .await
        .expect("REPL failed");
        (answered, String::from_utf8(output).unwrap())
    }

    fn reply(topic: Topic) -> &'static str {
        ResponseSelector::standard().responses().get(topic).unwrap()
    }

    #[test]
    fn test_parses_no_delay_flag() {
        assert!(ChatArgs::try_parse_from(["chat", "--no-delay"]).unwrap().no_delay);
        assert!(!ChatArgs::try_parse_from(["chat"]).unwrap().no_delay);
    }

    #[tokio::test]
    async fn test_unfinished_message_at_end_of_input_is_discarded() {
        let (answered, output) = converse("hello\nwhat about your skills \\\n").await;
        assert_eq!(answered, 1);
        assert!(output.contains(reply(Topic::Greeting)));
        assert!(!output.contains(reply(Topic::Skills)));
        assert!(output.ends_with("...  "));
    }

    #[tokio::test]
    async fn test_conversation_until_bye() {
        let (answered, output) = converse("What are your skills?\nthanks a lot\nbye\nhello\n").await;
        assert_eq!(answered, 2);
        assert!(output.starts_with("Assistant: Welcome!"));
        assert!(output.contains(reply(Topic::Skills)));
        assert!(output.contains(reply(Topic::Thanks)));
        assert!(output.contains("Assistant: Goodbye!"));
        // Nothing after "bye" is answered.
        assert!(!output.contains(reply(Topic::Greeting)));
    }

    #[tokio::test]
    async fn test_blank_lines_get_no_reply() {
        let (answered, output) = converse("\n   \n").await;
        assert_eq!(answered, 0);
        assert_eq!(output.matches("(Type a question").count(), 2);
        assert!(!output.contains(reply(Topic::Fallback)));
    }

    #[tokio::test]
    async fn test_line_continuation_builds_one_message() {
        let (answered, output) = converse("xyzzy\\\nhello\n").await;
        // One message "xyzzy\nhello": Greeting via "hello".
        assert_eq!(answered, 1);
        assert!(output.contains(reply(Topic::Greeting)));
        assert!(output.contains("...  "));
    }

    #[tokio::test]
    async fn test_end_of_input_ends_session() {
        let (answered, output) = converse("xyzzy123").await;
        assert_eq!(answered, 1);
        assert!(output.contains(reply(Topic::Fallback)));
        assert!(!output.contains("Goodbye"));
    }
}
