//! # Folio Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Folio CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`chat`, `ask`, etc.) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in `folio::commands`
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Talk to the portfolio assistant
//! folio chat
//!
//! # One question, with debug logging
//! folio -vv ask what projects have you built
//!
//! # Use a specific configuration file
//! folio --config ~/folio.toml chat
//! ```
//!
use clap::Parser;
use folio::commands;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    about = "Folio: portfolio profile and scripted FAQ assistant",
    long_about = "Browse a developer portfolio from the terminal and ask its scripted\n\
                  assistant about skills, projects, experience and contact details.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the user and project files.
    #[arg(long, global = true, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Chat with the portfolio assistant.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Ask the assistant a single question.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List the assistant's keyword rules in precedence order.
    Topics(commands::topics::TopicsArgs),
    /// Show portfolio content.
    #[command(alias = "p")]
    Profile(commands::profile::ProfileArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config_path = cli.config.as_deref();
    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, config_path).await,
        Commands::Ask(args) => commands::ask::handle_ask(args, config_path).await,
        Commands::Topics(args) => commands::topics::handle_topics(args, config_path).await,
        Commands::Profile(args) => commands::profile::handle_profile(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
