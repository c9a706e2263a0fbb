//! # Folio Profile Command Group
//!
//! File: cli/src/commands/profile/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module serves as the entry point and router for the `folio profile`
//! command group, which prints the static portfolio content.
//!
//! ## Architecture
//!
//! - `ProfileArgs`: Top-level arguments for the command group.
//! - `ProfileCommand`: Enum defining all profile subcommands.
//! - `handle_profile`: Routes execution to the relevant subcommand handler.
//!
//! `projects.rs` holds the gallery listing (it takes a `--tab` filter); the
//! plain listings (`about`, `skills`, `links`) live in `show.rs`.
//!
//! ## Examples
//!
//! ```bash
//! folio profile about
//! folio profile skills
//! folio profile projects --tab ui-ux
//! folio profile links
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Contains the handler and arguments for `folio profile projects`.
mod projects;
/// Contains the handlers for `folio profile about`, `skills` and `links`.
mod show;

/// # Profile Command Group Arguments (`ProfileArgs`)
#[derive(Parser, Debug)]
pub struct ProfileArgs {
    /// The specific profile subcommand to execute.
    #[command(subcommand)]
    command: ProfileCommand,
}

/// # Profile Subcommands (`ProfileCommand`)
#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Shows the owner's name, role and biography.
    About,
    /// Lists the skills grid by category.
    Skills,
    /// Lists the project gallery, optionally filtered by category tab.
    #[command(alias = "p")]
    Projects(projects::ProjectsArgs),
    /// Lists social profile links.
    Links,
}

/// # Handle Profile Command (`handle_profile`)
///
/// Dispatches to the handler for the chosen subcommand.
pub async fn handle_profile(args: ProfileArgs) -> Result<()> {
    match args.command {
        ProfileCommand::About => print!("{}", show::render_about()),
        ProfileCommand::Skills => print!("{}", show::render_skills()),
        ProfileCommand::Projects(args) => projects::handle_projects(args).await?,
        ProfileCommand::Links => print!("{}", show::render_links()),
    }
    Ok(())
}
