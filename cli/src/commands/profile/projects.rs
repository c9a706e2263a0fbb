//! # Folio Profile Projects Command
//!
//! File: cli/src/commands/profile/projects.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `folio profile projects [--tab <tab>]` lists the project gallery. The tab
//! works like the gallery's filter buttons: `all` (default) shows everything,
//! a category shows only that category. Gallery order is preserved.
//!
//! Example output:
//!
//! ```text
//! Projects (Mobile App):
//!
//! [3] CampLanka iOS Mobile App  (Mobile App)
//!     Comprehensive camping experience app for Sri Lanka ...
//!     Tags: Swift, SwiftUI, Firebase, ...
//!     Code: https://github.com/NisalMadura/CampLanka.git
//!
//! Showing 2 of 15 project(s).
//! ```
//!
use crate::core::error::Result;
use crate::profile::{filter_projects, projects, GalleryTab};
use clap::Parser;
use tracing::debug;

/// # Projects Arguments (`ProjectsArgs`)
#[derive(Parser, Debug)]
pub struct ProjectsArgs {
    /// Gallery tab: all, web-app, website, mobile-app or ui-ux.
    #[arg(long, short, default_value = "all")]
    pub tab: String,
}

/// # Handle Projects Command (`handle_projects`)
pub async fn handle_projects(args: ProjectsArgs) -> Result<()> {
    let tab: GalleryTab = args.tab.parse()?;
    debug!("Listing projects for tab '{}'", tab);
    print!("{}", render_projects(tab));
    Ok(())
}

/// Formats the projects visible under `tab`.
pub fn render_projects(tab: GalleryTab) -> String {
    let shown = filter_projects(tab);
    let mut out = format!("Projects ({}):\n\n", tab);
    for project in &shown {
        out.push_str(&format!(
            "[{}] {}  ({})\n",
            project.id, project.title, project.category
        ));
        out.push_str(&format!("    {}\n", project.description));
        out.push_str(&format!("    Tags: {}\n", project.tags.join(", ")));
        for (label, url) in project.links() {
            out.push_str(&format!("    {}: {}\n", label, url));
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "Showing {} of {} project(s).\n",
        shown.len(),
        projects().len()
    ));
    out
}
