//! # Folio Profile Listings
//!
//! File: cli/src/commands/profile/show.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Plain-text renderings of the owner summary, the skills grid and the social
//! links, used by `folio profile about|skills|links`.
//!
use crate::profile::{owner, skill_categories, social_links};

pub fn render_about() -> String {
    let owner = owner();
    format!(
        "{} ({})\n{}\n\nExperience: {}\nEducation:  {}\n\n{}\n",
        owner.name, owner.initials, owner.role, owner.experience, owner.education, owner.about
    )
}

pub fn render_skills() -> String {
    let mut out = String::new();
    for category in skill_categories() {
        out.push_str(&format!("{}\n", category.title));
        out.push_str(&format!("  {}\n", category.skills.join(", ")));
    }
    out
}

pub fn render_links() -> String {
    let width = social_links()
        .iter()
        .map(|link| link.name.len())
        .max()
        .unwrap_or(0);
    social_links()
        .iter()
        .map(|link| format!("{:<width$}  {}\n", link.name, link.url, width = width))
        .collect()
}
