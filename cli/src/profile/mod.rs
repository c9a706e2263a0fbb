//! # Portfolio Profile
//!
//! File: cli/src/profile/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The static content of the portfolio: who the owner is, the skills grid, the
//! project gallery and the social links. None of it changes at runtime. The
//! only logic here is the gallery's category tab filter.
//!
//! ## Examples
//!
//! ```rust
//! use folio::profile::{filter_projects, GalleryTab, ProjectCategory};
//!
//! let tab: GalleryTab = "mobile-app".parse().unwrap();
//! assert_eq!(tab, GalleryTab::Category(ProjectCategory::MobileApp));
//! assert!(filter_projects(tab).iter().all(|p| p.category == ProjectCategory::MobileApp));
//! ```
//!
use crate::core::error::FolioError;
use std::fmt;
use std::str::FromStr;

mod data;

pub use data::{owner, projects, skill_categories, social_links};

/// The portfolio owner's headline details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub about: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
}

/// A titled group in the skills grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

/// The gallery category a project is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    WebApp,
    Website,
    MobileApp,
    UiUx,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::WebApp,
        ProjectCategory::Website,
        ProjectCategory::MobileApp,
        ProjectCategory::UiUx,
    ];

    /// Label shown on the gallery tab.
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::WebApp => "Web App",
            ProjectCategory::Website => "Website",
            ProjectCategory::MobileApp => "Mobile App",
            ProjectCategory::UiUx => "UI/UX",
        }
    }

    /// Command-line spelling of the category.
    pub fn slug(self) -> &'static str {
        match self {
            ProjectCategory::WebApp => "web-app",
            ProjectCategory::Website => "website",
            ProjectCategory::MobileApp => "mobile-app",
            ProjectCategory::UiUx => "ui-ux",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the project gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub tags: &'static [&'static str],
    pub repository: Option<&'static str>,
    pub live: Option<&'static str>,
    pub design: Option<&'static str>,
}

impl Project {
    /// Every link the project has, labelled, in display order.
    pub fn links(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("Code", self.repository),
            ("Live", self.live),
            ("Design", self.design),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

/// A social profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// Which slice of the gallery is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryTab {
    #[default]
    All,
    Category(ProjectCategory),
}

impl fmt::Display for GalleryTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryTab::All => f.write_str("All"),
            GalleryTab::Category(category) => category.fmt(f),
        }
    }
}

impl FromStr for GalleryTab {
    type Err = FolioError;

    /// Accepts slugs (`web-app`) and tab labels (`Web App`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(GalleryTab::All);
        }
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.slug() == wanted || c.label().to_lowercase() == wanted)
            .map(GalleryTab::Category)
            .ok_or_else(|| FolioError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// Projects visible under `tab`, in gallery order.
pub fn filter_projects(tab: GalleryTab) -> Vec<&'static Project> {
    projects()
        .iter()
        .filter(|project| match tab {
            GalleryTab::All => true,
            GalleryTab::Category(category) => project.category == category,
        })
        .collect()
}
