//! # Chat Topics
//!
//! File: cli/src/chat/topic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The closed set of conversational intents the assistant knows how to answer.
//! Each topic has a stable kebab-case key used in configuration files
//! (`[responses]` table) and in CLI output (`folio ask --topic`).
//!
use crate::core::error::FolioError;
use std::fmt;
use std::str::FromStr;

/// A named category of conversational intent with one canned response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
    Mobile,
    Web,
    DesignWork,
    Greeting,
    Thanks,
    Fallback,
}

impl Topic {
    /// Every topic, in declaration order.
    pub const ALL: [Topic; 11] = [
        Topic::Skills,
        Topic::Projects,
        Topic::Experience,
        Topic::Education,
        Topic::Contact,
        Topic::Mobile,
        Topic::Web,
        Topic::DesignWork,
        Topic::Greeting,
        Topic::Thanks,
        Topic::Fallback,
    ];

    /// The stable key for this topic.
    pub fn key(self) -> &'static str {
        match self {
            Topic::Skills => "skills",
            Topic::Projects => "projects",
            Topic::Experience => "experience",
            Topic::Education => "education",
            Topic::Contact => "contact",
            Topic::Mobile => "mobile",
            Topic::Web => "web",
            Topic::DesignWork => "design-work",
            Topic::Greeting => "greeting",
            Topic::Thanks => "thanks",
            Topic::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Topic {
    type Err = FolioError;

    /// Parses a topic key. Underscores are accepted in place of dashes so TOML
    /// keys like `design_work` work too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Topic::ALL
            .into_iter()
            .find(|topic| topic.key() == wanted)
            .ok_or_else(|| FolioError::UnknownTopic {
                name: s.to_string(),
            })
    }
}
