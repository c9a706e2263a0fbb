//! # Response Table
//!
//! File: cli/src/chat/responses.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps each `Topic` to the fixed text the assistant replies with. The table
//! is built once (defaults plus any `[responses]` overrides from the config
//! file) and then only read.
//!
use crate::chat::topic::Topic;
use crate::core::error::FolioError;
use std::collections::HashMap;
use tracing::debug;

/// Topic → canned reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    texts: HashMap<Topic, String>,
}

impl ResponseTable {
    /// Builds a table from explicit entries. Blank texts are rejected.
    pub fn new<I>(entries: I) -> Result<Self, FolioError>
    where
        I: IntoIterator<Item = (Topic, String)>,
    {
        let mut texts = HashMap::new();
        for (topic, text) in entries {
            if text.trim().is_empty() {
                return Err(FolioError::MissingResponse { topic });
            }
            texts.insert(topic, text);
        }
        Ok(Self { texts })
    }

    /// The built-in replies for every topic.
    pub fn defaults() -> Self {
        let texts = Topic::ALL
            .into_iter()
            .map(|topic| (topic, default_text(topic).to_string()))
            .collect();
        Self { texts }
    }

    /// Returns a copy of `self` with the given topic texts replaced.
    ///
    /// Keys are topic keys as written in the config file. Unknown keys and
    /// blank texts are errors.
    pub fn with_overrides(&self, overrides: &HashMap<String, String>) -> Result<Self, FolioError> {
        let mut texts = self.texts.clone();
        for (key, text) in overrides {
            let topic: Topic = key.parse()?;
            if text.trim().is_empty() {
                return Err(FolioError::MissingResponse { topic });
            }
            debug!("Overriding response for topic '{}'", topic);
            texts.insert(topic, text.clone());
        }
        Ok(Self { texts })
    }

    pub fn get(&self, topic: Topic) -> Option<&str> {
        self.texts.get(&topic).map(String::as_str)
    }

    /// Fails with `MissingResponse` for the first topic that has no text.
    pub fn ensure_covers<I>(&self, topics: I) -> Result<(), FolioError>
    where
        I: IntoIterator<Item = Topic>,
    {
        for topic in topics {
            if self.get(topic).is_none() {
                return Err(FolioError::MissingResponse { topic });
            }
        }
        Ok(())
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::defaults()
    }
}

/// The welcome line the assistant opens every conversation with.
pub const DEFAULT_WELCOME: &str =
    "Hi! I'm Nisal's AI assistant. Feel free to ask me about his skills, projects, or experience!";

fn default_text(topic: Topic) -> &'static str {
    match topic {
        Topic::Skills => "Nisal is proficient in full-stack development with expertise in React, Node.js, Python, Java, C#, and various databases like MySQL, MongoDB. He also has experience with cloud platforms like AWS, Google Cloud, and Azure.",
        Topic::Projects => "Nisal has worked on diverse projects including a Sri Lanka Railway Tracking System, CampLanka iOS app, Weather Web App, Gym Management System, and various UI/UX designs. Check out the Projects section for more details!",
        Topic::Experience => "Nisal has 6 months of professional experience as a Full Stack Developer at the Board of Investment (BOI) Sri Lanka, where he developed enterprise-level applications and approval systems.",
        Topic::Education => "Nisal is pursuing a BSc (Hons) in Computing with a specialization in Software Engineering. He's passionate about continuous learning and staying updated with latest technologies.",
        Topic::Contact => "You can reach Nisal through his social media links below or check out his GitHub for more projects. He's always open to discussing new opportunities and collaborations!",
        Topic::Mobile => "Nisal has experience in mobile development, particularly iOS development using Swift and SwiftUI. He's built several mobile applications including CampLanka and Square Game.",
        Topic::Web => "Nisal specializes in modern web development using React, Next.js, Node.js, and various other frameworks. He focuses on creating responsive, user-friendly applications with clean code.",
        Topic::DesignWork => "Nisal has strong UI/UX design skills using Figma. He's designed several mobile and web applications with focus on user experience and modern design principles.",
        Topic::Greeting => "Hello! I'm here to help you learn more about Nisal. You can ask me about his skills, projects, experience, or anything else you'd like to know!",
        Topic::Thanks => "You're welcome! Feel free to ask me anything else about Nisal's work or background.",
        Topic::Fallback => "I'd be happy to help! You can ask me about Nisal's skills, projects, experience, education, or how to contact him. What would you like to know?",
    }
}
