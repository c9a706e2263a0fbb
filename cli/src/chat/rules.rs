//! # Keyword Rules
//!
//! File: cli/src/chat/rules.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! An ordered list of `(Topic, Trigger)` pairs. The selector walks the list
//! top to bottom and the first rule whose trigger matches wins, so the order
//! here decides every overlap (e.g. "mobile web app" resolves to `Mobile`
//! because the mobile rule comes first).
//!
//! ## Architecture
//!
//! - `Trigger`: either a set of lower-case substrings (any one matches) or `Always`.
//! - `KeywordRule`: a topic plus its trigger.
//! - `RuleSet`: a validated, ordered list. Construction fails unless at least
//!   one rule is `Always`, which makes selection total.
//! - `default_rules()`: the assistant's built-in rule list.
//!
use crate::chat::topic::Topic;
use crate::core::error::FolioError;
use tracing::{debug, warn};

/// What makes a rule match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Matches when the normalised utterance contains any of these substrings.
    AnyOf(Vec<String>),
    /// Matches every utterance.
    Always,
}

impl Trigger {
    /// Builds an `AnyOf` trigger from string slices.
    pub fn any_of(words: &[&str]) -> Self {
        Trigger::AnyOf(words.iter().map(|w| w.to_string()).collect())
    }

    /// Tests an already lower-cased utterance.
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Trigger::AnyOf(words) => words.iter().any(|w| normalized.contains(w.as_str())),
            Trigger::Always => true,
        }
    }

    /// True for the unconditional trigger.
    pub fn is_always(&self) -> bool {
        matches!(self, Trigger::Always)
    }
}

/// One entry of the ordered rule list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub topic: Topic,
    pub trigger: Trigger,
}

impl KeywordRule {
    pub fn new(topic: Topic, trigger: Trigger) -> Self {
        Self { topic, trigger }
    }
}

/// An ordered rule list that is known to contain a catch-all rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<KeywordRule>,
}

impl RuleSet {
    /// Validates and normalises a rule list.
    ///
    /// ## Errors
    ///
    /// - `FolioError::MissingFallback` if no rule is `Trigger::Always`.
    /// - `FolioError::Config` if an `AnyOf` trigger is empty or contains an
    ///   empty substring (which would silently match everything).
    pub fn new(rules: Vec<KeywordRule>) -> Result<Self, FolioError> {
        let mut normalized = Vec::with_capacity(rules.len());
        for rule in rules {
            let trigger = match rule.trigger {
                Trigger::AnyOf(words) => {
                    if words.is_empty() {
                        return Err(FolioError::Config(format!(
                            "rule for topic '{}' has no trigger substrings",
                            rule.topic
                        )));
                    }
                    if words.iter().any(|w| w.trim().is_empty()) {
                        return Err(FolioError::Config(format!(
                            "rule for topic '{}' contains an empty trigger substring",
                            rule.topic
                        )));
                    }
                    Trigger::AnyOf(words.into_iter().map(|w| w.to_lowercase()).collect())
                }
                Trigger::Always => Trigger::Always,
            };
            normalized.push(KeywordRule::new(rule.topic, trigger));
        }

        if !normalized.iter().any(|r| r.trigger.is_always()) {
            return Err(FolioError::MissingFallback);
        }
        let set = Self { rules: normalized };
        for (position, topic) in set.unreachable_rules() {
            warn!(
                "Rule for topic '{}' at position {} is unreachable: it follows the catch-all rule.",
                topic, position
            );
        }

        debug!("Validated rule set with {} rules", set.len());
        Ok(set)
    }

    /// Rules listed after the first catch-all, as 1-based positions.
    pub fn unreachable_rules(&self) -> Vec<(usize, Topic)> {
        let Some(fallback_at) = self.rules.iter().position(|r| r.trigger.is_always()) else {
            return Vec::new();
        };
        self.rules[fallback_at + 1..]
            .iter()
            .enumerate()
            .map(|(i, rule)| (fallback_at + 2 + i, rule.topic))
            .collect()
    }

    /// Returns the first rule matching an already lower-cased utterance.
    pub fn first_match(&self, normalized: &str) -> Option<&KeywordRule> {
        self.rules.iter().find(|rule| rule.trigger.matches(normalized))
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Topics of every rule, in rule order.
    pub fn topics(&self) -> impl Iterator<Item = Topic> + '_ {
        self.rules.iter().map(|r| r.topic)
    }

    /// The built-in rule list. Its triggers are already lower-case and it ends
    /// with the catch-all rule, which `test_builtin_matches_validated_defaults`
    /// checks.
    pub(crate) fn builtin() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Builds a set without validation. Only for exercising the selector's
    /// misconfiguration path in tests.
    #[cfg(test)]
    pub(crate) fn unchecked(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }
}

/// The assistant's built-in rule list, in precedence order.
pub fn default_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(Topic::Skills, Trigger::any_of(&["skill", "technology", "tech"])),
        KeywordRule::new(Topic::Projects, Trigger::any_of(&["project"])),
        KeywordRule::new(Topic::Experience, Trigger::any_of(&["experience", "work"])),
        KeywordRule::new(
            Topic::Education,
            Trigger::any_of(&["education", "study", "degree"]),
        ),
        KeywordRule::new(Topic::Contact, Trigger::any_of(&["contact", "reach", "email"])),
        KeywordRule::new(Topic::Mobile, Trigger::any_of(&["mobile", "ios", "app"])),
        KeywordRule::new(
            Topic::Web,
            Trigger::any_of(&["web", "website", "frontend", "backend"]),
        ),
        KeywordRule::new(
            Topic::DesignWork,
            Trigger::any_of(&["design", "ui", "ux", "figma"]),
        ),
        KeywordRule::new(Topic::Greeting, Trigger::any_of(&["hello", "hi", "hey"])),
        KeywordRule::new(Topic::Thanks, Trigger::any_of(&["thank", "thanks"])),
        KeywordRule::new(Topic::Fallback, Trigger::Always),
    ]
}
