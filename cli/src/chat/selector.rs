//! # Response Selector
//!
//! File: cli/src/chat/selector.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps a free-text utterance to one canned reply. The utterance is
//! lower-cased, the ordered rule list is walked, and the first rule whose
//! trigger matches picks the topic whose text is returned. Selection is a pure
//! function of the utterance and the (immutable) rules and responses.
//!
//! ## Examples
//!
//! ```rust
//! use folio::chat::selector::ResponseSelector;
//! use folio::chat::topic::Topic;
//!
//! let selector = ResponseSelector::standard();
//! assert_eq!(selector.classify("What are your SKILLS?").unwrap(), Topic::Skills);
//! assert_eq!(selector.classify("xyzzy123").unwrap(), Topic::Fallback);
//! ```
//!
use crate::chat::responses::ResponseTable;
use crate::chat::rules::RuleSet;
use crate::chat::topic::Topic;
use crate::core::error::FolioError;
use once_cell::sync::Lazy;
use tracing::trace;

/// The built-in selector, built on first use and shared for the life of
/// the process.
static STANDARD: Lazy<ResponseSelector> = Lazy::new(|| ResponseSelector {
    rules: RuleSet::builtin(),
    responses: ResponseTable::defaults(),
});

/// Ordered keyword rules plus the reply for every topic they can reach.
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    rules: RuleSet,
    responses: ResponseTable,
}

impl ResponseSelector {
    /// Builds a selector, checking that every topic the rules can select has
    /// a reply.
    pub fn new(rules: RuleSet, responses: ResponseTable) -> Result<Self, FolioError> {
        responses.ensure_covers(rules.topics())?;
        Ok(Self { rules, responses })
    }

    /// The process-wide selector built from the default rules and replies.
    pub fn standard() -> &'static ResponseSelector {
        &STANDARD
    }

    /// The topic the utterance resolves to.
    pub fn classify(&self, utterance: &str) -> Result<Topic, FolioError> {
        let normalized = utterance.to_lowercase();
        let rule = self
            .rules
            .first_match(&normalized)
            .ok_or(FolioError::NoRuleMatched)?;
        trace!("Utterance {:?} matched topic '{}'", utterance, rule.topic);
        Ok(rule.topic)
    }

    /// The reply for the utterance.
    ///
    /// ## Errors
    ///
    /// `FolioError::NoRuleMatched` only if the rule list was never validated;
    /// a selector built through `new` or `standard` always has a fallback.
    pub fn select_response(&self, utterance: &str) -> Result<&str, FolioError> {
        let topic = self.classify(utterance)?;
        self.responses
            .get(topic)
            .ok_or(FolioError::MissingResponse { topic })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn responses(&self) -> &ResponseTable {
        &self.responses
    }

    /// Builds a selector without the coverage check. Only for exercising
    /// misconfiguration paths in tests.
    #[cfg(test)]
    pub(crate) fn unchecked(rules: RuleSet, responses: ResponseTable) -> Self {
        Self { rules, responses }
    }
}

/// Selects a reply with the built-in selector.
pub fn select_response(utterance: &str) -> Result<&'static str, FolioError> {
    ResponseSelector::standard().select_response(utterance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::rules::{KeywordRule, Trigger};

    fn text(topic: Topic) -> &'static str {
        ResponseSelector::standard().responses().get(topic).unwrap()
    }

    #[test]
    fn test_example_scenarios() {
        assert_eq!(select_response("What are your skills?").unwrap(), text(Topic::Skills));
        assert_eq!(select_response("Hi there").unwrap(), text(Topic::Greeting));
        assert_eq!(select_response("thanks a lot").unwrap(), text(Topic::Thanks));
        assert_eq!(select_response("xyzzy123").unwrap(), text(Topic::Fallback));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            select_response("SKILLS").unwrap(),
            select_response("skills").unwrap()
        );
        assert_eq!(
            ResponseSelector::standard().classify("FiGmA").unwrap(),
            Topic::DesignWork
        );
    }

    #[test]
    fn test_first_match_wins() {
        let selector = ResponseSelector::standard();
        assert_eq!(selector.classify("skill and project").unwrap(), Topic::Skills);
        assert_eq!(selector.classify("project skill").unwrap(), Topic::Skills);
        assert_eq!(selector.classify("mobile web app").unwrap(), Topic::Mobile);
        // "hi" is a substring of "this", and Greeting precedes Thanks.
        assert_eq!(selector.classify("thanks for this").unwrap(), Topic::Greeting);
        // "work" (Experience) precedes "design" (DesignWork).
        assert_eq!(selector.classify("design work").unwrap(), Topic::Experience);
    }

    #[test]
    fn test_empty_string_falls_back() {
        assert_eq!(select_response("").unwrap(), text(Topic::Fallback));
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let first = select_response("tell me about your education").unwrap();
        for _ in 0..10 {
            assert_eq!(select_response("tell me about your education").unwrap(), first);
        }
    }

    #[test]
    fn test_new_rejects_rules_without_responses() {
        let rules = RuleSet::new(vec![
            KeywordRule::new(Topic::Web, Trigger::any_of(&["rust"])),
            KeywordRule::new(Topic::Fallback, Trigger::Always),
        ])
        .unwrap();
        let responses = ResponseTable::new([(Topic::Fallback, "Ask away.".to_string())]).unwrap();
        assert_eq!(
            ResponseSelector::new(rules, responses).unwrap_err(),
            FolioError::MissingResponse { topic: Topic::Web }
        );
    }

    #[test]
    fn test_custom_selector() {
        let rules = RuleSet::new(vec![
            KeywordRule::new(Topic::Web, Trigger::any_of(&["Rust"])),
            KeywordRule::new(Topic::Fallback, Trigger::Always),
        ])
        .unwrap();
        let responses = ResponseTable::new([
            (Topic::Web, "Rust on the web.".to_string()),
            (Topic::Fallback, "Ask away.".to_string()),
        ])
        .unwrap();
        let selector = ResponseSelector::new(rules, responses).unwrap();
        assert_eq!(selector.select_response("I like RUST").unwrap(), "Rust on the web.");
        assert_eq!(selector.select_response("hello").unwrap(), "Ask away.");
    }

    #[test]
    fn test_unvalidated_rules_signal_no_match() {
        let selector = ResponseSelector::unchecked(
            RuleSet::unchecked(vec![KeywordRule::new(
                Topic::Skills,
                Trigger::any_of(&["skill"]),
            )]),
            ResponseTable::defaults(),
        );
        assert_eq!(
            selector.select_response("nothing here"),
            Err(FolioError::NoRuleMatched)
        );
    }
}
