//! # Folio Topics Command
//!
//! File: cli/src/commands/topics.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `folio topics` prints the assistant's keyword rules in precedence order.
//! Because the first matching rule wins, this listing is the quickest way to
//! see why an utterance that mentions two topics got the answer it did.
//!
//! Example output:
//!
//! ```text
//!  #  Topic        Triggers
//! --  -----------  ------------------------------
//!  1  skills       skill, technology, tech
//!  2  projects     project
//! ...
//! 11  fallback     (anything)
//! ```
//!
use crate::chat::rules::{RuleSet, Trigger};
use crate::core::{config, error::Result};
use clap::Parser;
use std::path::Path;

/// # Topics Arguments (`TopicsArgs`)
///
/// No options; the struct exists for consistency with the other commands.
#[derive(Parser, Debug)]
pub struct TopicsArgs {}

/// # Handle Topics Command (`handle_topics`)
pub async fn handle_topics(_args: TopicsArgs, config_path: Option<&Path>) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let selector = cfg.selector()?;
    print!("{}", render_rules(selector.rules()));
    Ok(())
}

/// Formats the rule list as an aligned table.
pub fn render_rules(rules: &RuleSet) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>2}  {:<11}  {}\n", "#", "Topic", "Triggers"));
    out.push_str(&format!("{:->2}  {:-<11}  {:-<30}\n", "", "", ""));
    for (index, rule) in rules.iter().enumerate() {
        let triggers = match &rule.trigger {
            Trigger::AnyOf(words) => words.join(", "),
            Trigger::Always => "(anything)".to_string(),
        };
        out.push_str(&format!(
            "{:>2}  {:<11}  {}\n",
            index + 1,
            rule.topic.key(),
            triggers
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::rules::default_rules;

    #[test]
    fn test_render_lists_rules_in_order() {
        let rules = RuleSet::new(default_rules()).unwrap();
        let table = render_rules(&rules);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2 + rules.len());
        assert!(lines[2].contains("skills") && lines[2].contains("skill, technology, tech"));
        assert!(lines[7].contains("mobile"));
        assert!(lines[8].contains("web"));
        assert!(lines.last().unwrap().contains("fallback"));
        assert!(lines.last().unwrap().contains("(anything)"));
    }
}
