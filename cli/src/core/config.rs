//! # Folio Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates the configuration for the chat
//! assistant. Everything has a built-in default, so running without any
//! configuration file is the normal case.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config` (or `FOLIO_CONFIG`); when present,
//!    the two sources below are not consulted
//! 2. Project-specific `.folio.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/folio/config.toml`)
//! 4. Default values defined in the code
//!
//! Validation builds the response selector once, so a configuration that
//! would leave a topic without a reply is rejected at startup rather than
//! mid-conversation.
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! welcome = "Hi! Ask me anything about my work."
//! typing_delay_ms = 500
//! typing_jitter_ms = 250
//!
//! [responses]
//! contact = "Email me at hello@example.com."
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! let selector = cfg.selector()?;
//! let delay = cfg.chat.typing_delay();
//! ```
//!
use crate::chat::responses::{ResponseTable, DEFAULT_WELCOME};
use crate::chat::rules::{default_rules, RuleSet};
use crate::chat::selector::ResponseSelector;
use crate::chat::typing::TypingDelay;
use crate::core::error::{FolioError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The effective configuration, after every source has been layered over the
/// built-in defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub chat: ChatConfig,
    /// Per-topic reply overrides, keyed by topic key (e.g. `design-work`).
    pub responses: HashMap<String, String>,
}

/// Settings for the chat assistant (`folio chat`, `folio ask`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// The assistant's opening line.
    pub welcome: String,
    /// Minimum pause before a reply, in milliseconds.
    pub typing_delay_ms: u64,
    /// Upper bound of the random extra pause, in milliseconds.
    pub typing_jitter_ms: u64,
}

/// One configuration file as written. A `None` field was not set in that file
/// and falls through to the next source.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    chat: ChatLayer,
    #[serde(default)]
    responses: HashMap<String, String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ChatLayer {
    #[serde(default)]
    welcome: Option<String>,
    #[serde(default)]
    typing_delay_ms: Option<u64>,
    #[serde(default)]
    typing_jitter_ms: Option<u64>,
}

impl ConfigLayer {
    /// Fills every unset field from the built-in defaults.
    fn resolve(self) -> Config {
        Config {
            chat: ChatConfig {
                welcome: self.chat.welcome.unwrap_or_else(default_welcome),
                typing_delay_ms: self
                    .chat
                    .typing_delay_ms
                    .unwrap_or_else(default_typing_delay_ms),
                typing_jitter_ms: self
                    .chat
                    .typing_jitter_ms
                    .unwrap_or_else(default_typing_jitter_ms),
            },
            responses: self.responses,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            welcome: default_welcome(),
            typing_delay_ms: default_typing_delay_ms(),
            typing_jitter_ms: default_typing_jitter_ms(),
        }
    }
}

impl ChatConfig {
    pub fn typing_delay(&self) -> TypingDelay {
        TypingDelay::from_millis(self.typing_delay_ms, self.typing_jitter_ms)
    }
}

impl Config {
    /// Builds the response selector this configuration describes.
    pub fn selector(&self) -> Result<ResponseSelector> {
        let rules = RuleSet::new(default_rules())?;
        let responses = ResponseTable::defaults().with_overrides(&self.responses)?;
        Ok(ResponseSelector::new(rules, responses)?)
    }
}

fn default_welcome() -> String {
    DEFAULT_WELCOME.to_string()
}
fn default_typing_delay_ms() -> u64 {
    1000
}
fn default_typing_jitter_ms() -> u64 {
    1000
}

const PROJECT_CONFIG_FILENAME: &str = ".folio.toml";

/// Loads the effective configuration.
///
/// With `explicit` set, only that file is read (after `~` expansion) and it
/// must exist. Otherwise the user and project files are merged over the
/// defaults. The result is validated before it is returned.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
            info!("Loading configuration from: {}", expanded.display());
            load_config_from_path(&expanded)?.resolve()
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config).resolve()
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Folio", "folio") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.folio.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Layers the project file over the user file, field by field.
fn merge_configs(user: ConfigLayer, project: Option<ConfigLayer>) -> ConfigLayer {
    let Some(project_cfg) = project else {
        return user;
    };
    let mut responses = user.responses;
    responses.extend(project_cfg.responses);
    ConfigLayer {
        chat: ChatLayer {
            welcome: project_cfg.chat.welcome.or(user.chat.welcome),
            typing_delay_ms: project_cfg.chat.typing_delay_ms.or(user.chat.typing_delay_ms),
            typing_jitter_ms: project_cfg
                .chat
                .typing_jitter_ms
                .or(user.chat.typing_jitter_ms),
        },
        responses,
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.chat.welcome.trim().is_empty() {
        return Err(anyhow!(FolioError::Config(
            "chat.welcome cannot be empty.".to_string()
        )));
    }
    config
        .selector()
        .context("Response table does not cover every rule")?;
    info!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::topic::Topic;
    use tempfile::tempdir;

    fn parse(toml_content: &str) -> ConfigLayer {
        toml::from_str(toml_content).expect("Failed to parse TOML")
    }

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [chat]
            welcome = "Ask me anything."
            typing_delay_ms = 200

            [responses]
            contact = "Email me."
        "#;

        let config = parse(toml_content).resolve();

        assert_eq!(config.chat.welcome, "Ask me anything.");
        assert_eq!(config.chat.typing_delay_ms, 200);
        assert_eq!(config.chat.typing_jitter_ms, default_typing_jitter_ms()); // Default
        assert_eq!(config.responses.get("contact").map(String::as_str), Some("Email me."));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = parse("").resolve();
        assert_eq!(config, Config::default());
        assert_eq!(config.chat.welcome, DEFAULT_WELCOME);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(toml::from_str::<ConfigLayer>("[chat]\ncolour = \"blue\"\n").is_err());
        assert!(toml::from_str::<ConfigLayer>("[server]\nport = 80\n").is_err());
    }

    #[test]
    fn test_merge_prefers_project_values() {
        let user = parse(
            r#"
            [chat]
            welcome = "User welcome"
            typing_delay_ms = 10

            [responses]
            skills = "User skills"
            thanks = "User thanks"
        "#,
        );
        let project = parse(
            r#"
            [chat]
            typing_jitter_ms = 0

            [responses]
            skills = "Project skills"
        "#,
        );

        let merged = merge_configs(user, Some(project)).resolve();
        assert_eq!(merged.chat.welcome, "User welcome");
        assert_eq!(merged.chat.typing_delay_ms, 10);
        assert_eq!(merged.chat.typing_jitter_ms, 0);
        assert_eq!(merged.responses["skills"], "Project skills");
        assert_eq!(merged.responses["thanks"], "User thanks");
    }

    #[test]
    fn test_merge_keeps_project_value_equal_to_default() {
        let user = parse(
            "[chat]\nwelcome = \"User welcome\"\ntyping_delay_ms = 10\ntyping_jitter_ms = 5\n",
        );
        let project = parse(&format!(
            "[chat]\nwelcome = \"{}\"\ntyping_delay_ms = {}\ntyping_jitter_ms = {}\n",
            DEFAULT_WELCOME,
            default_typing_delay_ms(),
            default_typing_jitter_ms()
        ));

        let merged = merge_configs(user, Some(project)).resolve();
        assert_eq!(merged.chat, ChatConfig::default());
    }

    #[test]
    fn test_merge_without_project_keeps_user_layer() {
        let user = parse("[chat]\ntyping_delay_ms = 10\n");
        let merged = merge_configs(user, None).resolve();
        assert_eq!(merged.chat.typing_delay_ms, 10);
        assert_eq!(merged.chat.typing_jitter_ms, default_typing_jitter_ms());
    }

    #[test]
    fn test_validate_rejects_unknown_response_topic() {
        let mut config = Config::default();
        config.responses.insert("weather".into(), "Sunny.".into());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_blank_welcome() {
        let mut config = Config::default();
        config.chat.welcome = "  ".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_selector_uses_overrides() {
        let mut config = Config::default();
        config.responses.insert("greeting".into(), "Howdy!".into());
        let selector = config.selector().unwrap();
        assert_eq!(selector.select_response("hey").unwrap(), "Howdy!");
        assert_eq!(
            selector.select_response("xyzzy").unwrap(),
            ResponseTable::defaults().get(Topic::Fallback).unwrap()
        );
    }

    #[test]
    fn test_load_explicit_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "[chat]\ntyping_delay_ms = 0\ntyping_jitter_ms = 0\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.chat.typing_delay(), TypingDelay::none());
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_project_config_search_stops_at_git_root() {
        let root = tempdir().unwrap();
        let repo = root.path().join("repo");
        let nested = repo.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir(repo.join(".git")).unwrap();

        assert_eq!(find_project_config_path(&nested), None);

        fs::write(repo.join(PROJECT_CONFIG_FILENAME), "").unwrap();
        assert_eq!(
            find_project_config_path(&nested),
            Some(repo.join(PROJECT_CONFIG_FILENAME))
        );
    }
}
