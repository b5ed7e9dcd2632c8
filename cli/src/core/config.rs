//! # rulebot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates rulebot's configuration. Nothing in
//! the configuration changes how the responder matches input; it only covers
//! how a session presents itself (bot name, banner, summary) and whether reply
//! selection is seeded.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config <PATH>` (`~` is expanded); when
//!    given, no other file is read
//! 2. Project-specific `.rulebot.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/rulebot/config.toml`)
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [bot]
//! name = "Simple ChatBot"
//!
//! [session]
//! show_welcome = true
//! show_summary = true
//! seed = 42
//! ```
//!
//! ```rust,no_run
//! use rulebot::core::config;
//!
//! let cfg = config::load_config(None).unwrap();
//! println!("Chatting as {}", cfg.bot.name);
//! ```
//!
use crate::core::error::{Result, RulebotError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// How the bot introduces itself.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Name shown in the welcome banner.
    #[serde(default = "default_bot_name")]
    pub name: String,
}

/// Presentation of the interactive session.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Print the welcome banner when a chat starts.
    #[serde(default = "default_true")]
    pub show_welcome: bool,
    /// Print the conversation summary when a chat ends.
    #[serde(default = "default_true")]
    pub show_summary: bool,
    /// Fixed seed for reply selection. Unset means a fresh seed every run.
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_welcome: true,
            show_summary: true,
            seed: None,
        }
    }
}

fn default_bot_name() -> String {
    "Simple ChatBot".to_string()
}
fn default_true() -> bool {
    true
}

const PROJECT_CONFIG_FILENAME: &str = ".rulebot.toml";

/// Loads the effective configuration.
///
/// `explicit` is the value of `--config`; when present it replaces the
/// project/user lookup entirely and must exist.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let config = match explicit {
        Some(raw) => {
            let path = PathBuf::from(shellexpand::tilde(raw).into_owned());
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Rulebot", "rulebot") {
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

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.rulebot.toml) found in current directory or ancestors.");
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

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = Config::default();
    merged.bot.name = if project_cfg.bot.name != defaults.bot.name {
        project_cfg.bot.name
    } else {
        user.bot.name
    };
    merged.session.show_welcome = if project_cfg.session.show_welcome != defaults.session.show_welcome
    {
        project_cfg.session.show_welcome
    } else {
        user.session.show_welcome
    };
    merged.session.show_summary = if project_cfg.session.show_summary != defaults.session.show_summary
    {
        project_cfg.session.show_summary
    } else {
        user.session.show_summary
    };
    merged.session.seed = project_cfg.session.seed.or(user.session.seed);
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    if config.bot.name.trim().is_empty() {
        return Err(anyhow!(RulebotError::Config(
            "Bot name cannot be empty.".to_string()
        )));
    }
    Ok(())
}
