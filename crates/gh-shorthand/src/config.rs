//! Shorthand configuration
//!
//! Configuration file: ~/.gh-shorthand.yml (or $GH_SHORTHAND_CONFIG)
//!
//! ```yaml
//! default_repo: zerowidth/gh-shorthand
//! repos:
//!   df: zerowidth/dotfiles
//! users:
//!   zw: zerowidth
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shorthand_core::Paths;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::options::ParserOptions;
use crate::parser::Parser;

/// Problems with an otherwise well-formed config file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("default_repo {0:?} is not of the form owner/name")]
    InvalidDefaultRepo(String),

    #[error("repo shorthand {key:?} maps to {value:?}, which is not of the form owner/name")]
    InvalidRepo { key: String, value: String },

    #[error("user shorthand {0:?} maps to an empty user")]
    EmptyUser(String),
}

/// Shorthand tables and defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Repository used when the input names none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_repo: Option<String>,

    /// Repository shorthand, e.g. `df: zerowidth/dotfiles`
    #[serde(default)]
    pub repos: HashMap<String, String>,

    /// User shorthand, e.g. `zw: zerowidth`
    #[serde(default)]
    pub users: HashMap<String, String>,
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let paths = Paths::new();
        Self::load_from(&paths.config)
    }

    /// Load configuration from a specific path. A missing file is an empty
    /// configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to load config from {:?}", path))?;

        debug!(
            repos = config.repos.len(),
            users = config.users.len(),
            default_repo = ?config.default_repo,
            "loaded config from {:?}",
            path
        );
        Ok(config)
    }

    /// Parse and validate YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).context("Invalid config YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }

    /// Check that every repository is `owner/name` and every user is set
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(repo) = &self.default_repo {
            if !is_repo_name(repo) {
                return Err(ConfigError::InvalidDefaultRepo(repo.clone()));
            }
        }

        for (key, value) in &self.repos {
            if !is_repo_name(value) {
                return Err(ConfigError::InvalidRepo {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }

        for (key, value) in &self.users {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyUser(key.clone()));
            }
        }

        Ok(())
    }

    /// Build a parser over this configuration's tables
    pub fn parser(&self, options: ParserOptions) -> Parser<'_> {
        Parser::new(
            &self.repos,
            &self.users,
            self.default_repo.as_deref(),
            options,
        )
    }
}

fn is_repo_name(repo: &str) -> bool {
    matches!(
        repo.split_once('/'),
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
    )
}
