//! Configuration management for tellme.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::*;

/// Environment variable holding the API key for the remote model service.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
}

impl Config {
    /// Load configuration.
    /// Resolution order (later fills gaps, never overrides):
    /// 1. Global config file (~/.config/tellme/config.md), when present
    /// 2. `GROQ_API_KEY` from the environment, when the file set no key
    pub fn load() -> Result<Self> {
        let mut config = match global_config_path().filter(|p| p.exists()) {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };

        if config.chat.api_key.is_none() {
            config.chat.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        }

        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        // Extract YAML frontmatter using shared function
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }
}

/// Returns the path to the global config file at ~/.config/tellme/config.md
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/tellme/config.md"))
}

/// Split a markdown document into YAML frontmatter and body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 3..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}
