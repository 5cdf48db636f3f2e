//! Command module structure for the tellme CLI

use anyhow::{Context, Result};

use tellme::config::Config;
use tellme::provider::GroqBackend;

pub mod explain;
pub mod ui;

/// Load configuration and construct the chat backend.
///
/// Fails with setup guidance when no API key is configured anywhere.
pub fn load_backend() -> Result<(Config, GroqBackend)> {
    let config = Config::load()?;
    let backend = GroqBackend::from_config(&config.chat)
        .context("Set GROQ_API_KEY or add api_key to ~/.config/tellme/config.md")?;
    Ok((config, backend))
}
