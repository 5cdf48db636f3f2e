//! Default values and configuration structs with default implementations.

use serde::Deserialize;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(
    default_endpoint,
    String,
    "https://api.groq.com/openai/v1".to_string()
);
default_fn!(default_model, String, "llama3-8b-8192".to_string());

/// Settings for the remote chat-completion service.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the OpenAI-compatible service (default: Groq)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// API key; normally resolved from the environment instead
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
        }
    }
}
