//! Explanation retrieval for validated names.

use crate::config::Config;
use crate::prompt;
use crate::provider::{ChatBackend, ChatError, ChatMessage, ChatRequest};

/// Moderate sampling keeps the prose varied between runs.
pub const TEMPERATURE: f32 = 0.7;

/// Upper bound on reply length for one explanation.
pub const MAX_TOKENS: u32 = 300;

/// Fetch a short, plain-language explanation of how AI is used in `tool`.
///
/// The reply is returned trimmed of surrounding whitespace, otherwise
/// unmodified; rendering is the caller's concern.
pub fn explain(backend: &dyn ChatBackend, config: &Config, tool: &str) -> Result<String, ChatError> {
    let request = ChatRequest {
        model: config.chat.model.clone(),
        messages: vec![
            ChatMessage::system(prompt::render(prompt::SYSTEM, tool)),
            ChatMessage::user(prompt::render(prompt::EXPLAIN, tool)),
        ],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    };

    let reply = backend.complete(&request)?;
    Ok(reply.trim().to_string())
}

/// Display heading shown above a rendered explanation.
pub fn heading(tool: &str) -> String {
    format!("How AI helps in {}", tool)
}
