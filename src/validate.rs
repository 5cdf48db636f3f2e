//! Yes/no judgment of whether a candidate name denotes a real AI-powered product.

use crate::config::Config;
use crate::prompt;
use crate::provider::{ChatBackend, ChatError, ChatMessage, ChatRequest};

/// Deterministic sampling for the judgment.
pub const TEMPERATURE: f32 = 0.0;

/// The reply only needs to carry "yes" or "no".
pub const MAX_TOKENS: u32 = 3;

/// Ask the remote model whether `tool` names a real product that uses AI.
///
/// One attempt, no retries. Callers that want the original fail-closed
/// behavior treat `Err` the same as `Ok(false)`.
pub fn is_ai_tool(
    backend: &dyn ChatBackend,
    config: &Config,
    tool: &str,
) -> Result<bool, ChatError> {
    let question = prompt::render(prompt::VALIDATE, tool);

    let request = ChatRequest {
        model: config.chat.model.clone(),
        messages: vec![ChatMessage::user(question)],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    };

    let reply = backend.complete(&request)?;
    Ok(reply_means_yes(&reply))
}

/// Boolean judgment from the model's reply text.
///
/// Case-insensitive substring match; an empty or unrecognized reply counts
/// as "no".
pub fn reply_means_yes(reply: &str) -> bool {
    reply.trim().to_lowercase().contains("yes")
}
