//! Chat-completion backend for the remote model service.
//!
//! Every remote interaction is a single blocking `POST {endpoint}/chat/completions`
//! with one attempt per call: no retries, no configured timeout.

use serde::{Deserialize, Serialize};
use std::fmt;
use ureq::Agent;

use crate::config::ChatConfig;

/// A single chat message on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: String,
}

/// Failure modes of a single chat-completion call.
///
/// Callers can tell a broken network from a rejecting service from a
/// mangled body; none of these are ever folded into the reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// No API key was resolved from config or environment
    MissingKey,
    /// Connection-level failure before any response arrived
    Transport(String),
    /// Non-2xx response from the service
    Api { status: u16, message: String },
    /// Response body did not have the expected shape
    MalformedReply(String),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::MissingKey => write!(
                f,
                "no API key configured (set {} or add api_key to the config file)",
                crate::config::API_KEY_ENV
            ),
            ChatError::Transport(msg) => write!(f, "network failure: {}", msg),
            ChatError::Api { status, message } => {
                write!(f, "service returned HTTP {}: {}", status, message)
            }
            ChatError::MalformedReply(msg) => write!(f, "unexpected reply shape: {}", msg),
        }
    }
}

impl std::error::Error for ChatError {}

/// Trait for chat-completion backends
pub trait ChatBackend {
    /// Send one single-turn request and return the reply text.
    fn complete(&self, request: &ChatRequest) -> Result<String, ChatError>;

    #[allow(dead_code)]
    fn name(&self) -> &'static str;
}

/// Production backend for the Groq OpenAI-compatible API.
#[derive(Debug)]
pub struct GroqBackend {
    endpoint: String,
    api_key: String,
}

impl GroqBackend {
    /// Build a backend from resolved configuration. Fails fast when no
    /// API key made it into the config.
    pub fn from_config(config: &ChatConfig) -> Result<Self, ChatError> {
        let api_key = config.api_key.clone().ok_or(ChatError::MissingKey)?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key,
        })
    }
}

impl ChatBackend for GroqBackend {
    fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let agent = Agent::new();
        let response = agent
            .post(&url)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(request)
            .map_err(|e| match e {
                ureq::Error::Status(status, response) => ChatError::Api {
                    status,
                    message: response.into_string().unwrap_or_default(),
                },
                ureq::Error::Transport(transport) => ChatError::Transport(transport.to_string()),
            })?;

        let body = response
            .into_string()
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        parse_reply(&body)
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}

/// Extract `choices[0].message.content` from a raw response body.
pub fn parse_reply(body: &str) -> Result<String, ChatError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| ChatError::MalformedReply(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| ChatError::MalformedReply("response has no choices".to_string()))
}
