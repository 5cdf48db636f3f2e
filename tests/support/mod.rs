//! Shared test helpers: a scripted chat backend and config builders.

use std::cell::RefCell;
use std::collections::VecDeque;

use tellme::config::Config;
use tellme::provider::{ChatBackend, ChatError, ChatRequest};

/// Scripted stand-in for the remote service. Replies are consumed in order
/// and every request is recorded for later assertions.
pub struct ScriptedBackend {
    replies: RefCell<VecDeque<Result<String, ChatError>>>,
    requests: RefCell<Vec<ChatRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            replies: RefCell::new(VecDeque::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Backend that answers each call with the next reply in `replies`.
    pub fn replying(replies: &[&str]) -> Self {
        let backend = Self::new();
        for reply in replies {
            backend.push_reply(reply);
        }
        backend
    }

    /// Backend whose next call fails with `error`.
    pub fn failing(error: ChatError) -> Self {
        let backend = Self::new();
        backend.push_failure(error);
        backend
    }

    pub fn push_reply(&self, reply: &str) {
        self.replies
            .borrow_mut()
            .push_back(Ok(reply.to_string()));
    }

    pub fn push_failure(&self, error: ChatError) {
        self.replies.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl ChatBackend for ScriptedBackend {
    fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        self.requests.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Transport("script exhausted".to_string())))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Default configuration for tests; never touches the environment.
pub fn test_config() -> Config {
    Config::default()
}
