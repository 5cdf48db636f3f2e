//! Command handlers for explain, surprise, and check.

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use tellme::catalog;
use tellme::config::Config;
use tellme::explain;
use tellme::provider::{ChatBackend, ChatError};
use tellme::validate;

use super::ui;

/// Entry for `tellme explain`. Prompts for a name on a TTY when none was
/// given; bails otherwise.
pub fn cmd_explain_entry(name: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => {
            if atty::is(atty::Stream::Stdin) {
                dialoguer::Input::new()
                    .with_prompt("Type a tool or app name (e.g., Netflix, Uber, ChatGPT)")
                    .allow_empty(true)
                    .interact_text()?
            } else {
                anyhow::bail!("No name given.\n\nUsage:\n  tellme explain <NAME>");
            }
        }
    };

    let (config, backend) = super::load_backend()?;
    cmd_explain(&name, &backend, &config)
}

/// Validate a candidate name, then fetch and render its explanation.
///
/// Whitespace-only input short-circuits to a warning without touching the
/// remote service. A failed validation call never validates a name, but is
/// reported as a failure rather than as a rejection.
pub fn cmd_explain(input: &str, backend: &dyn ChatBackend, config: &Config) -> Result<()> {
    let name = input.trim();
    if name.is_empty() {
        println!("{}", ui::colors::warning("Please type a tool or app name."));
        return Ok(());
    }

    let pb = spinner("Checking if it's a real AI-powered tool...");
    let verdict = validate::is_ai_tool(backend, config, name);
    pb.finish_and_clear();

    match verdict {
        Ok(true) => fetch_and_render(name, backend, config),
        Ok(false) => {
            println!(
                "{}",
                ui::colors::error(
                    "Hmm... that doesn't seem like a real AI-powered product or app. \
                     Try something like Netflix, Grammarly, or Spotify."
                )
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", ui::colors::error(&failure_message(&err)));
            Ok(())
        }
    }
}

/// Pick a random well-known product and explain it directly, skipping
/// validation.
pub fn cmd_surprise() -> Result<()> {
    let (config, backend) = super::load_backend()?;
    let pick = catalog::surprise();

    println!(
        "{} {}",
        "Picking something fun:".cyan(),
        ui::colors::identifier(pick)
    );

    fetch_and_render(pick, &backend, &config)
}

/// Run only the validator and print the verdict.
pub fn cmd_check(input: &str) -> Result<()> {
    let name = input.trim();
    if name.is_empty() {
        println!("{}", ui::colors::warning("Please type a tool or app name."));
        return Ok(());
    }

    let (config, backend) = super::load_backend()?;

    let pb = spinner("Checking if it's a real AI-powered tool...");
    let verdict = validate::is_ai_tool(&backend, &config, name);
    pb.finish_and_clear();

    match verdict {
        Ok(true) => {
            println!(
                "{} {} looks like a real AI-powered product.",
                ui::colors::success("✓"),
                name.bold()
            );
            Ok(())
        }
        Ok(false) => {
            println!(
                "{} {} doesn't look like an AI-powered product.",
                ui::colors::error("✗"),
                name.bold()
            );
            Ok(())
        }
        Err(err) => Err(anyhow::Error::new(err)),
    }
}

/// Fetch the explanation and render it under its heading.
fn fetch_and_render(name: &str, backend: &dyn ChatBackend, config: &Config) -> Result<()> {
    let pb = spinner("Explaining clearly...");
    let result = explain::explain(backend, config, name);
    pb.finish_and_clear();

    match result {
        Ok(text) => {
            println!("{}", ui::format::separator(40).dimmed());
            println!("{}", explain::heading(name).bold());
            println!();
            ui::render::render_markdown(&text);
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", ui::colors::error(&failure_message(&err)));
            Ok(())
        }
    }
}

/// User-facing line for a failed remote call. Rendered apart from content,
/// never as part of an explanation.
fn failure_message(err: &ChatError) -> String {
    format!("Error: {}", err)
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use tellme::provider::ChatRequest;

    /// Scripted backend that records every request it receives.
    struct MockBackend {
        replies: RefCell<VecDeque<Result<String, ChatError>>>,
        requests: RefCell<Vec<ChatRequest>>,
    }

    impl MockBackend {
        fn scripted(replies: Vec<Result<String, ChatError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl ChatBackend for MockBackend {
        fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
            self.requests.borrow_mut().push(request.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ChatError::Transport("script exhausted".to_string())))
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    #[test]
    fn test_whitespace_input_short_circuits() {
        let backend = MockBackend::scripted(vec![]);
        let config = Config::default();

        cmd_explain("   \t  ", &backend, &config).unwrap();

        assert_eq!(backend.request_count(), 0);
    }

    #[test]
    fn test_validated_name_reaches_explainer() {
        let backend = MockBackend::scripted(vec![
            Ok("Yes".to_string()),
            Ok("Netflix picks shows for you. 🎬".to_string()),
        ]);
        let config = Config::default();

        cmd_explain("Netflix", &backend, &config).unwrap();

        let requests = backend.requests.borrow();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].messages[0].content.contains("Netflix"));
        assert_eq!(requests[0].temperature, validate::TEMPERATURE);
        assert!(requests[1].messages.iter().any(|m| m.content.contains("Netflix")));
        assert_eq!(requests[1].temperature, explain::TEMPERATURE);
    }

    #[test]
    fn test_rejected_name_skips_explainer() {
        let backend = MockBackend::scripted(vec![Ok("No.".to_string())]);
        let config = Config::default();

        cmd_explain("my shoelaces", &backend, &config).unwrap();

        assert_eq!(backend.request_count(), 1);
    }

    #[test]
    fn test_validation_failure_is_fail_closed() {
        let backend =
            MockBackend::scripted(vec![Err(ChatError::Transport("refused".to_string()))]);
        let config = Config::default();

        cmd_explain("Netflix", &backend, &config).unwrap();

        // The explainer is never consulted after a failed validation call.
        assert_eq!(backend.request_count(), 1);
    }

    #[test]
    fn test_surprise_pick_bypasses_validator() {
        let backend = MockBackend::scripted(vec![Ok("It recommends music.".to_string())]);
        let config = Config::default();

        fetch_and_render(catalog::surprise(), &backend, &config).unwrap();

        let requests = backend.requests.borrow();
        assert_eq!(requests.len(), 1);
        // Explainer-shaped request, not a validator probe.
        assert_eq!(requests[0].temperature, explain::TEMPERATURE);
        assert_eq!(requests[0].max_tokens, explain::MAX_TOKENS);
    }

    #[test]
    fn test_failure_message_contains_error() {
        let message = failure_message(&ChatError::Transport("connection reset".to_string()));
        assert!(message.contains("Error"));
        assert!(message.contains("connection reset"));
    }
}
