//! # Tellme - plain-language AI explanations
//!
//! Tellme is a terminal tool that explains how artificial intelligence is
//! used in everyday products, in language anyone can follow.
//!
//! ## Overview
//!
//! Given a product or app name, tellme first asks a remote chat-completion
//! service whether the name plausibly denotes a real AI-powered product, and
//! only then requests a short, friendly explanation of how AI is used in it.
//! Both steps are single-turn, blocking calls against the same endpoint.
//!
//! ## Core Concepts
//!
//! - **Validation**: a yes/no judgment of a candidate name, fail-closed
//! - **Explanation**: trimmed prose markdown for a validated name
//! - **Backend**: the pluggable chat-completion transport behind both steps
//!
//! ## Modules
//!
//! - [`validate`] - yes/no judgment of candidate names
//! - [`explain`] - explanation retrieval and display heading
//! - [`provider`] - chat-completion backend, wire types, error taxonomy
//! - [`prompt`] - bundled prompt templates and placeholder substitution
//! - [`catalog`] - the fixed list of well-known products for surprise picks
//! - [`config`] - configuration loading and defaults
//!
//! ## Example
//!
//! ```no_run
//! use tellme::config::Config;
//! use tellme::provider::GroqBackend;
//! use tellme::{explain, validate};
//!
//! let config = Config::load().expect("Failed to load config");
//! let backend = GroqBackend::from_config(&config.chat).expect("No API key configured");
//!
//! if validate::is_ai_tool(&backend, &config, "Netflix").unwrap_or(false) {
//!     let text = explain::explain(&backend, &config, "Netflix").expect("Request failed");
//!     println!("{}", text);
//! }
//! ```

// Re-export all public modules
pub mod catalog;
pub mod config;
pub mod explain;
pub mod prompt;
pub mod provider;
pub mod validate;
