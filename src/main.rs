//! CLI entry point and command dispatch for tellme.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

#[derive(Parser)]
#[command(name = "tellme")]
#[command(version)]
#[command(about = "Understand how AI works in your favorite tools", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    export GROQ_API_KEY=...     API key for the remote model service\n    tellme explain Netflix      Explain how a product uses AI\n    tellme surprise             Explain a random well-known product"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explain how AI is used in a named product or app
    Explain {
        /// Product, app, or tool name (prompts interactively when omitted)
        name: Option<String>,
    },
    /// Explain a randomly picked well-known product
    Surprise,
    /// Check whether a name denotes a real AI-powered product
    Check {
        /// Product, app, or tool name
        name: String,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Explain { name } => cmd::explain::cmd_explain_entry(name),
        Commands::Surprise => cmd::explain::cmd_surprise(),
        Commands::Check { name } => cmd::explain::cmd_check(&name),
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tellme", &mut io::stdout());
    Ok(())
}
