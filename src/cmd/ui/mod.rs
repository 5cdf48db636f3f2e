//! Centralized UI formatting and color utilities for the tellme CLI.

pub mod render;

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success/affirmative verdicts
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings and guidance
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors and rejections
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (product names, picks)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Color for markdown heading levels
    pub fn markdown_heading(text: &str, level: usize) -> ColoredString {
        match level {
            1 => text.bold(),
            2 => text.bold().cyan(),
            3 => text.bold().blue(),
            _ => text.bold(),
        }
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}
