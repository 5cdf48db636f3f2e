//! # Bundled Prompt Management
//!
//! The prompts sent to the remote model are embedded at compile time using
//! `include_str!`. Each template is a markdown file with YAML frontmatter;
//! only the body is sent, after placeholder substitution.

/// Explanation prompt - how AI is used in the named product
pub const EXPLAIN: &str = include_str!("../prompts/explain.md");

/// System message paired with the explanation prompt
pub const SYSTEM: &str = include_str!("../prompts/system.md");

/// Validation question - yes/no judgment for a candidate name
pub const VALIDATE: &str = include_str!("../prompts/validate.md");

/// Render a bundled template for a candidate name.
pub fn render(template: &str, tool: &str) -> String {
    substitute(extract_body(template), tool)
}

fn extract_body(content: &str) -> &str {
    let content = content.trim();

    if !content.starts_with("---") {
        return content;
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("---") {
        rest[end + 3..].trim_start()
    } else {
        content
    }
}

fn substitute(template: &str, tool: &str) -> String {
    template.replace("{{tool}}", tool)
}
