//! Terminal markdown rendering for model-generated explanations.

use colored::Colorize;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use super::colors;

/// Renders markdown text to the terminal with ANSI formatting.
///
/// Explanations are short prose: headings, paragraphs, emphasis, lists,
/// inline code, and blockquotes are enough. Anything else falls back to
/// plain text.
pub fn render_markdown(markdown: &str) {
    let parser = Parser::new(markdown);
    let mut renderer = TerminalRenderer::new();

    for event in parser {
        renderer.handle_event(event);
    }

    renderer.flush();
}

struct TerminalRenderer {
    buffer: String,
    in_italic: bool,
    in_bold: bool,
    heading_level: usize,
    list_depth: usize,
    ordered_list_depth: Vec<usize>,
}

impl TerminalRenderer {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            in_italic: false,
            in_bold: false,
            heading_level: 0,
            list_depth: 0,
            ordered_list_depth: Vec::new(),
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.handle_start_tag(tag),
            Event::End(tag_end) => self.handle_end_tag(tag_end),
            Event::Text(text) => self.buffer.push_str(&text),
            Event::Code(text) => {
                self.buffer.push('`');
                self.buffer.push_str(&text);
                self.buffer.push('`');
            }
            Event::SoftBreak | Event::HardBreak => {
                self.buffer.push('\n');
            }
            Event::Rule => {
                self.flush();
                println!("{}", super::format::separator(40).dimmed());
            }
            _ => {}
        }
    }

    fn handle_start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                self.heading_level = match level {
                    pulldown_cmark::HeadingLevel::H1 => 1,
                    pulldown_cmark::HeadingLevel::H2 => 2,
                    pulldown_cmark::HeadingLevel::H3 => 3,
                    pulldown_cmark::HeadingLevel::H4 => 4,
                    pulldown_cmark::HeadingLevel::H5 => 5,
                    pulldown_cmark::HeadingLevel::H6 => 6,
                };
            }
            Tag::Emphasis => {
                self.in_italic = true;
            }
            Tag::Strong => {
                self.in_bold = true;
            }
            Tag::List(ordered) => {
                self.flush();
                self.list_depth += 1;
                self.ordered_list_depth.push(ordered.unwrap_or(0) as usize);
            }
            Tag::Item => {
                self.flush();
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                if let Some(last) = self.ordered_list_depth.last_mut() {
                    if *last > 0 {
                        print!("{}{}. ", indent, last);
                        *last += 1;
                    } else {
                        print!("{}• ", indent);
                    }
                }
            }
            Tag::BlockQuote => {
                self.flush();
                print!("{}", "> ".dimmed());
            }
            _ => {}
        }
    }

    fn handle_end_tag(&mut self, tag_end: TagEnd) {
        match tag_end {
            TagEnd::Heading(_) => {
                let formatted = colors::markdown_heading(&self.buffer, self.heading_level);
                println!("{}", formatted);
                self.buffer.clear();
                self.heading_level = 0;
                println!();
            }
            TagEnd::Paragraph => {
                if !self.buffer.is_empty() {
                    println!("{}", self.styled_buffer());
                    self.buffer.clear();
                }
                println!();
            }
            TagEnd::Emphasis => {
                self.in_italic = false;
            }
            TagEnd::Strong => {
                self.in_bold = false;
            }
            TagEnd::List(_) => {
                if self.list_depth > 0 {
                    self.list_depth -= 1;
                    self.ordered_list_depth.pop();
                }
                println!();
            }
            TagEnd::Item => {
                if !self.buffer.is_empty() {
                    println!("{}", self.buffer);
                    self.buffer.clear();
                }
            }
            _ => {}
        }
    }

    fn styled_buffer(&self) -> String {
        if self.in_bold && self.in_italic {
            self.buffer.bold().italic().to_string()
        } else if self.in_bold {
            self.buffer.bold().to_string()
        } else if self.in_italic {
            self.buffer.italic().to_string()
        } else {
            self.buffer.clone()
        }
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            print!("{}", self.styled_buffer());
            self.buffer.clear();
        }
    }
}
