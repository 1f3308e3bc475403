//! Markdown rendering and plain-text extraction.
//!
//! Two views of a document body feed the rest of the pipeline:
//!
//! - **HTML** — the rendered body stored on every [`Page`](crate::types::Page)
//!   for downstream templates.
//! - **Plain text** — the body with all markup stripped and whitespace
//!   normalized, used for word counting (reading time) and excerpt
//!   derivation. Both consumers see the same text, so an excerpt is always
//!   a literal prefix of what the word counter saw.

use pulldown_cmark::{Event, Parser, TagEnd, html as md_html};

/// Render markdown to an HTML fragment.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    md_html::push_html(&mut html, parser);
    html
}

/// Strip markup from markdown, returning whitespace-normalized plain text.
///
/// Walks the parse events and keeps only text and inline-code content;
/// raw HTML blocks are dropped entirely. Block and line boundaries become
/// single spaces — inline boundaries (emphasis, links) must not, or
/// punctuation would detach from its word. The result is one line with
/// words separated by exactly one space.
pub fn plain_text(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::CodeBlock | TagEnd::Item,
            ) => out.push(' '),
            _ => {}
        }
    }
    let words: Vec<&str> = out.split_whitespace().collect();
    words.join(" ")
}
