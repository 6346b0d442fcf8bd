//! Text extraction from supported file formats

use crate::error::Result;
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let content = std::fs::read_to_string(path)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let markdown = std::fs::read_to_string(path)?;
        Ok(Self::to_plain_text(&markdown))
    }
}

impl MarkdownExtractor {
    /// Strip Markdown structure, keeping the text content line by line.
    fn to_plain_text(markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item)
                | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
                _ => {}
            }
        }

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_stripping() {
        let markdown = "# John Doe\n\n**Software Engineer**\n\n- React\n- Node.js\n";
        let text = MarkdownExtractor::to_plain_text(markdown);

        assert!(text.contains("John Doe"));
        assert!(text.contains("Software Engineer"));
        assert!(text.contains("React"));
        assert!(text.contains("Node.js"));
        assert!(!text.contains('#'));
        assert!(!text.contains("**"));
        assert!(!text.contains('-'));
    }

    #[test]
    fn test_inline_code_preserved() {
        let text = MarkdownExtractor::to_plain_text("Built services in `rust` and `python`.");

        assert!(text.contains("rust"));
        assert!(text.contains("python"));
        assert!(!text.contains('`'));
    }
}
