//! Document structures

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub file_path: Option<String>,
    pub document_type: DocumentType,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Resume,
    JobDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub word_count: usize,
    pub character_count: usize,
}

impl Document {
    pub fn new(content: String, file_path: Option<String>, document_type: DocumentType) -> Self {
        let word_count = content.unicode_words().count();
        let character_count = content.chars().count();

        Self {
            content,
            file_path,
            document_type,
            metadata: DocumentMetadata {
                word_count,
                character_count,
            },
        }
    }

    /// First `max_chars` characters, cut at a word boundary, for previews.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            return self.content.clone();
        }

        let truncated: String = self.content.chars().take(max_chars).collect();
        let cut = truncated.rfind(' ').unwrap_or(truncated.len());
        format!("{}...", &truncated[..cut])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_metadata_counts() {
        let doc = Document::new(
            "Senior Rust engineer, Berlin".to_string(),
            Some("resume.txt".to_string()),
            DocumentType::Resume,
        );

        assert_eq!(doc.metadata.word_count, 4);
        assert_eq!(doc.metadata.character_count, 28);
    }

    #[test]
    fn test_preview_respects_word_boundary() {
        let doc = Document::new(
            "one two three four five".to_string(),
            None,
            DocumentType::JobDescription,
        );

        let preview = doc.preview(9);
        assert_eq!(preview, "one two...");
    }

    #[test]
    fn test_preview_of_short_content_is_verbatim() {
        let doc = Document::new("short".to_string(), None, DocumentType::Resume);
        assert_eq!(doc.preview(100), "short");
    }
}
