//! Typing material records.

use crate::text::Chapter;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One typing-practice snippet: a paragraph tagged with its chapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingMaterial {
    /// Display identifier; random, never used for lookups
    pub id: String,
    /// Title of the owning chapter
    pub chapter: String,
    /// The paragraph text
    pub text: String,
    /// Character count of `text`
    pub length: usize,
}

impl TypingMaterial {
    /// Create a record for one paragraph of a chapter.
    pub fn new(chapter: &str, text: String) -> Self {
        let length = text.chars().count();
        Self {
            id: Uuid::new_v4().to_string(),
            chapter: chapter.to_string(),
            text,
            length,
        }
    }
}

/// Flatten chapters into typing materials.
///
/// Order is preserved: chapters as encountered, paragraphs in source order
/// within each chapter.
pub fn collect_materials(chapters: &[Chapter]) -> Vec<TypingMaterial> {
    chapters
        .iter()
        .flat_map(|chapter| {
            chapter
                .paragraphs
                .iter()
                .map(|paragraph| TypingMaterial::new(&chapter.title, paragraph.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(title: &str, paragraphs: &[&str]) -> Chapter {
        let mut chapter = Chapter::new(title.to_string());
        chapter.paragraphs = paragraphs.iter().map(|p| p.to_string()).collect();
        chapter
    }

    #[test]
    fn test_length_counts_characters() {
        let material = TypingMaterial::new("第一回", "你好，世界".to_string());
        assert_eq!(material.length, 5);
        assert_eq!(material.text, "你好，世界");
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = TypingMaterial::new("第一回", "text".to_string());
        let b = TypingMaterial::new("第一回", "text".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_collect_preserves_order() {
        let chapters = vec![
            chapter("第一回", &["a1", "a2"]),
            chapter("第二回", &["b1"]),
        ];
        let materials = collect_materials(&chapters);
        assert_eq!(materials.len(), 3);
        assert_eq!(materials[0].chapter, "第一回");
        assert_eq!(materials[0].text, "a1");
        assert_eq!(materials[1].text, "a2");
        assert_eq!(materials[2].chapter, "第二回");
        assert_eq!(materials[2].text, "b1");
    }

    #[test]
    fn test_collect_empty_chapters() {
        let chapters = vec![chapter("第一回", &[])];
        assert!(collect_materials(&chapters).is_empty());
    }

    #[test]
    fn test_collect_is_structurally_idempotent() {
        let chapters = vec![chapter("第三回", &["p1", "p2"])];
        let first = collect_materials(&chapters);
        let second = collect_materials(&chapters);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.chapter, b.chapter);
            assert_eq!(a.text, b.text);
            assert_eq!(a.length, b.length);
        }
    }
}
