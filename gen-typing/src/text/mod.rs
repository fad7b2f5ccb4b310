//! Text segmentation: paragraph filtering and chapter grouping.

mod segmenter;

pub use segmenter::{
    default_heading_regex, group_chapters, split_paragraphs, DEFAULT_CHAPTER_TITLE,
    DEFAULT_HEADING_PATTERN,
};

/// A titled run of consecutive paragraphs.
#[derive(Debug, Clone)]
pub struct Chapter {
    /// Chapter title (the heading line, or the default for leading text)
    pub title: String,
    /// Paragraphs in source order
    pub paragraphs: Vec<String>,
}

impl Chapter {
    /// Create an empty chapter with the given title.
    pub fn new(title: String) -> Self {
        Self {
            title,
            paragraphs: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_creation() {
        let chapter = Chapter::new("第二回".to_string());
        assert_eq!(chapter.title, "第二回");
        assert!(chapter.paragraphs.is_empty());
    }
}
