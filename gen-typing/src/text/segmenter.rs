//! Splits raw novel text into paragraphs and groups them into chapters.

use super::Chapter;
use once_cell::sync::Lazy;
use regex::Regex;

/// Default chapter-heading pattern: the marker 第, a run of CJK numerals,
/// then 回 (e.g. `第十四回`). Matched as a substring, so a full heading line
/// like `第一回 灵根育孕源流出 心性修持大道生` qualifies.
pub const DEFAULT_HEADING_PATTERN: &str = "第[一二三四五六七八九十百]+回";

/// Title given to text that precedes the first detected heading.
pub const DEFAULT_CHAPTER_TITLE: &str = "第一回";

static DEFAULT_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_HEADING_PATTERN).expect("default heading pattern should compile"));

/// Get the compiled default heading pattern.
pub fn default_heading_regex() -> &'static Regex {
    &DEFAULT_HEADING_RE
}

/// Split raw text into trimmed paragraphs longer than `min_len` characters.
///
/// One paragraph per source line; lines at or below the threshold are
/// dropped, so very short lines (including most blank separators) never
/// reach chapter grouping.
pub fn split_paragraphs(text: &str, min_len: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > min_len)
        .map(str::to_string)
        .collect()
}

/// Group paragraphs into chapters bounded by heading lines.
///
/// A paragraph matching `heading_re` starts a new chapter and supplies its
/// title; it is never stored as a paragraph itself. Paragraphs before the
/// first heading collect under [`DEFAULT_CHAPTER_TITLE`]. Chapters that end
/// up with no paragraphs (consecutive headings, or a heading at end of
/// input) are dropped.
pub fn group_chapters(paragraphs: Vec<String>, heading_re: &Regex) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut current = Chapter::new(DEFAULT_CHAPTER_TITLE.to_string());

    for paragraph in paragraphs {
        if heading_re.is_match(&paragraph) {
            if !current.paragraphs.is_empty() {
                chapters.push(current);
            }
            current = Chapter::new(paragraph);
        } else {
            current.paragraphs.push(paragraph);
        }
    }

    if !current.paragraphs.is_empty() {
        chapters.push(current);
    }

    chapters
}
