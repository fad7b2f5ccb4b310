//! Novel file loading.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a novel file fully into memory as UTF-8 text.
///
/// Fails if the file is missing, unreadable, or not valid UTF-8. Strips a
/// leading byte-order mark and normalizes CRLF line endings so the segmenter
/// only ever sees `\n`.
pub fn load_novel(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read novel file: {}", path.display()))?;
    Ok(normalize_text(&raw))
}

fn normalize_text(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.replace("\r\n", "\n")
}
