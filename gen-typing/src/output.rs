//! JSON output for typing materials.

use crate::material::TypingMaterial;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write materials to `path` as a pretty-printed JSON array (2-space
/// indentation), overwriting any existing file.
pub fn write_materials(path: &Path, materials: &[TypingMaterial]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, materials).context("Failed to write typing JSON")?;

    Ok(())
}
