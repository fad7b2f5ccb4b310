//! gen-typing configuration management.

use crate::text;
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_MIN_PARAGRAPH_LEN: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenTypingConfig {
    /// Minimum paragraph length in characters; shorter lines are dropped
    #[serde(default = "default_min_paragraph_len")]
    pub min_paragraph_len: usize,

    /// Chapter heading pattern (a regular expression). None means the
    /// built-in CJK chapter-numeral pattern.
    #[serde(default)]
    pub heading_pattern: Option<String>,

    /// Directory for generated JSON files. None means next to the input.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_min_paragraph_len() -> usize {
    DEFAULT_MIN_PARAGRAPH_LEN
}

impl Default for GenTypingConfig {
    fn default() -> Self {
        Self {
            min_paragraph_len: default_min_paragraph_len(),
            heading_pattern: None,
            output_dir: None,
        }
    }
}

impl GenTypingConfig {
    /// Get the config file path: ~/.config/cli-programs/gen-typing.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("cli-programs")
            .join("gen-typing.toml"))
    }

    /// Load config from file, returning default if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: GenTypingConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Compile the effective heading pattern.
    pub fn heading_regex(&self) -> Result<Regex> {
        match &self.heading_pattern {
            Some(pattern) => Regex::new(pattern)
                .with_context(|| format!("Invalid heading pattern: {pattern}")),
            None => Ok(text::default_heading_regex().clone()),
        }
    }
}
