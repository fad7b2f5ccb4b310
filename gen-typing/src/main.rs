//! gen-typing - Convert plain-text novels into typing practice material

mod config;
mod material;
mod novel;
mod output;
mod text;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::GenTypingConfig;
use regex::Regex;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gen-typing")]
#[command(about = "Convert plain-text novels into typing practice material", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the novel text file (UTF-8, one paragraph per line)
    novel_file: Option<PathBuf>,

    /// Output file path (default: <novel-name>-typing.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Minimum paragraph length in characters (overrides config)
    #[arg(long)]
    min_length: Option<usize>,

    /// Chapter range to emit (e.g., "0-10")
    #[arg(long)]
    chapters: Option<String>,

    /// Enable debug output
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set minimum paragraph length
    SetMinLength {
        /// Length in characters
        value: usize,
    },
    /// Set the chapter heading pattern (a regular expression)
    SetHeadingPattern {
        /// Pattern to match heading lines
        pattern: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.debug);

    if let Some(Commands::Config { action }) = &args.command {
        return handle_config_command(action);
    }

    let novel_path = args.novel_file.clone().ok_or_else(|| {
        anyhow::anyhow!("Novel file path is required. Run 'gen-typing --help' for usage.")
    })?;

    if !novel_path.exists() {
        anyhow::bail!("Novel file not found: {}", novel_path.display());
    }

    let config = GenTypingConfig::load().context("Failed to load configuration")?;

    let min_length = args.min_length.unwrap_or(config.min_paragraph_len);
    let heading_re = config
        .heading_regex()
        .context("Invalid heading pattern in configuration")?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&novel_path, config.output_dir.as_deref()));

    eprintln!("Reading novel: {}", novel_path.display());
    let raw = novel::load_novel(&novel_path)?;

    let chapters = segment_novel(&raw, min_length, &heading_re);
    let paragraph_count: usize = chapters.iter().map(|c| c.paragraphs.len()).sum();
    eprintln!("Chapters: {}, Paragraphs: {}", chapters.len(), paragraph_count);

    let (start, end) = parse_chapter_range(&args.chapters, chapters.len())?;
    log::debug!("Emitting chapters {start}..{end} of {}", chapters.len());

    let materials = material::collect_materials(&chapters[start..end]);

    output::write_materials(&output_path, &materials)?;

    println!(
        "Generated {} typing snippets -> {}",
        materials.len(),
        output_path.display()
    );

    Ok(())
}

/// Initialize env_logger; `--debug` raises the default filter to Debug.
fn init_logger(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Run the in-memory pipeline: paragraph filter, then chapter grouping.
fn segment_novel(raw: &str, min_length: usize, heading_re: &Regex) -> Vec<text::Chapter> {
    let paragraphs = text::split_paragraphs(raw, min_length);
    log::debug!(
        "{} paragraphs above {} chars",
        paragraphs.len(),
        min_length
    );
    text::group_chapters(paragraphs, heading_re)
}

/// Default output path: `<stem>-typing.json`, next to the input unless an
/// output directory is configured.
fn default_output_path(novel_path: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = novel_path.file_stem().unwrap_or_default();
    let file_name = format!("{}-typing.json", stem.to_string_lossy());
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => novel_path.with_file_name(file_name),
    }
}

/// Parse chapter range string like "0-10" or "5". Values clamp to the number
/// of detected chapters.
fn parse_chapter_range(range: &Option<String>, total: usize) -> Result<(usize, usize)> {
    match range {
        None => Ok((0, total)),
        Some(r) => {
            if r.contains('-') {
                let parts: Vec<&str> = r.split('-').collect();
                if parts.len() != 2 {
                    anyhow::bail!("Invalid chapter range format. Use 'start-end' (e.g., '0-10')");
                }
                let start: usize = parts[0].parse().context("Invalid start chapter")?;
                let end: usize = parts[1].parse().context("Invalid end chapter")?;
                if start > end {
                    anyhow::bail!("Invalid chapter range: start must not exceed end");
                }
                Ok((start.min(total), (end + 1).min(total)))
            } else {
                let chapter: usize = r.parse().context("Invalid chapter number")?;
                Ok((chapter.min(total), (chapter + 1).min(total)))
            }
        }
    }
}

fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = GenTypingConfig::load()?;
            println!("Configuration file: {:?}", GenTypingConfig::config_path()?);
            println!();
            println!("min_paragraph_len = {}", config.min_paragraph_len);
            match &config.heading_pattern {
                Some(pattern) => println!("heading_pattern = \"{}\"", pattern),
                None => println!(
                    "heading_pattern = (default: {})",
                    text::DEFAULT_HEADING_PATTERN
                ),
            }
            match &config.output_dir {
                Some(dir) => println!("output_dir = \"{}\"", dir.display()),
                None => println!("output_dir = (next to input)"),
            }
        }
        ConfigAction::SetMinLength { value } => {
            let mut config = GenTypingConfig::load()?;
            config.min_paragraph_len = *value;
            config.save()?;
            println!(
                "Minimum paragraph length set to: {}",
                config.min_paragraph_len
            );
        }
        ConfigAction::SetHeadingPattern { pattern } => {
            Regex::new(pattern).with_context(|| format!("Invalid heading pattern: {pattern}"))?;
            let mut config = GenTypingConfig::load()?;
            config.heading_pattern = Some(pattern.clone());
            config.save()?;
            println!("Heading pattern set to: {}", pattern);
        }
    }
    Ok(())
}
