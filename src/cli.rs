//! CLI interface for the job matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-matcher")]
#[command(about = "Job description and resume compatibility scoring tool")]
#[command(
    long_about = "Score job descriptions against a pre-computed resume analysis using vocabulary matching, experience policies and TF-IDF keyword similarity"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one job description against a resume analysis
    Match {
        /// Path to the resume analysis record (JSON)
        #[arg(short, long)]
        analysis: PathBuf,

        /// Path to the job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Vocabulary matching strategy: substring, word-boundary
        #[arg(short, long)]
        strategy: Option<String>,

        /// Output met/missing requirement details
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the rendered report to a file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Score many job descriptions and rank them best match first
    Batch {
        /// Path to the resume analysis record (JSON)
        #[arg(short, long)]
        analysis: PathBuf,

        /// Job description files to score
        #[arg(required = true)]
        jobs: Vec<PathBuf>,

        /// Vocabulary matching strategy: substring, word-boundary
        #[arg(short, long)]
        strategy: Option<String>,

        /// Drop matches below this overall score
        #[arg(long)]
        min_score: Option<f64>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the full match records as JSON
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Parse and validate matching strategy
pub fn parse_strategy(strategy: &str) -> Result<crate::matching::vocabulary::MatchStrategy, String> {
    match strategy.to_lowercase().as_str() {
        "substring" => Ok(crate::matching::vocabulary::MatchStrategy::Substring),
        "word-boundary" | "word_boundary" => {
            Ok(crate::matching::vocabulary::MatchStrategy::WordBoundary)
        }
        _ => Err(format!(
            "Invalid matching strategy: {}. Supported: substring, word-boundary",
            strategy
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
