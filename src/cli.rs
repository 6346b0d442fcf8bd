//! CLI interface for ats-match

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ats-match")]
#[command(about = "Keyword-based resume and job description matching tool")]
#[command(
    long_about = "Score a resume against a job description by comparing extracted keywords, \
                  with matched/missing keyword lists and improvement suggestions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown, text
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the rendered report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Do not persist this analysis as the session
        #[arg(long)]
        no_session: bool,
    },

    /// Inspect or clear the stored session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Export the stored analysis as a report
    Export {
        /// Output format: text, json, markdown
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Save the report to a file instead of printing it
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Show the last stored analysis
    Show {
        /// Output format: console, json, markdown, text
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Remove the stored session
    Clear,
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
        "text" | "txt" => Ok(crate::config::OutputFormat::Text),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, text",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
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
