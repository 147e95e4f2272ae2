//! CLI implementation using clap.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config;
use crate::core::Language;

/// Critique - static code-quality scoring and review statistics.
#[derive(Parser)]
#[command(name = "critique")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze source files, or stdin when no files are given
    #[command(alias = "a")]
    Analyze(AnalyzeArgs),

    /// Summarize a set of persisted reviews
    Summary(SummaryArgs),

    /// Daily mean quality score over a trailing window
    #[command(alias = "timeseries")]
    Series(SeriesArgs),

    /// Histogram of review complexity
    #[command(alias = "dist")]
    Distribution(ReviewsArgs),

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Files to analyze
    pub files: Vec<PathBuf>,

    /// Language of every input, overriding extension detection
    #[arg(short, long)]
    pub language: Option<String>,
}

#[derive(Args)]
pub struct ReviewsArgs {
    /// JSON file holding an array of review records
    #[arg(short, long)]
    pub reviews: PathBuf,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub reviews: ReviewsArgs,

    /// Portfolio project count reported alongside the summary
    #[arg(long, default_value = "0")]
    pub portfolio_projects: usize,
}

#[derive(Args)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub reviews: ReviewsArgs,

    /// Trailing window in days (defaults to the configured window)
    #[arg(long)]
    pub days: Option<u32>,

    /// Evaluation instant, RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_instant)]
    pub now: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    #[value(alias = "md")]
    Markdown,
    #[value(alias = "txt")]
    Text,
}

impl From<OutputFormat> for config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Self::Json,
            OutputFormat::Markdown => Self::Markdown,
            OutputFormat::Text => Self::Text,
        }
    }
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{s}': {e}"))
}

/// Language name for a file when none was given on the command line.
///
/// Known extensions map to their language key; anything else uses the raw
/// extension, or `text` when there is none. Unknown names take the generic
/// analysis path.
pub fn infer_language(path: &Path) -> String {
    if let Some(lang) = Language::detect(path) {
        return lang.key().to_string();
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "text".to_string())
}
