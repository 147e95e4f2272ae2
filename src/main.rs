//! Critique CLI - code quality scores and review statistics.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use critique::analyzers::{AnalysisInput, CodeAnalyzer};
use critique::cli::{
    infer_language, AnalyzeArgs, Cli, Command, ReviewsArgs, SeriesArgs, SummaryArgs,
};
use critique::config::{Config, OutputFormat};
use critique::output::{render, FileReport, FileReports, Render};
use critique::stats::{self, ReviewRecord};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_default(".").context("failed to load config")?,
    };
    let format = cli.format.map(Into::into).unwrap_or(config.output.format);

    match cli.command {
        Command::Analyze(args) => analyze(&args, &config, format),
        Command::Summary(args) => summary(&args, &config, format),
        Command::Series(args) => series(&args, &config, format),
        Command::Distribution(args) => {
            let records = load_reviews(&args)?;
            emit(format, &stats::complexity_distribution(&records))
        }
        Command::Config => {
            let mut out = io::stdout().lock();
            out.write_all(config.to_toml()?.as_bytes())?;
            Ok(())
        }
    }
}

fn analyze(args: &AnalyzeArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let mut labels = Vec::with_capacity(args.files.len().max(1));
    let mut inputs = Vec::with_capacity(args.files.len().max(1));

    if args.files.is_empty() {
        let mut code = String::new();
        io::stdin()
            .read_to_string(&mut code)
            .context("failed to read stdin")?;
        let language = args.language.clone().unwrap_or_else(|| "text".to_string());
        labels.push("<stdin>".to_string());
        inputs.push(AnalysisInput::new(code, language));
    } else {
        for path in &args.files {
            let code = read_source(path)?;
            let language = args
                .language
                .clone()
                .unwrap_or_else(|| infer_language(path));
            labels.push(path.display().to_string());
            inputs.push(AnalysisInput::new(code, language));
        }
    }

    let analyzer = CodeAnalyzer::with_config(config);
    let reports = analyzer.analyze_batch(&inputs);

    let files = labels
        .into_iter()
        .zip(inputs)
        .zip(reports)
        .map(|((path, input), report)| FileReport {
            path,
            language: input.language,
            report,
        })
        .collect();
    emit(format, &FileReports(files))
}

fn summary(args: &SummaryArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let records = load_reviews(&args.reviews)?;
    let summary = stats::user_summary_with(&records, args.portfolio_projects, &config.trend);
    emit(format, &summary)
}

fn series(args: &SeriesArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let records = load_reviews(&args.reviews)?;
    let days = args.days.unwrap_or(config.series.days);
    let now = args.now.unwrap_or_else(Utc::now);
    emit(format, &stats::time_series(&records, days, now))
}

fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn load_reviews(args: &ReviewsArgs) -> Result<Vec<ReviewRecord>> {
    let path = &args.reviews;
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read reviews {}", path.display()))?;
    let records: Vec<ReviewRecord> = serde_json::from_str(&text)
        .with_context(|| format!("invalid reviews file {}", path.display()))?;
    tracing::debug!(count = records.len(), path = %path.display(), "loaded reviews");
    Ok(records)
}

fn emit<T: Render>(format: OutputFormat, data: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    render(format, data, &mut out)?;
    out.flush()?;
    Ok(())
}
