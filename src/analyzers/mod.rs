//! Code analyzers and the facade that dispatches between them.

pub mod complexity;
pub mod generic;
pub mod halstead;
pub mod issues;
pub mod maintainability;
pub mod metrics;
pub mod python;

use std::time::Instant;

use rayon::prelude::*;

use crate::config::Config;
use crate::core::{AnalysisReport, Language, LanguageAnalyzer, Result};

pub use generic::GenericAnalyzer;
pub use python::PythonAnalyzer;

use issues::DEFAULT_MAX_LINE_LENGTH;

/// One unit of batch input: source text and its declared language.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub code: String,
    pub language: String,
}

impl AnalysisInput {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
        }
    }
}

/// Entry point for analysis.
///
/// Picks a strategy from the declared language and falls back to the
/// generic strategy when structural analysis fails, so `analyze` always
/// returns a complete report.
#[derive(Debug, Clone)]
pub struct CodeAnalyzer {
    python: PythonAnalyzer,
    generic: GenericAnalyzer,
}

impl Default for CodeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeAnalyzer {
    pub fn new() -> Self {
        Self::with_max_line_length(DEFAULT_MAX_LINE_LENGTH)
    }

    pub fn with_config(config: &Config) -> Self {
        Self::with_max_line_length(config.issues.max_line_length)
    }

    fn with_max_line_length(max_line_length: usize) -> Self {
        Self {
            python: PythonAnalyzer::new(max_line_length),
            generic: GenericAnalyzer::new(max_line_length),
        }
    }

    /// Strategy for a declared language name, if one is structural.
    fn strategy_for(&self, language: &str) -> Option<&dyn LanguageAnalyzer> {
        match Language::from_name(language)? {
            Language::Python => Some(&self.python),
            _ => None,
        }
    }

    /// Analyze one unit of source code.
    pub fn analyze(&self, code: &str, language: &str) -> AnalysisReport {
        let Some(strategy) = self.strategy_for(language) else {
            return self.generic.report(code);
        };

        match run_strategy(strategy, code) {
            Ok(report) => report,
            Err(e) => {
                tracing::debug!(
                    analyzer = strategy.name(),
                    error = %e,
                    "structural analysis failed, using generic analyzer"
                );
                self.generic.report(code)
            }
        }
    }

    /// Analyze many units in parallel. Reports come back in input order.
    pub fn analyze_batch(&self, inputs: &[AnalysisInput]) -> Vec<AnalysisReport> {
        let start = Instant::now();

        let reports: Vec<AnalysisReport> = inputs
            .par_iter()
            .map(|input| self.analyze(&input.code, &input.language))
            .collect();

        let issues: usize = reports.iter().map(|r| r.issues_count).sum();
        tracing::info!(
            units = reports.len(),
            issues,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "batch analysis complete"
        );

        reports
    }
}

fn run_strategy(strategy: &dyn LanguageAnalyzer, code: &str) -> Result<AnalysisReport> {
    let metrics = strategy.extract_metrics(code)?;
    let issues = strategy.detect_issues(code);
    let quality = strategy.score(&metrics, &issues);
    Ok(AnalysisReport::new(quality, &metrics, issues))
}
