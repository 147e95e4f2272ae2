//! Structural strategy for Python.

use crate::core::{CodeMetrics, Issue, Language, LanguageAnalyzer, Result};
use crate::score;

use super::issues::{RuleSet, DEFAULT_MAX_LINE_LENGTH};
use super::metrics;

/// Tree-sitter metrics plus the Python rule set.
#[derive(Debug, Clone)]
pub struct PythonAnalyzer {
    rules: RuleSet,
}

impl Default for PythonAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LENGTH)
    }
}

impl PythonAnalyzer {
    pub fn new(max_line_length: usize) -> Self {
        Self {
            rules: RuleSet::python(max_line_length),
        }
    }
}

impl LanguageAnalyzer for PythonAnalyzer {
    fn name(&self) -> &'static str {
        "python"
    }

    fn extract_metrics(&self, code: &str) -> Result<CodeMetrics> {
        metrics::extract_structural(code, Language::Python)
    }

    fn detect_issues(&self, code: &str) -> Vec<Issue> {
        self.rules.detect(code)
    }

    fn score(&self, metrics: &CodeMetrics, issues: &[Issue]) -> f64 {
        score::quality_score(
            metrics.maintainability_index,
            metrics.complexity,
            issues.len(),
            score::comment_ratio(metrics.comment_lines, metrics.total_lines),
        )
    }
}
