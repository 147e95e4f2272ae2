//! Heuristic strategy for languages without a structural analyzer.

use crate::core::{AnalysisReport, CodeMetrics, Issue, LanguageAnalyzer, Result};
use crate::score;

use super::issues::{RuleSet, DEFAULT_MAX_LINE_LENGTH};
use super::metrics;

/// Line-based analysis that works for any text.
#[derive(Debug, Clone)]
pub struct GenericAnalyzer {
    rules: RuleSet,
}

impl Default for GenericAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LENGTH)
    }
}

impl GenericAnalyzer {
    pub fn new(max_line_length: usize) -> Self {
        Self {
            rules: RuleSet::generic(max_line_length),
        }
    }

    /// Full report. Cannot fail, which makes this the fallback of last resort.
    pub fn report(&self, code: &str) -> AnalysisReport {
        let metrics = metrics::extract_generic(code);
        let issues = self.rules.detect(code);
        let quality = self.score(&metrics, &issues);
        AnalysisReport::new(quality, &metrics, issues)
    }
}

impl LanguageAnalyzer for GenericAnalyzer {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn extract_metrics(&self, code: &str) -> Result<CodeMetrics> {
        Ok(metrics::extract_generic(code))
    }

    fn detect_issues(&self, code: &str) -> Vec<Issue> {
        self.rules.detect(code)
    }

    /// `max(0, 100 - 5 * issues)`; there is no maintainability or
    /// complexity signal to start from.
    fn score(&self, _metrics: &CodeMetrics, issues: &[Issue]) -> f64 {
        score::generic_score(issues.len())
    }
}
