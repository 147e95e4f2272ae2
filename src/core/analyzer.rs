//! Per-language analysis strategy.

use super::{CodeMetrics, Issue, Result};

/// Capabilities one language family brings to the analysis pipeline.
///
/// The facade picks an implementation by language lookup and falls back to
/// the generic one for anything unknown, or when `extract_metrics` fails.
pub trait LanguageAnalyzer: Send + Sync {
    /// Unique identifier for this strategy.
    fn name(&self) -> &'static str;

    /// Extract line statistics and, where available, structural metrics.
    fn extract_metrics(&self, code: &str) -> Result<CodeMetrics>;

    /// Scan the source for rule-based issues.
    fn detect_issues(&self, code: &str) -> Vec<Issue>;

    /// Turn metrics and issues into a quality score in `[0, 100]`.
    fn score(&self, metrics: &CodeMetrics, issues: &[Issue]) -> f64;
}
