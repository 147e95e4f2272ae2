//! Analysis report value types.

use serde::{Deserialize, Serialize};

/// Issue severity level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.pad(name)
    }
}

/// A single line-local finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Line number (1-indexed).
    pub line: usize,
    /// Severity.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl Issue {
    pub fn new(line: usize, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            line,
            severity,
            message: message.into(),
        }
    }
}

/// Metrics extracted from one unit of source, before scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeMetrics {
    /// Mean cyclomatic complexity over detected functions.
    pub complexity: f64,
    /// Maintainability index on a 0-100 scale.
    pub maintainability_index: f64,
    /// Halstead difficulty of the whole unit.
    pub halstead_difficulty: f64,
    /// All lines, blank lines included.
    pub total_lines: usize,
    /// Lines carrying code.
    pub code_lines: usize,
    /// Comment lines.
    pub comment_lines: usize,
}

/// Quality report for one `(code, language)` input.
///
/// Every field is always populated; metrics a path cannot compute are 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub quality_score: f64,
    pub complexity: f64,
    pub maintainability_index: f64,
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub issues_count: usize,
    pub issues: Vec<Issue>,
    pub halstead_difficulty: f64,
}

impl AnalysisReport {
    /// Assemble a report. Real-valued fields are rounded to 2 decimals and
    /// `issues_count` is taken from `issues`.
    pub fn new(quality_score: f64, metrics: &CodeMetrics, issues: Vec<Issue>) -> Self {
        Self {
            quality_score: round_to(quality_score, 2),
            complexity: round_to(metrics.complexity, 2),
            maintainability_index: round_to(metrics.maintainability_index, 2),
            total_lines: metrics.total_lines,
            code_lines: metrics.code_lines,
            comment_lines: metrics.comment_lines,
            issues_count: issues.len(),
            issues,
            halstead_difficulty: round_to(metrics.halstead_difficulty, 2),
        }
    }

    /// Count issues of one severity.
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}

/// Round to `decimals` places, exact ties going to the even neighbour.
pub fn round_to(val: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (val * factor).round_ties_even() / factor
}
