use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::round_to;

use super::{language_distribution, ReviewRecord};

/// Direction of recent quality scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    InsufficientData,
    Improving,
    Stable,
    Declining,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::InsufficientData => "insufficient_data",
            Trend::Improving => "improving",
            Trend::Stable => "stable",
            Trend::Declining => "declining",
            Trend::NotAvailable => "N/A",
        };
        f.write_str(s)
    }
}

/// Trend window settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Reports per comparison window; the trend needs two full windows.
    pub window: usize,
    /// Mean score change needed to call a trend improving or declining.
    pub threshold: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: 5,
            threshold: 5.0,
        }
    }
}

/// Summary of every review for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMetricsSummary {
    pub total_reviews: usize,
    pub avg_quality_score: f64,
    pub total_issues: usize,
    pub languages: BTreeMap<String, usize>,
    pub portfolio_projects: usize,
    pub improvement_trend: Trend,
    pub most_used_language: Option<String>,
}

impl UserMetricsSummary {
    fn empty(portfolio_projects: usize) -> Self {
        Self {
            total_reviews: 0,
            avg_quality_score: 0.0,
            total_issues: 0,
            languages: BTreeMap::new(),
            portfolio_projects,
            improvement_trend: Trend::NotAvailable,
            most_used_language: None,
        }
    }
}

/// Summarize records with the default trend settings.
pub fn user_summary(records: &[ReviewRecord], portfolio_projects: usize) -> UserMetricsSummary {
    user_summary_with(records, portfolio_projects, &TrendConfig::default())
}

/// Summarize records. `portfolio_projects` is counted elsewhere and passed
/// through unchanged.
pub fn user_summary_with(
    records: &[ReviewRecord],
    portfolio_projects: usize,
    trend: &TrendConfig,
) -> UserMetricsSummary {
    if records.is_empty() {
        return UserMetricsSummary::empty(portfolio_projects);
    }

    let total_score: f64 = records.iter().map(|r| r.quality_score).sum();
    let languages = language_distribution(records);
    let most_used_language = most_used(&languages);

    UserMetricsSummary {
        total_reviews: records.len(),
        avg_quality_score: round_to(total_score / records.len() as f64, 2),
        total_issues: records.iter().map(|r| r.issues_found).sum(),
        languages,
        portfolio_projects,
        improvement_trend: improvement_trend(records, trend),
        most_used_language,
    }
}

/// Highest count wins; on a tie the lexicographically smallest name wins.
fn most_used(languages: &BTreeMap<String, usize>) -> Option<String> {
    let mut best: Option<(&String, usize)> = None;
    for (lang, &count) in languages {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((lang, count));
        }
    }
    best.map(|(lang, _)| lang.clone())
}

fn improvement_trend(records: &[ReviewRecord], config: &TrendConfig) -> Trend {
    let window = config.window.max(1);
    let span = match window.checked_mul(2) {
        Some(span) if span <= records.len() => span,
        _ => return Trend::InsufficientData,
    };

    let mut sorted: Vec<&ReviewRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.created_at);

    let n = sorted.len();
    let recent = mean_score(&sorted[n - window..]);
    let previous = mean_score(&sorted[n - span..n - window]);
    let diff = recent - previous;

    if diff > config.threshold {
        Trend::Improving
    } else if diff < -config.threshold {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

fn mean_score(records: &[&ReviewRecord]) -> f64 {
    records.iter().map(|r| r.quality_score).sum::<f64>() / records.len() as f64
}
