//! Aggregate statistics over persisted review reports.
//!
//! All queries are pure functions over caller-supplied records. Nothing here
//! reads a clock: the time series takes its evaluation instant as an
//! argument.

mod distribution;
mod series;
mod summary;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::AnalysisReport;

pub use distribution::{complexity_distribution, language_distribution, ComplexityDistribution};
pub use series::{time_series, SeriesConfig, TimeSeries, DEFAULT_SERIES_DAYS};
pub use summary::{user_summary, user_summary_with, Trend, TrendConfig, UserMetricsSummary};

/// A report as persisted for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub language: String,
    pub quality_score: f64,
    pub complexity_score: f64,
    pub issues_found: usize,
    pub created_at: DateTime<Utc>,
}

impl ReviewRecord {
    /// Snapshot an analysis report at `created_at`.
    pub fn from_report(
        language: impl Into<String>,
        report: &AnalysisReport,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            language: language.into(),
            quality_score: report.quality_score,
            complexity_score: report.complexity,
            issues_found: report.issues_count,
            created_at,
        }
    }
}
