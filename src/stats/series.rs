use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::round_to;

use super::ReviewRecord;

/// Default trailing window, in days.
pub const DEFAULT_SERIES_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    pub days: u32,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_SERIES_DAYS,
        }
    }
}

/// Daily aggregates as parallel arrays, one entry per day with reviews.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub dates: Vec<String>,
    pub scores: Vec<f64>,
    pub review_counts: Vec<usize>,
    pub issue_counts: Vec<usize>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[derive(Default)]
struct DayBucket {
    score_sum: f64,
    reviews: usize,
    issues: usize,
}

/// Daily mean scores over `[now - days, now]`, both ends inclusive.
///
/// Days are UTC calendar days in ascending order. Days without reviews are
/// left out rather than zero-filled. A window reaching past the earliest
/// representable instant covers everything up to `now`.
pub fn time_series(records: &[ReviewRecord], days: u32, now: DateTime<Utc>) -> TimeSeries {
    let start = Duration::try_days(i64::from(days))
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();
    for record in records
        .iter()
        .filter(|r| r.created_at >= start && r.created_at <= now)
    {
        let bucket = buckets.entry(record.created_at.date_naive()).or_default();
        bucket.score_sum += record.quality_score;
        bucket.reviews += 1;
        bucket.issues += record.issues_found;
    }

    let mut series = TimeSeries::default();
    for (day, bucket) in buckets {
        series.dates.push(day.format("%Y-%m-%d").to_string());
        series
            .scores
            .push(round_to(bucket.score_sum / bucket.reviews as f64, 2));
        series.review_counts.push(bucket.reviews);
        series.issue_counts.push(bucket.issues);
    }
    series
}
