use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ReviewRecord;

/// Four-bucket histogram over `complexity_score`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub very_high: usize,
}

impl ComplexityDistribution {
    fn add(&mut self, complexity: f64) {
        match complexity {
            c if c < 5.0 => self.low += 1,
            c if c < 10.0 => self.medium += 1,
            c if c < 15.0 => self.high += 1,
            _ => self.very_high += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.very_high
    }
}

/// Bucket records by complexity: `<5`, `[5,10)`, `[10,15)`, `>=15`.
pub fn complexity_distribution(records: &[ReviewRecord]) -> ComplexityDistribution {
    let mut dist = ComplexityDistribution::default();
    for record in records {
        dist.add(record.complexity_score);
    }
    dist
}

/// Review count per declared language.
pub fn language_distribution(records: &[ReviewRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.language.clone()).or_insert(0) += 1;
    }
    counts
}
