//! Critique - static code-quality analysis and review statistics.
//!
//! Critique scores a unit of source code on a 0-100 scale from its
//! maintainability index, cyclomatic complexity, Halstead difficulty,
//! comment density and rule-based issues. Python gets structural analysis
//! through tree-sitter; every other language is scored from line
//! heuristics. Persisted reports can then be aggregated into per-subject
//! summaries, daily time series and complexity histograms.
//!
//! # Example
//!
//! ```
//! use critique::analyzers::CodeAnalyzer;
//!
//! let analyzer = CodeAnalyzer::new();
//! let report = analyzer.analyze("def run(expr):\n    return eval(expr)\n", "python");
//! assert_eq!(report.issues_count, 1);
//! assert!((0.0..=100.0).contains(&report.quality_score));
//! ```

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod parser;
pub mod score;
pub mod stats;

pub use analyzers::CodeAnalyzer;
pub use crate::core::{AnalysisReport, Issue, Severity};
