//! Core types and traits for code analysis.

mod analyzer;
mod error;
mod language;
mod report;
pub mod source;

pub use analyzer::LanguageAnalyzer;
pub use error::{Error, Result};
pub use language::Language;
pub use report::{round_to, AnalysisReport, CodeMetrics, Issue, Severity};
