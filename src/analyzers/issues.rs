//! Rule-based issue detection.
//!
//! Every rule is a line-local check: a substring test, a length limit or a
//! trailing-whitespace test. There is no parsing here, so a rule can fire on
//! text inside a string literal or comment, and an obfuscated call such as
//! `getattr(builtins, "ev" + "al")` goes unnoticed.

use crate::core::source::{char_len, has_trailing_whitespace, source_lines};
use crate::core::{Issue, Language, Severity};

/// Default maximum line length.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 120;

/// What a rule looks for on a single line.
#[derive(Debug, Clone)]
pub enum Check {
    /// Line contains `needle`, unless it also contains `unless`.
    Contains {
        needle: &'static str,
        unless: Option<&'static str>,
    },
    /// Line is longer than the configured maximum.
    TooLong,
    /// Line ends in whitespace.
    TrailingWhitespace,
}

impl Check {
    fn matches(&self, line: &str, max_line_length: usize) -> bool {
        match self {
            Check::Contains { needle, unless } => {
                line.contains(*needle) && !unless.is_some_and(|u| line.contains(u))
            }
            Check::TooLong => char_len(line) > max_line_length,
            Check::TrailingWhitespace => has_trailing_whitespace(line),
        }
    }
}

/// A single detection rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub check: Check,
    pub severity: Severity,
    pub message: String,
}

impl Rule {
    fn new(check: Check, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            check,
            severity,
            message: message.into(),
        }
    }
}

/// How a rule set walks the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOrder {
    /// One pass per rule; issues grouped by rule, each group in line order.
    RuleMajor,
    /// One pass over lines; on each line, rules fire in declaration order.
    LineMajor,
}

/// An ordered list of rules plus the order they are applied in.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    order: ScanOrder,
    max_line_length: usize,
}

impl RuleSet {
    /// Rules applied to any language without a dedicated set.
    pub fn generic(max_line_length: usize) -> Self {
        Self {
            rules: vec![
                Rule::new(
                    Check::TooLong,
                    Severity::Low,
                    format!("Line too long (>{max_line_length} characters)"),
                ),
                Rule::new(
                    Check::TrailingWhitespace,
                    Severity::Low,
                    "Trailing whitespace",
                ),
            ],
            order: ScanOrder::RuleMajor,
            max_line_length,
        }
    }

    /// Python rules: dynamic evaluation, wildcard imports, long lines and
    /// catch-all exception handlers.
    pub fn python(max_line_length: usize) -> Self {
        Self {
            rules: vec![
                Rule::new(
                    Check::Contains {
                        needle: "eval(",
                        unless: None,
                    },
                    Severity::High,
                    "Use of eval() is dangerous",
                ),
                Rule::new(
                    Check::Contains {
                        needle: "exec(",
                        unless: None,
                    },
                    Severity::High,
                    "Use of exec() is dangerous",
                ),
                Rule::new(
                    Check::Contains {
                        needle: "import *",
                        unless: None,
                    },
                    Severity::Medium,
                    "Avoid wildcard imports",
                ),
                Rule::new(
                    Check::TooLong,
                    Severity::Low,
                    "Line too long (PEP 8 recommends max 79-120 chars)",
                ),
                Rule::new(
                    Check::Contains {
                        needle: "except:",
                        unless: Some("except Exception:"),
                    },
                    Severity::Medium,
                    "Bare except clause catches all exceptions",
                ),
            ],
            order: ScanOrder::LineMajor,
            max_line_length,
        }
    }

    /// Pick the rule set for a declared language.
    pub fn for_language(language: &str, max_line_length: usize) -> Self {
        match Language::from_name(language) {
            Some(Language::Python) => Self::python(max_line_length),
            _ => Self::generic(max_line_length),
        }
    }

    /// The rules, in firing order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule over `code`.
    pub fn detect(&self, code: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        match self.order {
            ScanOrder::RuleMajor => {
                for rule in &self.rules {
                    for (idx, line) in source_lines(code).enumerate() {
                        self.apply(rule, idx + 1, line, &mut issues);
                    }
                }
            }
            ScanOrder::LineMajor => {
                for (idx, line) in source_lines(code).enumerate() {
                    for rule in &self.rules {
                        self.apply(rule, idx + 1, line, &mut issues);
                    }
                }
            }
        }
        issues
    }

    fn apply(&self, rule: &Rule, line_num: usize, line: &str, issues: &mut Vec<Issue>) {
        if rule.check.matches(line, self.max_line_length) {
            issues.push(Issue::new(line_num, rule.severity, rule.message.clone()));
        }
    }
}

/// Detect issues with the default line limit.
pub fn detect(code: &str, language: &str) -> Vec<Issue> {
    RuleSet::for_language(language, DEFAULT_MAX_LINE_LENGTH).detect(code)
}
