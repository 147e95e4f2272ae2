//! Metric extraction: structural when a parser exists, line heuristics
//! otherwise.

use crate::core::source::LineCounts;
use crate::core::{CodeMetrics, Error, Language, Result};
use crate::parser;

use super::maintainability::{compute_maintainability_index, MaintainabilityInputs};
use super::{complexity, halstead};

/// Extract metrics for a declared language.
///
/// Languages with a structural analyzer go through tree-sitter and fail on
/// malformed input; every other language gets [`extract_generic`].
pub fn extract(code: &str, language: &str) -> Result<CodeMetrics> {
    match Language::from_name(language) {
        Some(lang) if lang.has_structural_analyzer() => extract_structural(code, lang),
        _ => Ok(extract_generic(code)),
    }
}

/// Structural metrics from the syntax tree.
pub fn extract_structural(code: &str, lang: Language) -> Result<CodeMetrics> {
    let prefix = comment_prefix(lang).ok_or_else(|| Error::UnsupportedLanguage {
        language: lang.key().to_string(),
    })?;
    let parsed = parser::parse(code, lang)?;

    let unit = complexity::analyze_parse_result(&parsed);
    let halstead = halstead::analyze_parse_result(&parsed);
    let lines = LineCounts::with_comment_prefix(code, prefix);
    let docstring_lines = parser::count_docstring_lines(&parsed);

    let inputs = MaintainabilityInputs::from_lines(
        halstead.volume,
        unit.total_cyclomatic as f64,
        lines.code,
        lines.comment,
        docstring_lines,
    );

    tracing::trace!(
        functions = unit.functions.len(),
        volume = halstead.volume,
        docstring_lines,
        "structural metrics extracted"
    );

    Ok(CodeMetrics {
        complexity: unit.avg_cyclomatic,
        maintainability_index: compute_maintainability_index(&inputs),
        halstead_difficulty: halstead.difficulty,
        total_lines: lines.total,
        code_lines: lines.code,
        comment_lines: lines.comment,
    })
}

/// Line-only metrics. Structural fields are 0.
pub fn extract_generic(code: &str) -> CodeMetrics {
    let lines = LineCounts::heuristic(code);
    CodeMetrics {
        complexity: 0.0,
        maintainability_index: 0.0,
        halstead_difficulty: 0.0,
        total_lines: lines.total,
        code_lines: lines.code,
        comment_lines: lines.comment,
    }
}

/// Single-line comment marker for languages with a structural analyzer.
fn comment_prefix(lang: Language) -> Option<&'static str> {
    match lang {
        Language::Python => Some("#"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_metrics() {
        let code = "// header\nint main() {\n\n  return 0;\n}\n";
        let metrics = extract(code, "c").unwrap();
        assert_eq!(metrics.total_lines, 6);
        assert_eq!(metrics.code_lines, 4);
        assert_eq!(metrics.comment_lines, 1);
        assert_eq!(metrics.complexity, 0.0);
        assert_eq!(metrics.maintainability_index, 0.0);
        assert_eq!(metrics.halstead_difficulty, 0.0);
    }

    #[test]
    fn test_structural_metrics() {
        let code = "\
# Helpers for arithmetic.
def add(a, b):
    return a + b


def clamp(x, lo, hi):
    if x < lo:
        return lo
    if x > hi:
        return hi
    return x
";
        let metrics = extract(code, "python").unwrap();
        assert_eq!(metrics.total_lines, 12);
        assert_eq!(metrics.comment_lines, 1);
        assert_eq!(metrics.code_lines, 8);
        assert!((metrics.complexity - 2.0).abs() < f64::EPSILON);
        assert!(metrics.maintainability_index > 0.0);
        assert!(metrics.maintainability_index <= 100.0);
        assert!(metrics.halstead_difficulty > 0.0);
    }

    #[test]
    fn test_structural_empty_source() {
        let metrics = extract("", "python").unwrap();
        assert_eq!(metrics.total_lines, 1);
        assert_eq!(metrics.code_lines, 0);
        assert_eq!(metrics.complexity, 0.0);
        assert_eq!(metrics.maintainability_index, 100.0);
        assert_eq!(metrics.halstead_difficulty, 0.0);
    }

    #[test]
    fn test_structural_rejects_malformed_source() {
        let err = extract("def broken(:\n    pass\n", "python").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_star_continuation_is_code_for_python() {
        let code = "total = (a\n         * b)\n";
        let python = extract(code, "python").unwrap();
        let generic = extract_generic(code);
        assert_eq!(python.comment_lines, 0);
        assert_eq!(python.code_lines, 2);
        assert_eq!(generic.comment_lines, 1);
        assert_eq!(generic.code_lines, 2);
    }
}
