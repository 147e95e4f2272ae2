//! Halstead software-science metrics over a whole unit.
//!
//! Operators are the anonymous leaf tokens of the syntax tree (keywords,
//! punctuation and operator symbols). Operands are identifiers and literals;
//! a string literal counts once no matter how many pieces tree-sitter splits
//! it into.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::parser::queries::{get_ignored_node_types, get_operand_node_types};
use crate::parser::ParseResult;

/// Halstead counts and derived measures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HalsteadMetrics {
    /// n1: distinct operators.
    pub distinct_operators: usize,
    /// n2: distinct operands.
    pub distinct_operands: usize,
    /// N1: total operators.
    pub total_operators: usize,
    /// N2: total operands.
    pub total_operands: usize,
    /// V = N * log2(n).
    pub volume: f64,
    /// D = (n1 / 2) * (N2 / n2).
    pub difficulty: f64,
}

impl HalsteadMetrics {
    /// Derive volume and difficulty from raw counts.
    pub fn from_counts(n1: usize, n2: usize, total1: usize, total2: usize) -> Self {
        let vocabulary = n1 + n2;
        let length = total1 + total2;

        let volume = if vocabulary > 0 {
            length as f64 * (vocabulary as f64).log2()
        } else {
            0.0
        };
        let difficulty = if n2 > 0 {
            (n1 as f64 / 2.0) * (total2 as f64 / n2 as f64)
        } else {
            0.0
        };

        Self {
            distinct_operators: n1,
            distinct_operands: n2,
            total_operators: total1,
            total_operands: total2,
            volume,
            difficulty,
        }
    }
}

/// Collect Halstead metrics for the whole parse result.
pub fn analyze_parse_result(result: &ParseResult<'_>) -> HalsteadMetrics {
    let operand_types = get_operand_node_types(result.language);
    let ignored_types = get_ignored_node_types(result.language);

    let mut operators: HashSet<&str> = HashSet::new();
    let mut operands: HashSet<&str> = HashSet::new();
    let mut total_operators = 0;
    let mut total_operands = 0;

    let mut cursor = result.root_node().walk();
    loop {
        let node = cursor.node();
        let kind = node.kind();
        let mut descend = true;

        if ignored_types.contains(&kind) {
            descend = false;
        } else if operand_types.contains(&kind) {
            let text = result.node_text(&node);
            if !text.trim().is_empty() {
                operands.insert(text);
                total_operands += 1;
            }
            descend = false;
        } else if !node.is_named() && node.child_count() == 0 {
            let text = result.node_text(&node);
            if !text.trim().is_empty() {
                operators.insert(text);
                total_operators += 1;
            }
        }

        if descend && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return HalsteadMetrics::from_counts(
                    operators.len(),
                    operands.len(),
                    total_operators,
                    total_operands,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;
    use crate::parser::parse;

    #[test]
    fn test_from_counts() {
        let metrics = HalsteadMetrics::from_counts(4, 5, 10, 20);
        assert!((metrics.volume - 30.0 * 9f64.log2()).abs() < 1e-9);
        assert!((metrics.difficulty - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_counts_without_operands() {
        let metrics = HalsteadMetrics::from_counts(0, 0, 0, 0);
        assert_eq!(metrics.volume, 0.0);
        assert_eq!(metrics.difficulty, 0.0);
    }

    #[test]
    fn test_simple_function_counts() {
        let result = parse("def add(a, b):\n    return a + b\n", Language::Python).unwrap();
        let metrics = analyze_parse_result(&result);

        // Operands: add, a, b, a, b
        assert_eq!(metrics.distinct_operands, 3);
        assert_eq!(metrics.total_operands, 5);
        // Operators: def ( , ) : return +
        assert_eq!(metrics.distinct_operators, 7);
        assert_eq!(metrics.total_operators, 7);
        assert!((metrics.difficulty - (7.0 / 2.0) * (5.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_strings_are_single_operands() {
        let result = parse("x = \"a {b} c\"\n", Language::Python).unwrap();
        let metrics = analyze_parse_result(&result);
        assert_eq!(metrics.total_operands, 2);
        assert_eq!(metrics.total_operators, 1);
    }

    #[test]
    fn test_comments_are_ignored() {
        let result = parse("# only a comment\n", Language::Python).unwrap();
        let metrics = analyze_parse_result(&result);
        assert_eq!(metrics.total_operators, 0);
        assert_eq!(metrics.total_operands, 0);
        assert_eq!(metrics.volume, 0.0);
    }

    #[test]
    fn test_empty_source() {
        let result = parse("", Language::Python).unwrap();
        assert_eq!(analyze_parse_result(&result), HalsteadMetrics::default());
    }
}
