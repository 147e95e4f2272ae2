//! Cyclomatic complexity per function.
//!
//! Counts the number of linearly independent paths through each function,
//! after McCabe (1976) "A Complexity Measure", IEEE TSE SE-2(4): one path for
//! the function itself plus one per decision point. The node tables live in
//! [`crate::parser::queries`].

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::core::Language;
use crate::parser::queries::{get_boolean_operator, get_decision_node_types, get_scope_node_types};
use crate::parser::{self, ParseResult};

/// Per-function complexity result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionComplexity {
    /// Function name.
    pub name: String,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// End line (1-indexed).
    pub end_line: usize,
    /// Cyclomatic complexity.
    pub cyclomatic: u32,
}

/// Complexity of every function in a unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitComplexity {
    /// Per-function results in source order.
    pub functions: Vec<FunctionComplexity>,
    /// Sum of cyclomatic complexity over functions.
    pub total_cyclomatic: u32,
    /// Mean cyclomatic complexity, 0 when there are no functions.
    pub avg_cyclomatic: f64,
}

/// Measure every function found in a parse result.
pub fn analyze_parse_result(result: &ParseResult<'_>) -> UnitComplexity {
    let mut unit = UnitComplexity::default();

    for func in parser::extract_functions(result) {
        let cyclomatic = function_cyclomatic(&func.node, result);
        unit.total_cyclomatic += cyclomatic;
        unit.functions.push(FunctionComplexity {
            name: func.name,
            start_line: func.start_line,
            end_line: func.end_line,
            cyclomatic,
        });
    }

    if !unit.functions.is_empty() {
        unit.avg_cyclomatic = unit.total_cyclomatic as f64 / unit.functions.len() as f64;
    }

    unit
}

/// Cyclomatic complexity of one function definition node.
pub fn function_cyclomatic(node: &Node<'_>, result: &ParseResult<'_>) -> u32 {
    let body = node.child_by_field_name("body").unwrap_or(*node);
    1 + count_decision_points(&body, result.source.as_bytes(), result.language)
}

/// Count decision points below `node`, stopping at nested scopes.
/// Uses iterative cursor traversal for performance.
fn count_decision_points(node: &Node<'_>, source: &[u8], lang: Language) -> u32 {
    let decision_types = get_decision_node_types(lang);
    let scope_types = get_scope_node_types(lang);
    let boolean_operator = get_boolean_operator(lang);

    let mut count = 0;
    let mut cursor = node.walk();
    let start_depth = cursor.depth();

    loop {
        let current = cursor.node();
        let kind = current.kind();
        let nested_scope = cursor.depth() > start_depth && scope_types.contains(&kind);

        if !nested_scope {
            if decision_types.contains(&kind) {
                count += 1;
            }

            if let Some((operator_kind, operators)) = boolean_operator {
                if kind == operator_kind {
                    if let Some(op) = get_operator(&current, source) {
                        if operators.contains(&op) {
                            count += 1;
                        }
                    }
                }
            }
        }

        if !nested_scope && cursor.goto_first_child() {
            continue;
        }

        loop {
            if cursor.depth() <= start_depth {
                return count;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return count;
            }
        }
    }
}

/// Get the operator token of a boolean expression.
fn get_operator<'a>(node: &Node<'a>, source: &'a [u8]) -> Option<&'a str> {
    if let Some(op) = node.child_by_field_name("operator") {
        return op.utf8_text(source).ok();
    }
    let mut cursor = node.walk();
    let op = node
        .children(&mut cursor)
        .find(|child| !child.is_named())
        .map(|child| child.kind());
    op
}
