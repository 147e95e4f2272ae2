//! Node-kind tables driving the structural metrics.

use crate::core::Language;

/// Decision point node types for cyclomatic complexity.
///
/// Boolean operators are handled separately since only `and`/`or` count.
pub fn get_decision_node_types(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Python => &[
            "if_statement",
            "elif_clause",
            "for_statement",
            "while_statement",
            "except_clause",
            "with_statement",
            "conditional_expression",
            // Comprehension clauses: `[x for x in xs if x]` is two paths.
            "for_in_clause",
            "if_clause",
            "case_clause",
            "assert_statement",
        ],
        _ => &[],
    }
}

/// Node types that open a new measurement scope.
///
/// Decision points inside these belong to the nested definition, not to the
/// enclosing function.
pub fn get_scope_node_types(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Python => &["function_definition", "class_definition", "lambda"],
        _ => &[],
    }
}

/// Function definition node types.
pub fn get_function_node_types(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Python => &["function_definition"],
        _ => &[],
    }
}

/// Boolean operator node type and the operator tokens that add a path.
pub fn get_boolean_operator(lang: Language) -> Option<(&'static str, &'static [&'static str])> {
    match lang {
        Language::Python => Some(("boolean_operator", &["and", "or"])),
        _ => None,
    }
}

/// Node types counted as a single Halstead operand, children included.
pub fn get_operand_node_types(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Python => &[
            "identifier",
            "integer",
            "float",
            "string",
            "concatenated_string",
            "true",
            "false",
            "none",
            "ellipsis",
        ],
        _ => &[],
    }
}

/// Node types never counted as Halstead tokens.
pub fn get_ignored_node_types(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Python => &["comment", "line_continuation"],
        _ => &[],
    }
}
