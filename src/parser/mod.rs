//! Tree-sitter front end for languages with a structural analyzer.

pub mod queries;

use tree_sitter::{Language as TsLanguage, Node, Parser as TsParser, Tree};

use crate::core::{Error, Language, Result};

/// Parse source with an explicit language.
///
/// A fresh tree-sitter parser is built per call so parsing holds no shared
/// state. Input that tree-sitter can only recover with error or missing
/// nodes is rejected with [`Error::Parse`].
pub fn parse(content: &str, lang: Language) -> Result<ParseResult<'_>> {
    let ts_lang = get_tree_sitter_language(lang)?;

    let mut parser = TsParser::new();
    parser
        .set_language(&ts_lang)
        .map_err(|e| Error::parse(lang.display_name(), e.to_string()))?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| Error::parse(lang.display_name(), "Failed to parse source"))?;

    if let Some(line) = first_error_line(&tree.root_node()) {
        return Err(Error::parse(
            lang.display_name(),
            format!("syntax error at line {line}"),
        ));
    }

    Ok(ParseResult {
        tree,
        source: content,
        language: lang,
    })
}

/// Get tree-sitter language for a Language enum value.
pub fn get_tree_sitter_language(lang: Language) -> Result<TsLanguage> {
    match lang {
        Language::Python => Ok(tree_sitter_python::LANGUAGE.into()),
        other => Err(Error::UnsupportedLanguage {
            language: other.key().to_string(),
        }),
    }
}

/// Result of parsing a unit of source.
#[derive(Debug)]
pub struct ParseResult<'src> {
    /// The parsed syntax tree.
    pub tree: Tree,
    /// Source text the tree was parsed from.
    pub source: &'src str,
    /// Language the source was parsed as.
    pub language: Language,
}

impl ParseResult<'_> {
    /// Get the root node of the tree.
    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Get text for a node.
    pub fn node_text(&self, node: &Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

/// A function extracted from the AST.
#[derive(Debug, Clone)]
pub struct FunctionNode<'tree> {
    /// Function name.
    pub name: String,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// End line (1-indexed).
    pub end_line: usize,
    /// The definition node.
    pub node: Node<'tree>,
}

/// Extract every function definition, nested ones included, in source order.
pub fn extract_functions<'tree>(result: &'tree ParseResult<'_>) -> Vec<FunctionNode<'tree>> {
    let function_types = queries::get_function_node_types(result.language);
    let mut functions = Vec::new();
    let mut cursor = result.root_node().walk();

    loop {
        let node = cursor.node();
        if function_types.contains(&node.kind()) {
            let name = node
                .child_by_field_name("name")
                .map(|n| result.node_text(&n).to_string())
                .unwrap_or_default();
            functions.push(FunctionNode {
                name,
                start_line: node.start_position().row + 1,
                end_line: node.end_position().row + 1,
                node,
            });
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return functions;
            }
        }
    }
}

/// Count lines spanned by standalone string statements (docstrings and
/// other bare string literals used as comments).
pub fn count_docstring_lines(result: &ParseResult<'_>) -> usize {
    let mut total = 0;
    let mut cursor = result.root_node().walk();

    loop {
        let node = cursor.node();
        let mut descend = true;
        if node.kind() == "expression_statement" && node.named_child_count() == 1 {
            if let Some(child) = node.named_child(0) {
                if matches!(child.kind(), "string" | "concatenated_string") {
                    total += child.end_position().row - child.start_position().row + 1;
                    descend = false;
                }
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
                return total;
            }
        }
    }
}

/// 1-indexed line of the first error or missing node, if any.
fn first_error_line(root: &Node<'_>) -> Option<usize> {
    if !root.has_error() {
        return None;
    }
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node.start_position().row + 1);
        }
        // Only subtrees flagged with errors can contain one.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return Some(root.start_position().row + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_python() {
        let content = "def hello():\n    print(\"Hello\")\n";
        let result = parse(content, Language::Python).unwrap();

        assert_eq!(result.language, Language::Python);
        let functions = extract_functions(&result);
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].name, "hello");
        assert_eq!(functions[0].start_line, 1);
        assert_eq!(functions[0].end_line, 2);
    }

    #[test]
    fn test_extract_methods_and_nested_functions() {
        let content = "\
class Greeter:
    def greet(self):
        def inner():
            return 1
        return inner()

def main():
    pass
";
        let result = parse(content, Language::Python).unwrap();
        let names: Vec<_> = extract_functions(&result)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["greet", "inner", "main"]);
    }

    #[test]
    fn test_parse_empty_source() {
        let result = parse("", Language::Python).unwrap();
        assert!(extract_functions(&result).is_empty());
    }

    #[test]
    fn test_malformed_python_is_rejected() {
        let err = parse("def broken(:\n    pass\n", Language::Python).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_non_structural_language_is_unsupported() {
        let err = parse("fn main() {}", Language::Rust).unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage { .. }));
    }

    #[test]
    fn test_count_docstring_lines() {
        let content = "\
\"\"\"Module docstring.\"\"\"

def f():
    \"\"\"
    Multi-line
    docstring.
    \"\"\"
    x = \"not a docstring\"
    return x
";
        let result = parse(content, Language::Python).unwrap();
        assert_eq!(count_docstring_lines(&result), 5);
    }
}
