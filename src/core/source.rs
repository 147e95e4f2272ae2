//! Line splitting and line-based counting.

use once_cell::sync::Lazy;
use regex::Regex;

/// Comment markers recognized by the language-agnostic heuristic: `#`, `//`,
/// `/*` and `*` at the start of a line. The `*` arm also matches the middle
/// of block comments, and anything else that happens to start with `*`.
static COMMENT_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:#|//|/\*|\*)").expect("valid regex"));

/// Split source into lines on `\n`.
///
/// Unlike [`str::lines`], an empty input is one empty line and a trailing
/// newline produces a final empty line, so line numbers and totals match
/// what an editor shows. A `\r` before the newline stays on the line.
pub fn source_lines(code: &str) -> std::str::Split<'_, char> {
    code.split('\n')
}

/// Line length in Unicode scalar values.
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Whether the line has whitespace after its last visible character.
pub fn has_trailing_whitespace(line: &str) -> bool {
    line.trim_end().len() != line.len()
}

/// Total, code and comment line counts for a unit of source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
}

impl LineCounts {
    /// Count lines for a language with a single-line comment `prefix`.
    ///
    /// A line is a comment when its stripped content starts with the prefix,
    /// and code when it is non-blank and not a comment.
    pub fn with_comment_prefix(code: &str, prefix: &str) -> Self {
        let mut counts = Self::default();
        for line in source_lines(code) {
            counts.total += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with(prefix) {
                counts.comment += 1;
            } else {
                counts.code += 1;
            }
        }
        counts
    }

    /// Count lines without knowing the language.
    ///
    /// Every non-blank line is code, comment lines included; comments are
    /// the lines matching [`COMMENT_START`].
    pub fn heuristic(code: &str) -> Self {
        let mut counts = Self::default();
        for line in source_lines(code) {
            counts.total += 1;
            if !line.trim().is_empty() {
                counts.code += 1;
            }
            if COMMENT_START.is_match(line) {
                counts.comment += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_one_line() {
        assert_eq!(source_lines("").count(), 1);
        assert_eq!(LineCounts::heuristic("").total, 1);
        assert_eq!(LineCounts::with_comment_prefix("", "#").total, 1);
    }

    #[test]
    fn test_trailing_newline_adds_a_line() {
        assert_eq!(source_lines("a\nb\n").count(), 3);
        assert_eq!(source_lines("a\nb").count(), 2);
    }

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_trailing_whitespace() {
        assert!(has_trailing_whitespace("x = 1 "));
        assert!(has_trailing_whitespace("x = 1\t"));
        assert!(has_trailing_whitespace("x = 1\r"));
        assert!(!has_trailing_whitespace("    x = 1"));
        assert!(!has_trailing_whitespace(""));
    }

    #[test]
    fn test_comment_prefix_counts() {
        let code = "# header\nimport os\n\n    # indented\nx = 1  # trailing\n";
        let counts = LineCounts::with_comment_prefix(code, "#");
        assert_eq!(counts.total, 6);
        assert_eq!(counts.comment, 2);
        assert_eq!(counts.code, 2);
    }

    #[test]
    fn test_heuristic_counts_comments_as_code() {
        let code = "// line\n/* block\n * continued\n */\nint x;\n\n# shell\n";
        let counts = LineCounts::heuristic(code);
        assert_eq!(counts.total, 8);
        assert_eq!(counts.code, 6);
        assert_eq!(counts.comment, 5);
    }

    #[test]
    fn test_heuristic_overcounts_star_lines() {
        let counts = LineCounts::heuristic("*ptr = 1;");
        assert_eq!(counts.comment, 1);
    }
}
