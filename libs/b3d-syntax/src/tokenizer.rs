//! # Line Tokenizer
//!
//! Splits one raw line into a command keyword and its argument list.
//!
//! ## Steps
//!
//! 1. Drop everything from the first `;`, trim, skip empty lines.
//! 2. Split at the dialect's separator (space for B3D, comma for CSV).
//! 3. If the command still contains the other dialect's separator, split
//!    again there and move the tail in front of the arguments.
//! 4. Split the arguments on commas and trim each one. Trailing empty
//!    arguments are dropped, inner empty ones are kept.

use crate::dialect::Dialect;
use config::constants::{COMMENT_CHAR, CSV_SEPARATOR};

/// A tokenized, non-empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedLine {
    /// Command keyword as written (case preserved).
    pub command: String,
    /// Trimmed arguments, without trailing empty ones.
    pub arguments: Vec<String>,
    /// True if the command was glued to its arguments with the other
    /// dialect's separator and had to be split again.
    pub separator_recovered: bool,
}

impl TokenizedLine {
    /// Number of arguments up to and including the last non-empty one.
    #[inline]
    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }
}

/// Tokenizes a single line.
///
/// Returns `None` for blank and comment-only lines.
///
/// # Example
///
/// ```rust
/// use b3d_syntax::{tokenize_line, Dialect};
///
/// let line = tokenize_line(Dialect::B3d, "Face 0, 1, , 3, ,").unwrap();
/// assert_eq!(line.command, "Face");
/// assert_eq!(line.arguments, vec!["0", "1", "", "3"]);
///
/// assert!(tokenize_line(Dialect::Csv, "   ; only a comment").is_none());
/// ```
pub fn tokenize_line(dialect: Dialect, raw: &str) -> Option<TokenizedLine> {
    let code = match raw.find(COMMENT_CHAR) {
        Some(index) => &raw[..index],
        None => raw,
    }
    .trim();
    if code.is_empty() {
        return None;
    }

    let (mut command, mut argument_text) = match code.char_indices().find(|&(_, c)| dialect.is_separator(c)) {
        Some((index, separator)) => (
            code[..index].trim_end(),
            code[index + separator.len_utf8()..].trim_start().to_string(),
        ),
        None => (code, String::new()),
    };

    let mut separator_recovered = false;
    if let Some((index, separator)) = command
        .char_indices()
        .find(|&(_, c)| dialect.is_foreign_separator(c))
    {
        let tail = command[index + separator.len_utf8()..].trim();
        argument_text = match (tail.is_empty(), argument_text.is_empty()) {
            (true, _) => argument_text,
            (false, true) => tail.to_string(),
            (false, false) => format!("{tail}{CSV_SEPARATOR}{argument_text}"),
        };
        command = command[..index].trim_end();
        separator_recovered = true;
    }

    Some(TokenizedLine {
        command: command.to_string(),
        arguments: split_arguments(&argument_text),
        separator_recovered,
    })
}

/// Splits argument text on commas, keeping inner empty arguments and
/// dropping trailing ones.
fn split_arguments(text: &str) -> Vec<String> {
    let mut arguments: Vec<String> = text
        .split(CSV_SEPARATOR)
        .map(|argument| argument.trim().to_string())
        .collect();
    let count = arguments
        .iter()
        .rposition(|argument| !argument.is_empty())
        .map_or(0, |last| last + 1);
    arguments.truncate(count);
    arguments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert!(tokenize_line(Dialect::Csv, "").is_none());
        assert!(tokenize_line(Dialect::Csv, "   \t ").is_none());
        assert!(tokenize_line(Dialect::B3d, "; Vertex 1,2,3").is_none());
    }

    #[test]
    fn test_csv_line() {
        let line = tokenize_line(Dialect::Csv, "  AddVertex, 1.5 , -2,3  ").unwrap();
        assert_eq!(line.command, "AddVertex");
        assert_eq!(line.arguments, vec!["1.5", "-2", "3"]);
        assert!(!line.separator_recovered);
    }

    #[test]
    fn test_b3d_line() {
        let line = tokenize_line(Dialect::B3d, "Vertex 1, 2, 3 ; trailing comment").unwrap();
        assert_eq!(line.command, "Vertex");
        assert_eq!(line.arguments, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_command_without_arguments() {
        let line = tokenize_line(Dialect::B3d, "[MeshBuilder]").unwrap();
        assert_eq!(line.command, "[MeshBuilder]");
        assert_eq!(line.argument_count(), 0);

        let line = tokenize_line(Dialect::Csv, "CreateMeshBuilder,").unwrap();
        assert_eq!(line.command, "CreateMeshBuilder");
        assert_eq!(line.argument_count(), 0);
    }

    #[test]
    fn test_b3d_command_glued_with_comma() {
        let line = tokenize_line(Dialect::B3d, "Vertex,1,2 3").unwrap();
        assert_eq!(line.command, "Vertex");
        assert_eq!(line.arguments, vec!["1", "2", "3"]);
        assert!(line.separator_recovered);
    }

    #[test]
    fn test_b3d_command_glued_without_space() {
        let line = tokenize_line(Dialect::B3d, "Vertex,1,2,3").unwrap();
        assert_eq!(line.command, "Vertex");
        assert_eq!(line.arguments, vec!["1", "2", "3"]);
        assert!(line.separator_recovered);
    }

    #[test]
    fn test_csv_command_separated_by_space() {
        let line = tokenize_line(Dialect::Csv, "AddVertex 1,2,3").unwrap();
        assert_eq!(line.command, "AddVertex");
        assert_eq!(line.arguments, vec!["1", "2", "3"]);
        assert!(line.separator_recovered);
    }

    #[test]
    fn test_recovery_with_empty_tail_does_not_shift_arguments() {
        let line = tokenize_line(Dialect::B3d, "Vertex, 1,2").unwrap();
        assert_eq!(line.command, "Vertex");
        assert_eq!(line.arguments, vec!["1", "2"]);
        assert!(line.separator_recovered);
    }

    #[test]
    fn test_inner_empty_arguments_are_counted() {
        let line = tokenize_line(Dialect::Csv, "AddVertex,,,3,,").unwrap();
        assert_eq!(line.arguments, vec!["", "", "3"]);
        assert_eq!(line.argument_count(), 3);
    }

    #[test]
    fn test_only_empty_arguments() {
        let line = tokenize_line(Dialect::Csv, "AddVertex, , ,").unwrap();
        assert_eq!(line.argument_count(), 0);
    }

    #[test]
    fn test_tab_separates_b3d_command() {
        let line = tokenize_line(Dialect::B3d, "Translate\t1,2,3").unwrap();
        assert_eq!(line.command, "Translate");
        assert_eq!(line.argument_count(), 3);
    }
}
