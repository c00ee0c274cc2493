//! Whole-document syntax checking for editor tooling.
//!
//! This is the façade an editor integration calls with full document
//! text. It runs the same lexer and parser as the CLI - parsing is a
//! pure function of the text, with no file or process state - and maps
//! every parse diagnostic to a positioned `Diagnostic`. A syntactically
//! valid document yields an empty list. The JSON-RPC transport around
//! this is not part of the compiler.

use std::rc::Rc;

use crate::{errors::errors::Error, get_line_at_position, lexer::lexer::tokenize, parser::parser::parse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub character: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: LineCol,
    pub end: LineCol,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Severity,
    pub message: String,
}

/// Checks a whole document, returning one diagnostic per syntax error.
pub fn document_diagnostics(source: &str) -> Vec<Diagnostic> {
    let tokens = tokenize(source.to_string(), Some(String::from("document")));
    let (_, errors) = parse(tokens, Rc::new(String::from("document")));

    errors
        .iter()
        .map(|error| diagnostic_for(source, error))
        .collect()
}

fn diagnostic_for(source: &str, error: &Error) -> Diagnostic {
    let (line, _, column) = get_line_at_position(source, error.get_position().0);

    let start = LineCol {
        line,
        character: column + 1,
    };
    let end = LineCol {
        line,
        character: column + 2,
    };

    Diagnostic {
        range: Range { start, end },
        severity: Severity::Error,
        message: error.get_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::{document_diagnostics, Severity};

    #[test]
    fn test_valid_document_has_no_diagnostics() {
        let source = "lazy x = 1;\nlazyPrint(x);\n";
        assert!(document_diagnostics(source).is_empty());
    }

    #[test]
    fn test_empty_document_is_valid() {
        assert!(document_diagnostics("").is_empty());
        assert!(document_diagnostics("// just a comment\n").is_empty());
    }

    #[test]
    fn test_missing_expression_is_positioned() {
        let source = "lazy x = ;";
        let diagnostics = document_diagnostics(source);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert_eq!(diagnostics[0].range.start.line, 1);
        // Points at the `;` where the expression should have been
        assert_eq!(diagnostics[0].range.start.character, 10);
    }

    #[test]
    fn test_error_on_second_line() {
        let source = "lazy x = 1;\nlazy = 2;\n";
        let diagnostics = document_diagnostics(source);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range.start.line, 2);
        assert_eq!(diagnostics[0].range.start.character, 6);
    }
}
