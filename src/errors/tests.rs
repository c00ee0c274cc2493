//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.lazy".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.lazy".to_string()));
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            found: ";".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_expected_token_error() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Identifier,
            found: "=".to_string(),
        },
        Position(0, Rc::new("test.lazy".to_string())),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(error.get_message(), "expected Identifier, found \"=\"");
}

#[test]
fn test_reserved_keyword_error() {
    let error = Error::new(
        ErrorImpl::ReservedKeyword {
            keyword: "while".to_string(),
        },
        Position(0, Rc::new("test.lazy".to_string())),
    );

    assert_eq!(error.get_error_name(), "ReservedKeyword");
}

#[test]
fn test_unrecognised_token_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        Position(0, Rc::new("test.lazy".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_expected_expression_tip() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            found: ";".to_string(),
        },
        Position(0, Rc::new("test.lazy".to_string())),
    );

    let ErrorTip::Suggestion(tip) = error.get_tip() else {
        panic!("expected a suggestion");
    };
    assert!(tip.contains(";"));
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "9e999999".to_string(),
        },
        Position(5, Rc::new("test.lazy".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}
