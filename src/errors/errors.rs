use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::ExpectedStatement { .. } => "ExpectedStatement",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ReservedKeyword { .. } => "ReservedKeyword",
        }
    }

    /// Human-readable message for the diagnostics façade.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::ExpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected {}, found `{}`",
                expected, found
            )),
            ErrorImpl::ExpectedExpression { found } => ErrorTip::Suggestion(format!(
                "Expected an expression, found `{}`",
                found
            )),
            ErrorImpl::ExpectedStatement { found } => ErrorTip::Suggestion(format!(
                "`{}` does not begin a statement",
                found
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`",
                token
            )),
            ErrorImpl::ReservedKeyword { keyword } => ErrorTip::Suggestion(format!(
                "`{}` is reserved but not part of the grammar yet",
                keyword
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected}, found {found:?}")]
    ExpectedToken { expected: TokenKind, found: String },
    #[error("expected an expression, found {found:?}")]
    ExpectedExpression { found: String },
    #[error("expected a statement, found {found:?}")]
    ExpectedStatement { found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("reserved keyword {keyword:?} is not implemented")]
    ReservedKeyword { keyword: String },
}
