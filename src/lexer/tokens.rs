use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("lazy", TokenKind::Var);
        map.insert("lazyArray", TokenKind::Array);
        map.insert("lazyPrint", TokenKind::Print);
        map.insert("if", TokenKind::If);
        map.insert("el", TokenKind::Else);
        map.insert("for", TokenKind::For);
        // Reserved but carried by no grammar rule; the parser reports them
        map.insert("while", TokenKind::While);
        map.insert("in", TokenKind::In);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Number,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Var,
    Array,
    Print,
    If,
    Else,
    For,
    While,
    In,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
